//! Serializable snapshot of everything a presentation layer draws.
//!
//! A renderer can take one `MatchSnapshot` per frame instead of calling each
//! query, and a web front end can ship it as JSON.

use serde::{Deserialize, Serialize};

use super::action::LastOutcome;
use super::player::PlayerMap;
use super::state::{HandEntry, MatchState, Stage};
use crate::core::PlayerId;
use crate::deities::{CloneMarker, Deity};

/// Observable state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub deity: Option<Deity>,
    pub ability_ready: bool,
    pub ability_counter: u8,
    pub clone: Option<CloneMarker>,
    pub hand: Vec<HandEntry>,
    /// Apollo's sight; `None` for everyone else.
    pub next_shrine: Option<Deity>,
}

/// Observable state of the whole match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub stage: Stage,
    pub current_player: PlayerId,
    pub selector: Option<PlayerId>,
    pub turn_number: u32,
    pub cooldown_turns: u8,
    pub pool_remaining: usize,
    pub players: PlayerMap<PlayerView>,
    pub last_action: String,
    pub last_outcome: Option<LastOutcome>,
}

impl<S> MatchState<S> {
    /// Capture all queries at once.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            stage: self.stage(),
            current_player: self.current_player(),
            selector: self.selector(),
            turn_number: self.turn_number(),
            cooldown_turns: self.config().cooldown_turns,
            pool_remaining: self.pool_remaining(),
            players: PlayerMap::new(|player| PlayerView {
                deity: self.deity(player),
                ability_ready: self.ability_ready(player),
                ability_counter: self.ability_counter(player),
                clone: self.clone_marker(player).copied(),
                hand: self.hand_entries(player),
                next_shrine: self.next_shrine_for(player),
            }),
            last_action: self.last_action().to_string(),
            last_outcome: self.last_outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{MatchConfig, MatchState, PlayerId, Stage};

    #[test]
    fn test_snapshot_of_new_match() {
        let state = MatchState::new(MatchConfig::default()).unwrap();
        let snap = state.snapshot();

        assert_eq!(snap.stage, Stage::GodSelection);
        assert_eq!(snap.selector, Some(PlayerId::ONE));
        assert_eq!(snap.pool_remaining, 18);
        assert_eq!(snap.cooldown_turns, 3);
        assert!(snap.players[PlayerId::ONE].hand.is_empty());
        assert_eq!(snap.players[PlayerId::TWO].deity, None);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let state = MatchState::new(MatchConfig::default()).unwrap();
        let snap = state.snapshot();

        let json = serde_json::to_string(&snap).unwrap();
        let back: super::MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
