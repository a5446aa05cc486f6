//! Secondary ability state.
//!
//! Each patron carries exactly the state its ability needs:
//! - cooldown deities: a recharge counter and a ready flag
//! - Hera: an optional clone marker
//! - Apollo and Demeter: nothing
//!
//! The gameplay effect of a cooldown ability (moving walls, placing traps)
//! is flavor text. Mechanically every cooldown ability is the same contract:
//! activate when ready, then recharge over `cooldown_turns` end-turns.

use serde::{Deserialize, Serialize};

use super::deity::{AbilityKind, Deity};

/// Hera's clone while it is on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneMarker {
    /// End-turns survived since it was spawned. Informational, no expiry.
    pub turns_active: u32,
}

/// Result of activating a secondary ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityUse {
    /// A cooldown ability fired and started recharging.
    Activated,
    /// Hera's clone appeared.
    CloneSpawned,
    /// Hera's clone was removed.
    CloneDespawned,
    /// The ability is passive; nothing changed.
    AlwaysOn,
}

/// Per-player secondary ability state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecondaryAbility {
    Cooldown { counter: u8, ready: bool },
    CloneToggle { marker: Option<CloneMarker> },
    Passive,
}

impl SecondaryAbility {
    /// Fresh ability state for a newly chosen deity.
    #[must_use]
    pub fn for_deity(deity: Deity) -> Self {
        match deity.ability_kind() {
            AbilityKind::Cooldown => SecondaryAbility::Cooldown {
                counter: 0,
                ready: true,
            },
            AbilityKind::CloneToggle => SecondaryAbility::CloneToggle { marker: None },
            AbilityKind::Passive => SecondaryAbility::Passive,
        }
    }

    /// Whether using the ability now would be accepted.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        match self {
            SecondaryAbility::Cooldown { ready, .. } => *ready,
            _ => true,
        }
    }

    /// End-turns counted since the last use. Always 0 unless recharging.
    #[must_use]
    pub fn counter(&self) -> u8 {
        match self {
            SecondaryAbility::Cooldown { counter, .. } => *counter,
            _ => 0,
        }
    }

    /// Hera's clone, if spawned.
    #[must_use]
    pub fn clone_marker(&self) -> Option<&CloneMarker> {
        match self {
            SecondaryAbility::CloneToggle { marker } => marker.as_ref(),
            _ => None,
        }
    }

    /// Use the ability.
    ///
    /// Returns `Err(turns_left)` when a cooldown ability is still recharging.
    /// State is untouched in that case.
    pub fn activate(&mut self, cooldown_turns: u8) -> Result<AbilityUse, u8> {
        match self {
            SecondaryAbility::Cooldown { counter, ready } => {
                if !*ready {
                    return Err(cooldown_turns.saturating_sub(*counter));
                }
                *ready = false;
                *counter = 0;
                Ok(AbilityUse::Activated)
            }
            SecondaryAbility::CloneToggle { marker } => {
                if marker.take().is_some() {
                    Ok(AbilityUse::CloneDespawned)
                } else {
                    *marker = Some(CloneMarker::default());
                    Ok(AbilityUse::CloneSpawned)
                }
            }
            SecondaryAbility::Passive => Ok(AbilityUse::AlwaysOn),
        }
    }

    /// Advance one end-turn: recharge a cooldown, age a clone.
    pub fn advance_turn(&mut self, cooldown_turns: u8) {
        match self {
            SecondaryAbility::Cooldown { counter, ready } if !*ready => {
                *counter += 1;
                if *counter >= cooldown_turns {
                    *ready = true;
                    *counter = 0;
                }
            }
            SecondaryAbility::CloneToggle {
                marker: Some(clone),
            } => clone.turns_active += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_deity() {
        assert_eq!(
            SecondaryAbility::for_deity(Deity::Hermes),
            SecondaryAbility::Cooldown {
                counter: 0,
                ready: true
            }
        );
        assert_eq!(
            SecondaryAbility::for_deity(Deity::Hera),
            SecondaryAbility::CloneToggle { marker: None }
        );
        assert_eq!(
            SecondaryAbility::for_deity(Deity::Demeter),
            SecondaryAbility::Passive
        );
    }

    #[test]
    fn test_cooldown_recharges_after_three_turns() {
        let mut ability = SecondaryAbility::for_deity(Deity::Athena);

        assert_eq!(ability.activate(3), Ok(AbilityUse::Activated));
        assert!(!ability.is_ready());
        assert_eq!(ability.activate(3), Err(3));

        ability.advance_turn(3);
        assert_eq!(ability.counter(), 1);
        ability.advance_turn(3);
        assert_eq!(ability.counter(), 2);
        assert_eq!(ability.activate(3), Err(1));

        ability.advance_turn(3);
        assert!(ability.is_ready());
        assert_eq!(ability.counter(), 0);
    }

    #[test]
    fn test_ready_cooldown_does_not_count() {
        let mut ability = SecondaryAbility::for_deity(Deity::Artemis);
        ability.advance_turn(3);
        ability.advance_turn(3);
        assert_eq!(ability.counter(), 0);
        assert!(ability.is_ready());
    }

    #[test]
    fn test_clone_toggle_and_aging() {
        let mut ability = SecondaryAbility::for_deity(Deity::Hera);

        assert_eq!(ability.activate(3), Ok(AbilityUse::CloneSpawned));
        ability.advance_turn(3);
        ability.advance_turn(3);
        assert_eq!(ability.clone_marker().map(|c| c.turns_active), Some(2));

        assert_eq!(ability.activate(3), Ok(AbilityUse::CloneDespawned));
        assert!(ability.clone_marker().is_none());

        // Respawn starts from zero
        assert_eq!(ability.activate(3), Ok(AbilityUse::CloneSpawned));
        assert_eq!(ability.clone_marker().map(|c| c.turns_active), Some(0));
    }

    #[test]
    fn test_passive_never_changes() {
        let mut ability = SecondaryAbility::for_deity(Deity::Apollo);
        assert_eq!(ability.activate(3), Ok(AbilityUse::AlwaysOn));
        ability.advance_turn(3);
        assert_eq!(ability, SecondaryAbility::Passive);
        assert!(ability.is_ready());
    }
}
