//! Match state: everything the rules need, nothing the renderer needs.
//!
//! ## MatchState
//!
//! Owns both players, the shrine pool, the turn counter, and the stage.
//! Presentation code reads it through queries and changes it only through
//! the commands in [`crate::rules`]. A match is an ordinary value: create
//! as many as you like, clone them, drop them.
//!
//! ## Stage
//!
//! `GodSelection -> ApolloSelection (only if someone picked Apollo) -> Playing`.
//! Stages only move forward.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::num::NonZeroU8;

use super::action::{ActionRecord, Command, LastOutcome};
use super::config::MatchConfig;
use super::error::{ConfigError, Rejection};
use super::player::{PlayerId, PlayerMap};
use super::rng::{GameRng, ShuffleSource};
use crate::cards::{Hand, ShrineCard, ShrinePool};
use crate::deities::{CloneMarker, Deity, SecondaryAbility};

/// Status shown before anyone has picked.
const OPENING_STATUS: &str = "Select your main god!";

/// Match stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Players pick deities, player 1 first.
    GodSelection,
    /// Apollo players pick a starting shrine, in pick order.
    ApolloSelection,
    /// Turns are being played.
    Playing,
}

/// A chosen deity and its ability state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub deity: Deity,
    pub ability: SecondaryAbility,
}

impl Patron {
    /// Patron with fresh ability state.
    #[must_use]
    pub fn new(deity: Deity) -> Self {
        Self {
            deity,
            ability: SecondaryAbility::for_deity(deity),
        }
    }
}

/// One player's rules state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub(crate) patron: Option<Patron>,
    pub(crate) hand: Hand,
}

impl PlayerState {
    /// Chosen deity, once picked.
    #[must_use]
    pub fn deity(&self) -> Option<Deity> {
        self.patron.map(|p| p.deity)
    }

    /// Chosen deity and ability state, once picked.
    #[must_use]
    pub fn patron(&self) -> Option<&Patron> {
        self.patron.as_ref()
    }

    /// Shrine cards held.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Whether the secondary ability would fire. True before a pick and for
    /// abilities without a cooldown.
    #[must_use]
    pub fn ability_ready(&self) -> bool {
        self.patron.map_or(true, |p| p.ability.is_ready())
    }

    /// End-turns counted toward recharging.
    #[must_use]
    pub fn ability_counter(&self) -> u8 {
        self.patron.map_or(0, |p| p.ability.counter())
    }

    /// Hera's clone, if spawned.
    #[must_use]
    pub fn clone_marker(&self) -> Option<&CloneMarker> {
        self.patron.as_ref().and_then(|p| p.ability.clone_marker())
    }
}

/// A card in a hand as a presentation layer needs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEntry {
    pub card: ShrineCard,
    pub usable: bool,
    pub selected: bool,
}

/// The match.
///
/// `S` is the shuffle source for the shrine pool; `GameRng` unless a host
/// or test injects another.
#[derive(Clone, Debug)]
pub struct MatchState<S = GameRng> {
    pub(crate) config: MatchConfig,
    pub(crate) stage: Stage,
    pub(crate) players: PlayerMap<PlayerState>,
    pub(crate) pool: ShrinePool,
    pub(crate) current_player: PlayerId,
    pub(crate) turn_number: u32,
    /// Who is choosing during the selection stages.
    pub(crate) selector: PlayerId,
    /// Apollo players still to choose a starting shrine, in pick order.
    pub(crate) apollo_queue: SmallVec<[PlayerId; 2]>,
    pub(crate) last_action: String,
    pub(crate) last_outcome: Option<LastOutcome>,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) source: S,
}

impl MatchState<GameRng> {
    /// Create a match shuffled by `GameRng::new(config.seed)`.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }
}

impl<S: ShuffleSource> MatchState<S> {
    /// Create a match shuffled by `source`.
    pub fn with_source(config: MatchConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let copies = NonZeroU8::new(config.copies_per_shrine).ok_or(ConfigError::ZeroCopies)?;
        let pool = ShrinePool::new(copies, &mut source);

        Ok(Self {
            config,
            stage: Stage::GodSelection,
            players: PlayerMap::with_default(),
            pool,
            current_player: PlayerId::ONE,
            turn_number: 1,
            selector: PlayerId::ONE,
            apollo_queue: SmallVec::new(),
            last_action: OPENING_STATUS.to_string(),
            last_outcome: None,
            history: Vector::new(),
            source,
        })
    }

    /// Draw from the pool into `player`'s hand, stamped with `acquired_turn`.
    pub(crate) fn draw_into_hand(
        &mut self,
        player: PlayerId,
        acquired_turn: u32,
    ) -> Result<ShrineCard, Rejection> {
        let shrine = self
            .pool
            .draw(&mut self.source)
            .ok_or(Rejection::EmptyPool)?;
        let card = ShrineCard::new(shrine, acquired_turn);
        self.players[player].hand.push(card);
        Ok(card)
    }
}

impl<S> MatchState<S> {
    // === Queries ===

    /// Configuration the match was created with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Player whose turn it is. Player 1 until play begins.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Player who is choosing, during the selection stages.
    #[must_use]
    pub fn selector(&self) -> Option<PlayerId> {
        match self.stage {
            Stage::GodSelection | Stage::ApolloSelection => Some(self.selector),
            Stage::Playing => None,
        }
    }

    /// Apollo players still waiting to choose, front first.
    #[must_use]
    pub fn apollo_queue(&self) -> &[PlayerId] {
        &self.apollo_queue
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// A player's rules state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// A player's deity, once picked.
    #[must_use]
    pub fn deity(&self, player: PlayerId) -> Option<Deity> {
        self.players[player].deity()
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.players[player].hand
    }

    /// A player's hand with usability and selection flags for this turn.
    #[must_use]
    pub fn hand_entries(&self, player: PlayerId) -> Vec<HandEntry> {
        let hand = &self.players[player].hand;
        hand.cards()
            .iter()
            .enumerate()
            .map(|(i, &card)| HandEntry {
                card,
                usable: self.is_usable(&card),
                selected: hand.selected() == Some(i),
            })
            .collect()
    }

    /// Whether `card` can be selected or spent this turn.
    #[must_use]
    pub fn is_usable(&self, card: &ShrineCard) -> bool {
        card.is_usable(self.turn_number)
    }

    /// Index of a player's selected card.
    #[must_use]
    pub fn selected_card(&self, player: PlayerId) -> Option<usize> {
        self.players[player].hand.selected()
    }

    /// Whether a player's secondary ability is ready.
    #[must_use]
    pub fn ability_ready(&self, player: PlayerId) -> bool {
        self.players[player].ability_ready()
    }

    /// End-turns counted toward a player's recharge.
    #[must_use]
    pub fn ability_counter(&self, player: PlayerId) -> u8 {
        self.players[player].ability_counter()
    }

    /// `(counter, cooldown_turns)`, for drawing a recharge bar.
    #[must_use]
    pub fn cooldown_progress(&self, player: PlayerId) -> (u8, u8) {
        (self.ability_counter(player), self.config.cooldown_turns)
    }

    /// Whether `use_secondary_ability` would be accepted for `player` now.
    #[must_use]
    pub fn can_use_secondary_ability(&self, player: PlayerId) -> bool {
        self.stage == Stage::Playing
            && self.current_player == player
            && self.players[player]
                .patron
                .is_some_and(|p| p.ability.is_ready())
    }

    /// Hera's clone for a player, if spawned.
    #[must_use]
    pub fn clone_marker(&self, player: PlayerId) -> Option<&CloneMarker> {
        self.players[player].clone_marker()
    }

    /// Whether a player has a clone on the board.
    #[must_use]
    pub fn has_clone(&self, player: PlayerId) -> bool {
        self.clone_marker(player).is_some()
    }

    /// The shrine pool.
    #[must_use]
    pub fn pool(&self) -> &ShrinePool {
        &self.pool
    }

    /// Cards left in the pool.
    #[must_use]
    pub fn pool_remaining(&self) -> usize {
        self.pool.len()
    }

    /// Apollo's sight: the next shrine the pool will give, shown only to an
    /// Apollo player once play has begun.
    #[must_use]
    pub fn next_shrine_for(&self, player: PlayerId) -> Option<Deity> {
        let is_apollo = self.deity(player) == Some(Deity::Apollo);
        if is_apollo && self.stage == Stage::Playing {
            self.pool.peek()
        } else {
            None
        }
    }

    /// Shrines an Apollo player may choose from: the full composition in
    /// canonical order, whether or not a copy is still in the pool.
    #[must_use]
    pub fn apollo_choices(&self) -> Vec<Deity> {
        ShrinePool::full_set(self.pool.copies())
    }

    /// Human-readable summary of the last command, rejections included.
    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    /// Kind and acceptance of the last command.
    #[must_use]
    pub fn last_outcome(&self) -> Option<LastOutcome> {
        self.last_outcome
    }

    /// Every command sent to this match, in order.
    ///
    /// Rejected commands are recorded too. The history is never trimmed, so
    /// it grows by one entry per command for the life of the match.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Bookkeeping ===

    /// Check the stage for a command.
    pub(crate) fn require_stage(&self, expected: Stage) -> Result<(), Rejection> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(Rejection::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }

    /// Apply a command and record its result as the status message, outcome
    /// signal and history entry.
    ///
    /// `apply` must leave the rules state untouched when it returns `Err`.
    pub(crate) fn run<T>(
        &mut self,
        player: PlayerId,
        command: Command,
        apply: impl FnOnce(&mut Self) -> Result<T, Rejection>,
        describe: impl FnOnce(&Self, &T) -> String,
    ) -> Result<T, Rejection> {
        let turn = self.turn_number;
        let result = apply(self);
        match &result {
            Ok(value) => {
                self.last_action = describe(self, value);
                tracing::debug!(
                    %player,
                    turn,
                    ?command,
                    status = %self.last_action,
                    "command applied"
                );
            }
            Err(rejection) => {
                self.last_action = format!("{player}: {rejection}");
                tracing::debug!(%player, turn, ?command, %rejection, "command rejected");
            }
        }

        let accepted = result.is_ok();
        self.last_outcome = Some(LastOutcome {
            kind: command.kind(),
            accepted,
        });
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_back(ActionRecord {
            player,
            command,
            turn,
            sequence,
            accepted,
        });
        result
    }
}
