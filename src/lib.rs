//! # gods-gauntlet
//!
//! Rules core for God's Gauntlet, a two-player board game in which each
//! player serves one of nine Greek deities and plays one-shot shrine cards
//! drawn from a shared pool.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: No rendering, input, timing or audio. A presentation
//!    layer reads queries (or one `MatchSnapshot`) and sends commands.
//!
//! 2. **Matches are values**: No globals. A `MatchState` owns its pool, its
//!    players and its shuffle source; create, clone and drop them freely.
//!
//! 3. **Soft rejections**: A command that breaks a rule returns a
//!    `Rejection`, leaves the rules state as it was, and sets the status
//!    message. Nothing panics on bad input.
//!
//! ## Match Flow
//!
//! ```
//! use gods_gauntlet::{Deity, MatchConfig, MatchState, PlayerId, Stage};
//!
//! let mut game = MatchState::new(MatchConfig::new().with_seed(1)).unwrap();
//! game.select_deity(PlayerId::ONE, Deity::Apollo).unwrap();
//! game.select_deity(PlayerId::TWO, Deity::Ares).unwrap();
//! assert_eq!(game.stage(), Stage::ApolloSelection);
//!
//! game.select_apollo_starting_shrine(PlayerId::ONE, Deity::Hera).unwrap();
//! assert_eq!(game.stage(), Stage::Playing);
//!
//! let spent = game.spend_selected_or_eligible_card().unwrap();
//! assert_eq!(spent.shrine, Deity::Hera);
//! game.end_turn().unwrap();
//! assert_eq!(game.current_player(), PlayerId::TWO);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, match state, commands, RNG, configuration, errors
//! - `deities`: the nine deities and secondary ability state
//! - `cards`: shrine cards, the shared pool, hands
//! - `rules`: the commands that change a match

pub mod cards;
pub mod core;
pub mod deities;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, Command, ConfigError, GameRng, HandEntry, InvalidSeat, LastOutcome,
    MatchConfig, MatchSnapshot, MatchState, Outcome, Patron, PlayerId, PlayerMap, PlayerState,
    PlayerView, Rejection, ShuffleError, ShuffleSource, Stage,
};

pub use crate::cards::{Hand, RefillOrder, ShrineCard, ShrinePool, SpentShrine};

pub use crate::deities::{AbilityKind, AbilityUse, CloneMarker, Deity, SecondaryAbility};
