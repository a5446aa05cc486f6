//! Core match types: players, state, commands, RNG, configuration, errors.
//!
//! Everything here is independent of how a match is drawn. Presentation
//! layers read `MatchState` queries or a `MatchSnapshot` and send commands.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{ActionKind, ActionRecord, Command, LastOutcome, Outcome};
pub use config::MatchConfig;
pub use error::{ConfigError, InvalidSeat, Rejection, ShuffleError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, ShuffleSource};
pub use state::{HandEntry, MatchState, Patron, PlayerState, Stage};
pub use view::{MatchSnapshot, PlayerView};
