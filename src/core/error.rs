//! Error types.
//!
//! Rule violations are never faults. A command that breaks a rule returns a
//! [`Rejection`], the match records it as the last status message, and no
//! rules state changes. The only externally caused failure is the shuffle
//! source, and the pool absorbs that one itself (see `ShrinePool::refill`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Stage;
use crate::core::PlayerId;
use crate::deities::Deity;

/// Why a command was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("not allowed during {actual:?} (needs {expected:?})")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("not your turn to choose")]
    NotYourPick { player: PlayerId },

    #[error("no deity chosen")]
    NoDeity { player: PlayerId },

    #[error("{deity} ability not ready, {turns_left} turns left")]
    AbilityNotReady { deity: Deity, turns_left: u8 },

    #[error("no shrine card at index {index}")]
    CardNotFound { player: PlayerId, index: usize },

    #[error("shrine card at index {index} is not usable this turn")]
    CardNotUsable { player: PlayerId, index: usize },

    #[error("no shrine card usable right now")]
    NoUsableCard { player: PlayerId },

    /// Only reachable through a pool that holds no cards at all.
    #[error("the shrine pool is empty")]
    EmptyPool,
}

/// A shuffle source could not produce a permutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("shuffle source failed: {reason}")]
pub struct ShuffleError {
    pub reason: String,
}

impl ShuffleError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Invalid `MatchConfig` values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cooldown_turns must be at least 1")]
    ZeroCooldown,

    #[error("copies_per_shrine must be at least 1")]
    ZeroCopies,
}

/// A seat number other than 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid seat {0}, expected 1 or 2")]
pub struct InvalidSeat(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = Rejection::AbilityNotReady {
            deity: Deity::Hermes,
            turns_left: 2,
        };
        assert_eq!(err.to_string(), "Hermes ability not ready, 2 turns left");

        let err = Rejection::CardNotFound {
            player: PlayerId::ONE,
            index: 4,
        };
        assert_eq!(err.to_string(), "no shrine card at index 4");
    }

    #[test]
    fn test_invalid_seat_message() {
        assert_eq!(InvalidSeat(0).to_string(), "invalid seat 0, expected 1 or 2");
    }

    #[test]
    fn test_rejection_serde() {
        let err = Rejection::WrongStage {
            expected: Stage::Playing,
            actual: Stage::GodSelection,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: Rejection = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
