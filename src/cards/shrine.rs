//! Shrine cards.
//!
//! A shrine card is a deity-named identity plus the turn it was acquired on.
//! It becomes usable on the turn after it was acquired. Starting cards
//! (Apollo's pick, Demeter's gift) are acquired on turn 0 and are usable
//! from the first turn.

use serde::{Deserialize, Serialize};

use crate::deities::Deity;

/// Turn stamped on cards granted before the match starts.
pub const STARTING_TURN: u32 = 0;

/// A shrine card held in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShrineCard {
    /// Card identity.
    pub shrine: Deity,

    /// Turn number on which the card entered the hand.
    pub acquired_turn: u32,
}

impl ShrineCard {
    /// Create a card acquired on `turn`.
    #[must_use]
    pub const fn new(shrine: Deity, acquired_turn: u32) -> Self {
        Self {
            shrine,
            acquired_turn,
        }
    }

    /// Create a card granted before the match starts.
    #[must_use]
    pub const fn starting(shrine: Deity) -> Self {
        Self::new(shrine, STARTING_TURN)
    }

    /// Whether the card can be selected or spent on `turn`.
    #[must_use]
    pub const fn is_usable(&self, turn: u32) -> bool {
        self.acquired_turn < turn
    }
}

/// A card removed from a hand by spending it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpentShrine {
    /// Card identity.
    pub shrine: Deity,

    /// Spent by a Demeter player.
    pub enhanced: bool,
}
