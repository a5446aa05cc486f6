//! Commands and their recorded history.
//!
//! A `Command` is a user intent forwarded by the presentation layer. Every
//! command sent to a match is appended to its history as an `ActionRecord`,
//! accepted or not, so a session can be replayed or audited.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::Stage;
use crate::cards::{ShrineCard, SpentShrine};
use crate::deities::{AbilityUse, Deity};

/// A request to change the match.
///
/// Selection-phase commands and hand selection name their player; turn
/// commands always act for the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    SelectDeity { player: PlayerId, deity: Deity },
    SelectApolloStartingShrine { player: PlayerId, shrine: Deity },
    UseSecondaryAbility,
    DrawShrineCard,
    SelectHandCard { player: PlayerId, index: usize },
    SpendSelectedOrEligibleCard,
    EndTurn,
}

/// Command discriminant, for outcome signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    SelectDeity,
    SelectApolloStartingShrine,
    UseSecondaryAbility,
    DrawShrineCard,
    SelectHandCard,
    SpendShrineCard,
    EndTurn,
}

impl Command {
    /// The kind of this command.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Command::SelectDeity { .. } => ActionKind::SelectDeity,
            Command::SelectApolloStartingShrine { .. } => ActionKind::SelectApolloStartingShrine,
            Command::UseSecondaryAbility => ActionKind::UseSecondaryAbility,
            Command::DrawShrineCard => ActionKind::DrawShrineCard,
            Command::SelectHandCard { .. } => ActionKind::SelectHandCard,
            Command::SpendSelectedOrEligibleCard => ActionKind::SpendShrineCard,
            Command::EndTurn => ActionKind::EndTurn,
        }
    }
}

/// What an accepted command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A deity was chosen; the match is now in `stage`.
    DeitySelected { stage: Stage },
    /// Apollo's starting shrine was granted; the match is now in `stage`.
    ApolloShrineSelected { stage: Stage },
    AbilityUsed(AbilityUse),
    ShrineDrawn(ShrineCard),
    HandCardSelected(ShrineCard),
    ShrineSpent(SpentShrine),
    /// The turn passed to `next_player`.
    TurnEnded { next_player: PlayerId },
}

/// Whether the most recent command was accepted, and what kind it was.
///
/// Presentation layers drive flashes and transitions from this instead of
/// keeping timers in the rules state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastOutcome {
    pub kind: ActionKind,
    pub accepted: bool,
}

/// A command as it was applied, with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player the command acted for.
    pub player: PlayerId,

    /// The command sent.
    pub command: Command,

    /// Turn number when the command arrived.
    pub turn: u32,

    /// Position in the match history (0-based).
    pub sequence: u32,

    /// False for soft rejections.
    pub accepted: bool,
}
