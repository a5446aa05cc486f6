//! Deities: reference data and secondary ability state.
//!
//! ## Key Types
//!
//! - `Deity`: the nine patrons, also the identities on shrine cards
//! - `AbilityKind`: cooldown, clone toggle, or passive
//! - `SecondaryAbility`: per-player ability state, one variant per kind
//! - `CloneMarker`: Hera's clone while spawned

pub mod ability;
pub mod deity;

pub use ability::{AbilityUse, CloneMarker, SecondaryAbility};
pub use deity::{AbilityKind, Deity, UnknownDeity};
