//! Shrine cards: the shared pool and the hands they are drawn into.
//!
//! ## Key Types
//!
//! - `ShrineCard`: a deity-named card stamped with its acquisition turn
//! - `SpentShrine`: a card consumed by spending it
//! - `ShrinePool`: the shared shuffled draw source, self-refilling
//! - `Hand`: a player's cards in acquisition order, with a selection

pub mod hand;
pub mod pool;
pub mod shrine;

pub use hand::{Hand, SelectError};
pub use pool::{RefillOrder, ShrinePool};
pub use shrine::{ShrineCard, SpentShrine, STARTING_TURN};
