//! Commands that change a match.
//!
//! Each command is a method on `MatchState`. A command either applies in
//! full or is refused with a [`Rejection`](crate::core::Rejection) and
//! changes nothing but the status message and history.
//!
//! - `selection`: deity picks and Apollo's starting shrine
//! - `turn`: ability use, draw, select, spend, end turn
//! - `engine`: `Command` dispatch and legal-command enumeration

mod engine;
mod selection;
mod turn;
