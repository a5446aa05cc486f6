//! The shared shrine pool.
//!
//! A full pool holds `copies` of each of the nine identities, shuffled.
//! Draws take from the end. An empty pool is refilled with a fresh shuffle
//! of the full set before a draw, and again right after a draw that took
//! the last card, so the pool a player sees between commands is never empty.

use rustc_hash::FxHashMap;
use std::num::NonZeroU8;

use crate::core::ShuffleSource;
use crate::deities::Deity;

/// How the last refill was ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefillOrder {
    /// The shuffle source produced the order.
    Shuffled,
    /// The source failed; cards are in canonical order.
    Fallback,
}

/// Shared, shuffled draw source.
///
/// ```
/// use std::num::NonZeroU8;
/// use gods_gauntlet::cards::ShrinePool;
/// use gods_gauntlet::core::GameRng;
///
/// let mut rng = GameRng::new(1);
/// let mut pool = ShrinePool::new(NonZeroU8::new(2).unwrap(), &mut rng);
/// assert_eq!(pool.len(), 18);
///
/// let card = pool.draw(&mut rng);
/// assert!(card.is_some());
/// assert_eq!(pool.len(), 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShrinePool {
    /// Top of the pool is the end of the vec.
    cards: Vec<Deity>,
    copies: NonZeroU8,
}

impl ShrinePool {
    /// Create a full, shuffled pool.
    pub fn new<S: ShuffleSource + ?Sized>(copies: NonZeroU8, source: &mut S) -> Self {
        let mut pool = Self {
            cards: Vec::new(),
            copies,
        };
        pool.refill(source);
        pool
    }

    /// The full composition in canonical order: each identity once, repeated
    /// `copies` times.
    #[must_use]
    pub fn full_set(copies: NonZeroU8) -> Vec<Deity> {
        let mut cards = Vec::with_capacity(Deity::ALL.len() * usize::from(copies.get()));
        for _ in 0..copies.get() {
            cards.extend(Deity::ALL);
        }
        cards
    }

    /// Copies of each identity in a full pool.
    #[must_use]
    pub fn copies(&self) -> NonZeroU8 {
        self.copies
    }

    /// Size of a full pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        Deity::ALL.len() * usize::from(self.copies.get())
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card the next draw will take, if the pool is not empty.
    #[must_use]
    pub fn peek(&self) -> Option<Deity> {
        self.cards.last().copied()
    }

    /// Check if at least one copy of `shrine` remains.
    #[must_use]
    pub fn contains(&self, shrine: Deity) -> bool {
        self.cards.contains(&shrine)
    }

    /// Remaining copies per identity. Identities with no copies left are
    /// absent.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<Deity, usize> {
        let mut counts = FxHashMap::default();
        for &card in &self.cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Replace the contents with a fresh shuffle of the full set.
    ///
    /// A failing source does not abort the match: the pool is left in
    /// canonical order instead.
    pub fn refill<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) -> RefillOrder {
        let mut cards = Self::full_set(self.copies);
        let order = match source.try_shuffle(&mut cards) {
            Ok(()) => RefillOrder::Shuffled,
            Err(err) => {
                tracing::warn!(%err, "shuffle failed, refilling shrine pool in canonical order");
                cards = Self::full_set(self.copies);
                RefillOrder::Fallback
            }
        };
        self.cards = cards;
        tracing::debug!(size = self.cards.len(), ?order, "shrine pool refilled");
        order
    }

    /// Refill only if empty.
    pub fn refill_if_empty<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) {
        if self.cards.is_empty() {
            self.refill(source);
        }
    }

    /// Draw the top card, refilling before and after as needed.
    ///
    /// Always `Some` for a pool built with `new`.
    pub fn draw<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) -> Option<Deity> {
        self.refill_if_empty(source);
        let card = self.cards.pop()?;
        self.refill_if_empty(source);
        Some(card)
    }

    /// Take one copy of `shrine` out of the pool, wherever it sits.
    ///
    /// Returns false, and leaves the pool alone, if no copy remains.
    pub fn remove_one(&mut self, shrine: Deity) -> bool {
        match self.cards.iter().position(|&card| card == shrine) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }
}
