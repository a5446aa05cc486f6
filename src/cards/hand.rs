//! A player's hand of shrine cards.
//!
//! Cards are kept in acquisition order. At most one card is selected, and
//! only a card usable at selection time can be selected. Spending removes a
//! card without disturbing the order of the rest.

use serde::{Deserialize, Serialize};

use super::shrine::ShrineCard;

/// Why a hand refused to select a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// No card at that index.
    NotFound,
    /// The card was acquired this turn or later.
    NotUsable,
}

/// Ordered shrine cards plus the current selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<ShrineCard>,
    selected: Option<usize>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in acquisition order.
    #[must_use]
    pub fn cards(&self) -> &[ShrineCard] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ShrineCard> {
        self.cards.get(index)
    }

    /// Index of the selected card.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Cards usable on `turn`, with their indices.
    pub fn usable(&self, turn: u32) -> impl Iterator<Item = (usize, &ShrineCard)> {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, card)| card.is_usable(turn))
    }

    /// Add a card at the end.
    pub fn push(&mut self, card: ShrineCard) {
        self.cards.push(card);
    }

    /// Select the card at `index` if it is usable on `turn`.
    ///
    /// The current selection is kept on failure.
    pub fn select(&mut self, index: usize, turn: u32) -> Result<&ShrineCard, SelectError> {
        let card = self.cards.get(index).ok_or(SelectError::NotFound)?;
        if !card.is_usable(turn) {
            return Err(SelectError::NotUsable);
        }
        self.selected = Some(index);
        Ok(card)
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove the card to spend on `turn`.
    ///
    /// Takes the selected card if it is usable, otherwise the first usable
    /// card in acquisition order. Returns `None` if nothing is usable.
    pub fn take_for_spend(&mut self, turn: u32) -> Option<ShrineCard> {
        let selected = self
            .selected
            .filter(|&i| self.cards.get(i).is_some_and(|card| card.is_usable(turn)));
        let index = match selected {
            Some(i) => i,
            None => self.usable(turn).next()?.0,
        };
        Some(self.remove(index))
    }

    /// Remove the card at `index`, keeping the selection pointed at the same
    /// card when it survives.
    fn remove(&mut self, index: usize) -> ShrineCard {
        self.selected = match self.selected {
            Some(sel) if sel == index || sel >= self.cards.len() => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        self.cards.remove(index)
    }
}
