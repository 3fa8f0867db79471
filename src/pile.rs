//! Stock and discard piles.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::StateError;

/// A last-in, first-out pile of cards.
///
/// The top of the pile is the most recently pushed card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards listed bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyPile`] if the pile has no cards.
    pub fn pop(&mut self) -> Result<Card, StateError> {
        self.cards.pop().ok_or(StateError::EmptyPile)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
