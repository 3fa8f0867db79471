//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::StateError;

/// Number of cards each player holds between turns.
pub const HAND_SIZE: usize = 7;

/// A player's hand.
///
/// Cards are kept in ascending [`Card`] order after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a sorted hand from the given cards.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Adds a card and re-sorts the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.cards.sort_unstable();
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfRange`] if `index` is not a position in
    /// the hand.
    pub fn remove_card(&mut self, index: usize) -> Result<Card, StateError> {
        if index >= self.cards.len() {
            return Err(StateError::IndexOutOfRange);
        }

        let card = self.cards.remove(index);
        self.cards.sort_unstable();
        Ok(card)
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfRange`] if `index` is not a position in
    /// the hand.
    pub fn card(&self, index: usize) -> Result<Card, StateError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(StateError::IndexOutOfRange)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sums the card values of the hand.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.cards.iter().map(|card| i32::from(card.value())).sum()
    }

    /// Returns whether the hand is sorted in ascending card order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.cards.is_sorted()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
