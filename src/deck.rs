//! Deck generation and shuffling.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Returns every card of the deck in suit-major, rank-ascending order.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Shuffles `cards` in place with a Fisher-Yates pass.
///
/// For `n` counting down from the length to 2, the element at `n - 1` is
/// swapped with one at a uniformly chosen index in `0..n`. The result only
/// depends on the values drawn from `rng`, so a seeded generator always
/// produces the same permutation.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for n in (2..=cards.len()).rev() {
        let k = rng.random_range(0..n);
        cards.swap(n - 1, k);
    }
}

/// Generates a full deck and shuffles it.
#[must_use]
pub fn generate_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = ordered_deck();
    shuffle(&mut cards, rng);
    cards
}
