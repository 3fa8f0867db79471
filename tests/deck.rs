//! Deck generation, shuffle and card conservation tests.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sevenrs::{
    Card, DECK_SIZE, GameState, Rank, Suit, generate_deck, ordered_deck, shuffle, successors,
};

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_unstable();
    cards
}

fn all_cards(state: &GameState) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for player in 0..2 {
        cards.extend_from_slice(state.hand(player).unwrap().cards());
    }
    cards.extend_from_slice(state.stock().cards());
    cards.extend_from_slice(state.discard().cards());
    sorted(cards)
}

#[test]
fn ordered_deck_is_suit_major() {
    let deck = ordered_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(deck[11], Card::new(Rank::King, Suit::Diamonds));
    assert_eq!(deck[12], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck[DECK_SIZE - 1], Card::new(Rank::King, Suit::Spades));
    assert!(deck.is_sorted());
}

#[test]
fn shuffle_is_reproducible_for_a_seed() {
    let a = generate_deck(&mut ChaCha8Rng::seed_from_u64(5));
    let b = generate_deck(&mut ChaCha8Rng::seed_from_u64(5));
    let c = generate_deck(&mut ChaCha8Rng::seed_from_u64(6));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shuffle_handles_short_slices() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let mut empty: Vec<Card> = Vec::new();
    shuffle(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut one = vec![Card::new(Rank::Six, Suit::Hearts)];
    shuffle(&mut one, &mut rng);
    assert_eq!(one, vec![Card::new(Rank::Six, Suit::Hearts)]);
}

proptest! {
    #[test]
    fn generated_deck_is_a_permutation(seed in any::<u64>()) {
        let deck = generate_deck(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(sorted(deck), ordered_deck());
    }

    #[test]
    fn moves_conserve_every_card(seed in any::<u64>(), picks in prop::collection::vec(0usize..16, 0..40)) {
        let mut state = GameState::new_game(&mut ChaCha8Rng::seed_from_u64(seed));
        let expected = ordered_deck();
        prop_assert_eq!(all_cards(&state), expected.clone());

        for pick in picks {
            let mut next = successors(&state);
            if next.is_empty() {
                break;
            }
            let index = pick % next.len();
            state = next.swap_remove(index);

            prop_assert_eq!(state.total_cards(), DECK_SIZE);
            prop_assert!(state.hand(0).unwrap().is_sorted());
            prop_assert!(state.hand(1).unwrap().is_sorted());
            prop_assert_eq!(all_cards(&state), expected.clone());
        }
    }
}
