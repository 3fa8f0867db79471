//! Authoritative game state: two hands, the stock and discard piles, and the
//! turn indicator.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::generate_deck;
use crate::error::StateError;
use crate::hand::{HAND_SIZE, Hand};
use crate::pile::Pile;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// A snapshot of a game in progress.
///
/// Cards only move between the four locations; a dealt game always holds
/// [`DECK_SIZE`](crate::DECK_SIZE) cards in total. Cloning (or
/// [`duplicate`](Self::duplicate)) produces a fully independent value, which
/// is what the search relies on to explore branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    hands: [Hand; PLAYER_COUNT],
    stock: Pile,
    discard: Pile,
    turn: u8,
}

impl GameState {
    /// Deals a new game from a freshly shuffled deck.
    ///
    /// Players alternately take seven cards from the end of the deck, one
    /// card seeds the discard pile, and the rest go to the stock pile in the
    /// order they are removed. Player 0 moves first.
    #[must_use]
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = generate_deck(rng);

        let mut hand0 = Vec::with_capacity(HAND_SIZE + 1);
        let mut hand1 = Vec::with_capacity(HAND_SIZE + 1);
        for _ in 0..HAND_SIZE {
            hand0.extend(deck.pop());
            hand1.extend(deck.pop());
        }

        let mut discard = Pile::new();
        if let Some(card) = deck.pop() {
            discard.push(card);
        }

        let mut stock = Pile::new();
        while let Some(card) = deck.pop() {
            stock.push(card);
        }

        Self {
            hands: [Hand::from_cards(hand0), Hand::from_cards(hand1)],
            stock,
            discard,
            turn: 0,
        }
    }

    /// Builds a state from explicit parts.
    ///
    /// Piles are listed bottom to top. Hands are sorted on construction.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPlayer`] if `turn` is not 0 or 1.
    pub fn from_parts(
        hand0: Vec<Card>,
        hand1: Vec<Card>,
        stock: Vec<Card>,
        discard: Vec<Card>,
        turn: u8,
    ) -> Result<Self, StateError> {
        if usize::from(turn) >= PLAYER_COUNT {
            return Err(StateError::InvalidPlayer);
        }

        Ok(Self {
            hands: [Hand::from_cards(hand0), Hand::from_cards(hand1)],
            stock: Pile::from_cards(stock),
            discard: Pile::from_cards(discard),
            turn,
        })
    }

    /// Returns an independent copy of this state.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Returns the top of the stock pile, if any.
    #[must_use]
    pub fn peek_stock(&self) -> Option<Card> {
        self.stock.peek()
    }

    /// Returns the top of the discard pile, if any.
    #[must_use]
    pub fn peek_discard(&self) -> Option<Card> {
        self.discard.peek()
    }

    /// Removes and returns the top of the stock pile.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyPile`] if the stock pile is empty.
    pub fn pop_stock(&mut self) -> Result<Card, StateError> {
        self.stock.pop()
    }

    /// Removes and returns the top of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyPile`] if the discard pile is empty.
    pub fn pop_discard(&mut self) -> Result<Card, StateError> {
        self.discard.pop()
    }

    /// Places a card on top of the discard pile.
    pub fn push_discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Returns the stock pile.
    #[must_use]
    pub const fn stock(&self) -> &Pile {
        &self.stock
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard(&self) -> &Pile {
        &self.discard
    }

    /// Returns the hand of `player`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPlayer`] if `player` is not 0 or 1.
    pub fn hand(&self, player: u8) -> Result<&Hand, StateError> {
        self.hands
            .get(usize::from(player))
            .ok_or(StateError::InvalidPlayer)
    }

    fn hand_mut(&mut self, player: u8) -> Result<&mut Hand, StateError> {
        self.hands
            .get_mut(usize::from(player))
            .ok_or(StateError::InvalidPlayer)
    }

    /// Returns the card at `index` in `player`'s hand.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPlayer`] if `player` is not 0 or 1, or
    /// [`StateError::IndexOutOfRange`] if `index` is outside the hand.
    pub fn player_card(&self, player: u8, index: usize) -> Result<Card, StateError> {
        self.hand(player)?.card(index)
    }

    /// Returns the card at `index` in the current player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfRange`] if `index` is outside the hand.
    pub fn current_player_card(&self, index: usize) -> Result<Card, StateError> {
        self.player_card(self.turn, index)
    }

    /// Moves the card at `index` from `player`'s hand to the discard pile.
    ///
    /// Returns the discarded card.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPlayer`] if `player` is not 0 or 1, or
    /// [`StateError::IndexOutOfRange`] if `index` is outside the hand.
    pub fn discard_player_card(&mut self, player: u8, index: usize) -> Result<Card, StateError> {
        let card = self.hand_mut(player)?.remove_card(index)?;
        self.discard.push(card);
        Ok(card)
    }

    /// Moves the card at `index` from the current player's hand to the
    /// discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IndexOutOfRange`] if `index` is outside the hand.
    pub fn discard_current_player_card(&mut self, index: usize) -> Result<Card, StateError> {
        self.discard_player_card(self.turn, index)
    }

    /// Adds a card to `player`'s hand.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPlayer`] if `player` is not 0 or 1.
    pub fn add_player_card(&mut self, player: u8, card: Card) -> Result<(), StateError> {
        self.hand_mut(player)?.add_card(card);
        Ok(())
    }

    /// Adds a card to the current player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPlayer`] if the stored turn is not 0 or 1.
    pub fn add_current_player_card(&mut self, card: Card) -> Result<(), StateError> {
        self.add_player_card(self.turn, card)
    }

    /// Returns the player whose turn it is (0 or 1).
    #[must_use]
    pub const fn turn(&self) -> u8 {
        self.turn
    }

    /// Passes the turn to the other player.
    pub const fn next_turn(&mut self) {
        self.turn = 1 - self.turn;
    }

    /// Returns the number of cards in the stock pile.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Returns the number of cards across both hands and both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.stock.len() + self.discard.len()
    }

    /// Evaluates the position from a fixed viewpoint.
    ///
    /// Player 0's card values count negatively and player 1's positively,
    /// regardless of whose turn it is.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.hands[1].value() - self.hands[0].value()
    }
}
