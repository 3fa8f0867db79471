//! Game session: the human turn transaction and the automated opponent.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::options::GameOptions;
use crate::state::GameState;

mod actions;
pub mod phase;

pub use phase::Phase;

/// A game session between a human player and the minimax opponent.
///
/// The session owns the authoritative [`GameState`]. A human turn is a
/// two-step transaction: draw a card into the pending slot, then either swap
/// it into the hand with [`commit_discard`](Self::commit_discard) or throw it
/// away with [`discard_drawn`](Self::discard_drawn). Completing the turn runs
/// the opponent search, whose chosen state replaces the current one.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Card drawn this turn and not yet placed.
    pending: Option<Card>,
    /// Score reported by the most recent opponent search.
    last_score: Option<i32>,
    /// Random number generator used for dealing.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session and deals the first game from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use sevenrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state().total_cards(), sevenrs::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new_game(&mut rng);
        log::debug!("dealt new game from seed {seed}");

        Self {
            options,
            state,
            pending: None,
            last_score: None,
            rng,
        }
    }

    /// Deals a fresh game with the session's generator.
    ///
    /// Any pending card and the last search score are discarded.
    pub fn new_round(&mut self) {
        self.state = GameState::new_game(&mut self.rng);
        self.pending = None;
        self.last_score = None;
        log::debug!("dealt new round");
    }

    /// Replaces the current state, dropping any pending card.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.pending = None;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase of the human turn.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Discard
        } else {
            Phase::Draw
        }
    }

    /// Returns the card drawn this turn, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<Card> {
        self.pending
    }

    /// Returns the score of the most recent opponent search.
    ///
    /// Returns `None` before the opponent has moved in this round.
    #[must_use]
    pub const fn last_score(&self) -> Option<i32> {
        self.last_score
    }
}
