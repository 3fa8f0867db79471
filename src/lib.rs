//! A two-player seven-card draw-and-discard game with an exhaustive minimax
//! opponent, with optional `no_std` support.
//!
//! [`GameState`] holds both hands, the stock and discard piles, and whose
//! turn it is. [`minimax`] searches duplicated states to pick the opponent's
//! move, and [`Game`] wraps both into a session driven by a human player.
//!
//! # Example
//!
//! ```no_run
//! use sevenrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.draw_from_stock()?;
//! let score = game.commit_discard(0)?;
//! let _ = score;
//! # Ok::<(), sevenrs::MoveError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod search;
pub mod state;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{generate_deck, ordered_deck, shuffle};
pub use error::{MoveError, StateError};
pub use game::{Game, Phase};
pub use hand::{HAND_SIZE, Hand};
pub use options::{DEFAULT_SEARCH_DEPTH, GameOptions};
pub use pile::Pile;
pub use search::{SearchOutcome, minimax, run_opponent_search, successors};
pub use state::{GameState, PLAYER_COUNT};
