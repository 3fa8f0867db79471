//! Error types for game operations.

use thiserror::Error;

/// Errors raised by [`GameState`](crate::GameState) queries and mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// Tried to take a card from an empty stock or discard pile.
    #[error("pile is empty")]
    EmptyPile,
    /// Player id is not 0 or 1.
    #[error("player id must be 0 or 1")]
    InvalidPlayer,
    /// Hand index is outside the hand.
    #[error("hand index out of range")]
    IndexOutOfRange,
}

/// Errors that can occur during a player's draw/discard turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A card has already been drawn this turn.
    #[error("a card has already been drawn this turn")]
    AlreadyDrawn,
    /// No card has been drawn yet this turn.
    #[error("no card has been drawn this turn")]
    NothingDrawn,
    /// The underlying state rejected the move.
    #[error(transparent)]
    State(#[from] StateError),
}
