//! Turn phase types.

/// Phase of the human player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a draw from the stock or discard pile.
    Draw,
    /// Holding a drawn card; waiting for a discard.
    Discard,
}
