//! Game configuration options.

/// Search depth used when none is configured.
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use sevenrs::GameOptions;
///
/// let options = GameOptions::default().with_search_depth(2);
/// assert_eq!(options.search_depth, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Plies the opponent searches after each human turn.
    ///
    /// The search visits `16^depth` leaves, so values above 5 get slow.
    pub search_depth: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl GameOptions {
    /// Sets the opponent's search depth.
    ///
    /// At depth 0 the search returns the state unchanged, so the opponent
    /// does not move and keeps the turn.
    ///
    /// # Example
    ///
    /// ```
    /// use sevenrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_search_depth(3);
    /// assert_eq!(options.search_depth, 3);
    /// ```
    #[must_use]
    pub const fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }
}
