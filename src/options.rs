//! Game configuration options.

/// Number of random swaps performed by [`ShuffleMode::RandomSwaps`] by default.
pub const DEFAULT_SHUFFLE_SWAPS: usize = 200;

/// How a fresh deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Swap two randomly chosen positions a fixed number of times.
    ///
    /// Positions may repeat and a card may be swapped with itself, so the
    /// resulting permutation is not uniformly distributed.
    #[default]
    RandomSwaps,
    /// Fisher-Yates shuffle producing a uniformly random permutation.
    Uniform,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use soft17::{GameOptions, ShuffleMode};
///
/// let options = GameOptions::default()
///     .with_shuffle(ShuffleMode::Uniform)
///     .with_show_rules(false);
/// assert_eq!(options.shuffle, ShuffleMode::Uniform);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Shuffle algorithm used for every new deck.
    pub shuffle: ShuffleMode,
    /// Swap count for [`ShuffleMode::RandomSwaps`].
    pub shuffle_swaps: usize,
    /// Whether the console prints the rules before the first round.
    pub show_rules: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle: ShuffleMode::RandomSwaps,
            shuffle_swaps: DEFAULT_SHUFFLE_SWAPS,
            show_rules: true,
        }
    }
}

impl GameOptions {
    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::{GameOptions, ShuffleMode};
    ///
    /// let options = GameOptions::default().with_shuffle(ShuffleMode::Uniform);
    /// assert_eq!(options.shuffle, ShuffleMode::Uniform);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the number of swaps used by [`ShuffleMode::RandomSwaps`].
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_swaps(1_000);
    /// assert_eq!(options.shuffle_swaps, 1_000);
    /// ```
    #[must_use]
    pub const fn with_shuffle_swaps(mut self, swaps: usize) -> Self {
        self.shuffle_swaps = swaps;
        self
    }

    /// Sets whether the rules are printed before the first round.
    #[must_use]
    pub const fn with_show_rules(mut self, show: bool) -> Self {
        self.show_rules = show;
        self
    }
}
