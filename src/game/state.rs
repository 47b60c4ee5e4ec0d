//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been dealt yet.
    NotStarted,
    /// Waiting for the player to hit, stand or quit.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both sides are done and the round can be settled.
    RoundOver,
    /// The round has been settled; the next one can start.
    RoundResolved,
    /// The player quit. No further rounds are played.
    Finished,
}

impl GameState {
    /// Returns whether a round is currently being played.
    #[must_use]
    pub const fn is_round_in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn | Self::RoundOver)
    }
}
