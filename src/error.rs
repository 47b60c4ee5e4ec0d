//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("the deck is exhausted")]
    Exhausted,
}

/// Errors that can occur during game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// A card could not be drawn.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that end a console session.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Error)]
pub enum GameError {
    /// The engine rejected an action.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "std")]
impl From<DeckError> for GameError {
    fn from(err: DeckError) -> Self {
        Self::Action(err.into())
    }
}
