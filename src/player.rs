//! The human player.

use core::fmt;

use tracing::trace;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::DeckError;
use crate::hand::Hand;

/// The player's hand and per-round flags.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
    standing: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            standing: false,
        }
    }

    /// Draws a card from `source` into the player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the source has no cards left.
    pub fn get_card<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, DeckError> {
        let card = source.draw()?;
        self.hand.add_card(card);
        trace!(%card, score = self.hand.score(), "player takes a card");
        Ok(card)
    }

    /// Marks the player as standing for the rest of the round.
    pub const fn stand(&mut self) {
        self.standing = true;
    }

    /// Returns whether the player chose to stand.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Returns whether the player can take no further cards this round.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.standing || self.hand.is_busted() || self.hand.has_blackjack()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Clears the hand and the standing flag.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.standing = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player's hand")?;
        write!(f, "{}", self.hand)
    }
}
