use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher, and stands on soft 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let drawn = self.dealer.play()?;
        debug!(
            drawn = drawn.len(),
            score = self.dealer.hand().score(),
            "dealer stands"
        );
        self.state = GameState::RoundOver;

        Ok(drawn)
    }

    /// Settles the round and updates the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ActionError> {
        if self.state != GameState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        let result = RoundResult::from_hands(self.player.hand(), self.dealer.hand());
        self.summary.record(result.outcome);
        self.state = GameState::RoundResolved;

        info!(
            outcome = ?result.outcome,
            player = result.player_score,
            dealer = result.dealer_score,
            "round settled"
        );

        Ok(result)
    }
}
