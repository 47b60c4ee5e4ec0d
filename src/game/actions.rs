use tracing::{debug, info};

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round without a dealer turn. Reaching exactly 21
    /// passes the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player.get_card(&mut self.dealer)?;
        let hand = self.player.hand();

        if hand.is_busted() {
            debug!(score = hand.score(), "player busts");
            self.state = GameState::RoundOver;
        } else if hand.has_blackjack() {
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player.stand();
        debug!(score = self.player.hand().score(), "player stands");
        self.state = GameState::DealerTurn;

        Ok(())
    }

    /// Ends the game.
    ///
    /// A round in progress is abandoned: it is not settled and does not
    /// count towards the summary.
    pub fn quit(&mut self) {
        if self.state.is_round_in_progress() {
            info!(round = self.round_number(), "round abandoned");
        }
        self.state = GameState::Finished;
    }
}
