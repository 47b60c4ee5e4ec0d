//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::GameSummary;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack game that manages the round flow.
///
/// The game owns the dealer (and through it the deck), the player, the round
/// counters and the random number generator used for every new deck. Each
/// operation checks the current [`GameState`] and fails with
/// [`ActionError::InvalidState`] when called out of turn.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    dealer: Dealer,
    player: Player,
    summary: GameSummary,
    /// Deck to use for the next round instead of a freshly shuffled one.
    next_deck: Option<Deck>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use soft17::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&options, &mut rng);
        Self::build(options, rng, deck)
    }

    /// Creates a new game whose first round is dealt from `deck`.
    ///
    /// Later rounds use decks shuffled from `seed`.
    #[must_use]
    pub fn with_deck(options: GameOptions, seed: u64, deck: Deck) -> Self {
        Self::build(options, ChaCha8Rng::seed_from_u64(seed), deck)
    }

    const fn build(options: GameOptions, rng: ChaCha8Rng, deck: Deck) -> Self {
        Self {
            options,
            state: GameState::NotStarted,
            dealer: Dealer::new(deck),
            player: Player::new(),
            summary: GameSummary {
                rounds_played: 0,
                rounds_won: 0,
            },
            next_deck: None,
            rng,
        }
    }

    /// Uses `deck` for the next round instead of a freshly shuffled one.
    ///
    /// Has no effect on a round already dealt.
    pub fn set_next_deck(&mut self, deck: Deck) {
        self.next_deck = Some(deck);
    }

    /// Starts a new round and deals the opening cards.
    ///
    /// After the first round, the dealer gets a fresh deck and both hands are
    /// cleared. The dealer then takes one card and the player two. If the
    /// player already has 21 the turn passes straight to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the game is finished, or
    /// the deck runs out while dealing.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        match self.state {
            GameState::NotStarted => {}
            GameState::RoundResolved => self.reset(),
            _ => return Err(ActionError::InvalidState),
        }

        debug!(round = self.round_number(), "dealing");
        self.dealer.get_card()?;
        self.player.get_card(&mut self.dealer)?;
        self.player.get_card(&mut self.dealer)?;

        self.state = if self.player.is_done() {
            GameState::DealerTurn
        } else {
            GameState::PlayerTurn
        };
        Ok(())
    }

    fn reset(&mut self) {
        let deck = self
            .next_deck
            .take()
            .unwrap_or_else(|| Deck::shuffled(&self.options, &mut self.rng));
        self.dealer.reset(Some(deck));
        self.player.reset();
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the round counters.
    #[must_use]
    pub const fn summary(&self) -> GameSummary {
        self.summary
    }

    /// Returns the 1-based number of the current (or next) round.
    #[must_use]
    pub const fn round_number(&self) -> usize {
        self.summary.rounds_played + 1
    }

    /// Returns whether the player has quit.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished)
    }
}
