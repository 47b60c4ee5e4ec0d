//! The deck and the card-drawing capability.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::options::{GameOptions, ShuffleMode};

/// Something cards can be drawn from.
///
/// The dealer implements this over its own deck, which lets the player draw
/// without holding a deck of its own.
pub trait CardSource {
    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no cards are left.
    fn draw(&mut self) -> Result<Card, DeckError>;
}

/// An ordered pile of cards. The top card is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: ranks Ace to King, each in
    /// club, diamond, heart, spade order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a full deck shuffled according to `options`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> Self {
        let mut deck = Self::new();
        match options.shuffle {
            ShuffleMode::RandomSwaps => deck.shuffle_swaps(rng, options.shuffle_swaps),
            ShuffleMode::Uniform => deck.shuffle_uniform(rng),
        }
        deck
    }

    /// Wraps an arbitrary sequence of cards. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds a deck that yields `draws` in the given order.
    ///
    /// ```
    /// use soft17::{Card, CardSource, Deck, Rank, Suit};
    ///
    /// let first = Card::new(Rank::Ace, Suit::Spade);
    /// let second = Card::new(Rank::Two, Suit::Club);
    /// let mut deck = Deck::from_draws(&[first, second]);
    /// assert_eq!(deck.draw(), Ok(first));
    /// assert_eq!(deck.draw(), Ok(second));
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Swaps two randomly chosen positions `times` times.
    pub fn shuffle_swaps<R: Rng + ?Sized>(&mut self, rng: &mut R, times: usize) {
        let len = self.cards.len();
        if len < 2 {
            return;
        }
        for _ in 0..times {
            let i = rng.random_range(0..len);
            let j = rng.random_range(0..len);
            self.cards.swap(i, j);
        }
        trace!(times, "deck shuffled with random swaps");
    }

    /// Shuffles into a uniformly random permutation.
    pub fn shuffle_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        trace!("deck shuffled uniformly");
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }
}
