//! The dealer: owner of the deck.

use alloc::vec::Vec;
use core::fmt;

use tracing::trace;

use crate::card::Card;
use crate::deck::{CardSource, Deck};
use crate::error::DeckError;
use crate::hand::Hand;

/// The dealer keeps drawing while its score is below this value.
pub const DEALER_STANDS_AT: u8 = 17;

/// The scripted dealer.
///
/// The dealer owns the only deck in play. The player draws through the
/// dealer's [`CardSource`] implementation.
#[derive(Debug, Clone)]
pub struct Dealer {
    deck: Deck,
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with the given deck and an empty hand.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck,
            hand: Hand::new(),
        }
    }

    /// Draws a card from the deck into the dealer's own hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn get_card(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        self.hand.add_card(card);
        trace!(%card, score = self.hand.score(), "dealer takes a card");
        Ok(card)
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer stops at 17 or more, soft 17 included.
    ///
    /// ```
    /// use soft17::{Card, Dealer, Deck, Rank, Suit};
    ///
    /// let mut dealer = Dealer::new(Deck::from_draws(&[
    ///     Card::new(Rank::Ace, Suit::Club),
    ///     Card::new(Rank::Six, Suit::Heart),
    /// ]));
    /// dealer.get_card().unwrap();
    /// assert!(dealer.can_draw());
    /// dealer.get_card().unwrap();
    /// assert!(!dealer.can_draw());
    /// ```
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.hand.score() < DEALER_STANDS_AT
    }

    /// Plays out the dealer's hand and returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck runs out while the dealer
    /// must still draw.
    pub fn play(&mut self) -> Result<Vec<Card>, DeckError> {
        let mut drawn = Vec::new();
        while self.can_draw() {
            drawn.push(self.get_card()?);
        }
        Ok(drawn)
    }

    /// Clears the hand and, if given, replaces the deck.
    pub fn reset(&mut self, deck: Option<Deck>) {
        self.hand.clear();
        if let Some(deck) = deck {
            self.deck = deck;
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the dealer's deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

impl CardSource for Dealer {
    fn draw(&mut self) -> Result<Card, DeckError> {
        self.deck.draw()
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dealer's hand")?;
        write!(f, "{}", self.hand)
    }
}
