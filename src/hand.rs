//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score that does not bust.
pub const MAX_SCORE: u8 = 21;

/// Value an Ace loses when it is counted as 1 instead of 11.
const ACE_ADJUSTMENT: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        value = value.saturating_add(card.rank.points());
    }

    // Two Aces at 11 already bust, so at most one Ace is ever counted high.
    if has_ace && value > MAX_SCORE {
        value -= ACE_ADJUSTMENT;
    }

    value
}

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// Aces count 11. If that puts the total over 21, one Ace is counted as 1
    /// instead; the adjustment is applied at most once.
    ///
    /// ```
    /// use soft17::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Heart));
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spade));
    /// hand.add_card(Card::new(Rank::Nine, Suit::Club));
    /// assert_eq!(hand.score(), 21);
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > MAX_SCORE
    }

    /// Returns whether the score is exactly 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.score() == MAX_SCORE
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        write!(f, "Score: {}", self.score())?;
        if self.has_blackjack() {
            f.write_str(", BlackJack!")?;
        } else if self.is_busted() {
            f.write_str(", busted!")?;
        }
        writeln!(f)
    }
}
