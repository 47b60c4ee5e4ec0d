//! A simplified single-player blackjack game.
//!
//! The crate provides a [`Game`] type that runs the round flow between one
//! player and a scripted dealer: dealing, hit/stand/quit, dealer play and
//! settling. With the `std` feature, [`Console`] plays it over any line-based
//! reader and writer.
//!
//! # Example
//!
//! ```
//! use soft17::{Card, Deck, Game, GameOptions, GameState, Rank, RoundOutcome, Suit};
//!
//! let deck = Deck::from_draws(&[
//!     Card::new(Rank::Ten, Suit::Club),   // dealer
//!     Card::new(Rank::Ten, Suit::Heart),  // player
//!     Card::new(Rank::Nine, Suit::Spade), // player
//!     Card::new(Rank::Seven, Suit::Club), // dealer draws
//! ]);
//! let mut game = Game::with_deck(GameOptions::default(), 1, deck);
//!
//! game.start_round().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_eq!(result.outcome, RoundOutcome::PlayerWins);
//! assert_eq!(game.state(), GameState::RoundResolved);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::{Choice, Console, InvalidChoice};
pub use dealer::{DEALER_STANDS_AT, Dealer};
pub use deck::{CardSource, Deck};
#[cfg(feature = "std")]
pub use error::GameError;
pub use error::{ActionError, DeckError};
pub use game::{Game, GameState};
pub use hand::{Hand, MAX_SCORE};
pub use options::{DEFAULT_SHUFFLE_SWAPS, GameOptions, ShuffleMode};
pub use player::Player;
pub use result::{GameSummary, RoundOutcome, RoundResult, resolve};
