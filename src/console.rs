//! Interactive console front end.
//!
//! [`Console`] drives a [`Game`] from line-based input and writes the table
//! to any [`Write`] sink, so a whole session can be scripted in tests:
//!
//! ```
//! use soft17::{Console, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_show_rules(false), 7);
//! let mut output = Vec::new();
//! Console::new(&b"q\n"[..], &mut output).run(&mut game).unwrap();
//! assert!(game.is_finished());
//! ```

use core::str::FromStr;
use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::GameError;
use crate::game::{Game, GameState};
use crate::result::{GameSummary, RoundOutcome};

const RULES: &str = "\
It's a simplified blackjack.

There is 1 player (you) and a dealer (program). The player
starts with 2 cards while the dealer starts with 1. The player
can see that dealer's card. The dealer doesn't know player's
score if it's not over 21. Card values are the same as in
regular blackjack with aces valued at 11 or 1 (but only 1 ace
on hand can be valued as 1). The player can only hit or stand,
there are no chips, no splitting, no surrender. The player
draws cards first until they decide to stand or they bust. The
dealer draws as many cards as it can until it hits \"soft 17\"
(for example, {a 10 and an ace}, or {a 5, an ace, and a 3}, or
{2 aces and a 5}). If the player busts then the dealer wins
automatically. If the dealer busts then the player wins. If
there is a tie (or both have blackjacks), no one wins.
Otherwise, whoever has the highest score wins.
--------------------------------------------------
";

const PROMPT: &str = "Enter your choice ([H]it, [S]tand, [Q]uit): ";

/// A choice the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take another card.
    Hit,
    /// Stop drawing for this round.
    Stand,
    /// Leave the game.
    Quit,
}

/// Error returned when input is not one of `H`, `S` or `Q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid choice")]
pub struct InvalidChoice;

impl FromStr for Choice {
    type Err = InvalidChoice;

    /// Parses a single letter, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(InvalidChoice);
        };
        match c.to_ascii_uppercase() {
            'H' => Ok(Self::Hit),
            'S' => Ok(Self::Stand),
            'Q' => Ok(Self::Quit),
            _ => Err(InvalidChoice),
        }
    }
}

/// Plays a [`Game`] over a line-based console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading choices from `input` and printing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plays rounds until the player quits or input ends, then prints and
    /// returns the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written, or if the
    /// deck runs out mid-round.
    pub fn run(&mut self, game: &mut Game) -> Result<GameSummary, GameError> {
        if game.options.show_rules {
            writeln!(self.output, "{RULES}")?;
        }

        while !game.is_finished() {
            self.play_round(game)?;
        }

        let summary = game.summary();
        writeln!(self.output, "Rounds played: {}", summary.rounds_played)?;
        writeln!(self.output, "Player won   : {}", summary.rounds_won)?;
        self.output.flush()?;
        Ok(summary)
    }

    /// Plays a single round. Returns `None` if the player quit before it was
    /// settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, the deck runs out, or the game
    /// is not ready for a new round.
    pub fn play_round(&mut self, game: &mut Game) -> Result<Option<RoundOutcome>, GameError> {
        game.start_round()?;

        writeln!(self.output, "=== Round #{} ===", game.round_number())?;
        writeln!(self.output, "{}", game.dealer())?;
        writeln!(self.output, "{}", game.player())?;

        while game.state() == GameState::PlayerTurn {
            match self.prompt_choice()? {
                Choice::Hit => {
                    game.hit()?;
                    writeln!(self.output, "{}", game.player())?;
                }
                Choice::Stand => game.stand()?,
                Choice::Quit => {
                    game.quit();
                    return Ok(None);
                }
            }
        }

        if game.state() == GameState::DealerTurn {
            game.dealer_play()?;
            writeln!(self.output, "{}", game.dealer())?;
        }

        let result = game.showdown()?;
        let message = match result.outcome {
            RoundOutcome::PlayerWins => "Player won!",
            RoundOutcome::DealerWins => "Dealer won this time.",
            RoundOutcome::Tie => "It is a tie.",
        };
        writeln!(self.output, "{message}\n")?;

        Ok(Some(result.outcome))
    }

    /// Asks until a valid choice is entered. End of input counts as quitting.
    fn prompt_choice(&mut self) -> Result<Choice, GameError> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                warn!("input closed, quitting");
                writeln!(self.output)?;
                return Ok(Choice::Quit);
            }

            // Undecodable bytes become U+FFFD and fail to parse like any other typo.
            let line = String::from_utf8_lossy(&buf);
            match line.parse::<Choice>() {
                Ok(choice) => {
                    debug!(?choice, "player choice");
                    writeln!(self.output)?;
                    return Ok(choice);
                }
                Err(err) => {
                    warn!(input = line.trim(), "{err}");
                    writeln!(self.output, "Invalid choice, try again.")?;
                }
            }
        }
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
