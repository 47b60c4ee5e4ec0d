//! Round result types.

use crate::hand::Hand;

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player wins (dealer busts, player has 21, or higher score).
    PlayerWins,
    /// The dealer wins (player busts or dealer has higher score).
    DealerWins,
    /// Equal scores; nobody wins.
    Tie,
}

impl RoundOutcome {
    /// Decides a round from the final scores.
    ///
    /// Rules are checked in order and the first match wins: player bust,
    /// dealer bust, equal scores, player 21 or higher score.
    #[must_use]
    pub const fn from_scores(
        player_score: u8,
        player_busted: bool,
        player_blackjack: bool,
        dealer_score: u8,
        dealer_busted: bool,
    ) -> Self {
        if player_busted {
            Self::DealerWins
        } else if dealer_busted {
            Self::PlayerWins
        } else if player_score == dealer_score {
            Self::Tie
        } else if player_blackjack || player_score > dealer_score {
            Self::PlayerWins
        } else {
            Self::DealerWins
        }
    }
}

/// Decides a round from the two final hands.
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> RoundOutcome {
    RoundOutcome::from_scores(
        player.score(),
        player.is_busted(),
        player.has_blackjack(),
        dealer.score(),
        dealer.is_busted(),
    )
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the player busted.
    pub player_busted: bool,
    /// Whether the dealer busted.
    pub dealer_busted: bool,
}

impl RoundResult {
    /// Builds the result of a round from the final hands.
    #[must_use]
    pub fn from_hands(player: &Hand, dealer: &Hand) -> Self {
        Self {
            outcome: resolve(player, dealer),
            player_score: player.score(),
            dealer_score: dealer.score(),
            player_busted: player.is_busted(),
            dealer_busted: dealer.is_busted(),
        }
    }
}

/// Totals kept for the lifetime of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    /// Rounds that reached a result.
    pub rounds_played: usize,
    /// Rounds won by the player.
    pub rounds_won: usize,
}

impl GameSummary {
    /// Counts a resolved round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        self.rounds_played += 1;
        if matches!(outcome, RoundOutcome::PlayerWins) {
            self.rounds_won += 1;
        }
    }
}
