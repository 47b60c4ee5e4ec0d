//! Scripted console sessions.

use soft17::{
    Card, Choice, Console, Deck, Game, GameOptions, GameState, GameSummary, InvalidChoice, Rank,
    RoundOutcome, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn quiet_game(deck: Deck) -> Game {
    Game::with_deck(GameOptions::default().with_show_rules(false), 1, deck)
}

fn run(game: &mut Game, input: &str) -> (GameSummary, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let summary = console.run(game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (summary, output)
}

#[test]
fn choices_parse_case_insensitively() {
    assert_eq!("h".parse::<Choice>(), Ok(Choice::Hit));
    assert_eq!("H\n".parse::<Choice>(), Ok(Choice::Hit));
    assert_eq!(" s ".parse::<Choice>(), Ok(Choice::Stand));
    assert_eq!("q".parse::<Choice>(), Ok(Choice::Quit));
    assert_eq!("Q\r\n".parse::<Choice>(), Ok(Choice::Quit));

    assert_eq!("x".parse::<Choice>(), Err(InvalidChoice));
    assert_eq!("".parse::<Choice>(), Err(InvalidChoice));
    assert_eq!("hit".parse::<Choice>(), Err(InvalidChoice));
    assert_eq!("hs".parse::<Choice>(), Err(InvalidChoice));
}

#[test]
fn quitting_first_prints_empty_summary() {
    let deck = Deck::from_draws(&[
        card(Rank::Five, Suit::Club),
        card(Rank::Two, Suit::Heart),
        card(Rank::Three, Suit::Diamond),
    ]);
    let mut game = quiet_game(deck);

    let (summary, output) = run(&mut game, "q\n");

    assert_eq!(summary, GameSummary::default());
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.dealer().hand().len(), 1);
    assert_eq!(
        output,
        "=== Round #1 ===\n\
         Dealer's hand\n\
         5 of Club\n\
         Score: 5\n\
         \n\
         Player's hand\n\
         2 of Heart\n\
         3 of Diamond\n\
         Score: 5\n\
         \n\
         Enter your choice ([H]it, [S]tand, [Q]uit): \n\
         Rounds played: 0\n\
         Player won   : 0\n"
    );
}

#[test]
fn full_round_then_quit() {
    let deck = Deck::from_draws(&[
        card(Rank::Ten, Suit::Spade),   // dealer
        card(Rank::Ten, Suit::Heart),   // player
        card(Rank::Eight, Suit::Club),  // player
        card(Rank::Seven, Suit::Heart), // dealer draw
    ]);
    let mut game = quiet_game(deck);
    game.set_next_deck(Deck::from_draws(&[
        card(Rank::Two, Suit::Club),
        card(Rank::Two, Suit::Heart),
        card(Rank::Three, Suit::Heart),
    ]));

    let (summary, output) = run(&mut game, "s\nq\n");

    assert_eq!(
        summary,
        GameSummary {
            rounds_played: 1,
            rounds_won: 1,
        }
    );
    assert!(output.contains("Dealer's hand\n10 of Spade\n7 of Heart\nScore: 17\n"));
    assert!(output.contains("Player won!\n\n=== Round #2 ===\n"));
    assert!(output.ends_with("Rounds played: 1\nPlayer won   : 1\n"));
}

#[test]
fn invalid_input_is_rejected_and_reprompted() {
    let deck = Deck::from_draws(&[
        card(Rank::Nine, Suit::Club),   // dealer
        card(Rank::Ten, Suit::Heart),   // player
        card(Rank::Two, Suit::Club),    // player
        card(Rank::Nine, Suit::Spade),  // player hit
        card(Rank::Eight, Suit::Heart), // dealer draw
    ]);
    let mut game = quiet_game(deck);
    game.set_next_deck(Deck::from_draws(&[
        card(Rank::Two, Suit::Club),
        card(Rank::Two, Suit::Heart),
        card(Rank::Three, Suit::Heart),
    ]));

    let (summary, output) = run(&mut game, "x\nhit\n\nh\nq\n");

    assert_eq!(output.matches("Invalid choice, try again.").count(), 3);
    assert!(output.contains("9 of Spade\nScore: 21, BlackJack!\n"));
    assert!(output.contains("Dealer's hand\n9 of Club\n8 of Heart\nScore: 17\n"));
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.rounds_won, 1);
}

#[test]
fn undecodable_input_is_rejected_and_reprompted() {
    let deck = Deck::from_draws(&[
        card(Rank::Five, Suit::Club),
        card(Rank::Two, Suit::Heart),
        card(Rank::Three, Suit::Diamond),
    ]);
    let mut game = quiet_game(deck);

    let mut console = Console::new(&b"\xe9\nq\n"[..], Vec::new());
    let summary = console.run(&mut game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert!(game.is_finished());
    assert_eq!(summary, GameSummary::default());
    assert_eq!(output.matches("Invalid choice, try again.").count(), 1);
    assert!(output.ends_with("Rounds played: 0\nPlayer won   : 0\n"));
}

#[test]
fn bust_is_reported_without_dealer_turn() {
    let deck = Deck::from_draws(&[
        card(Rank::Four, Suit::Club),   // dealer
        card(Rank::Ten, Suit::Heart),   // player
        card(Rank::Nine, Suit::Club),   // player
        card(Rank::King, Suit::Spade),  // player hit
        card(Rank::Eight, Suit::Heart), // never drawn
    ]);
    let mut game = quiet_game(deck);

    let mut console = Console::new(&b"h\n"[..], Vec::new());
    let outcome = console.play_round(&mut game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert_eq!(outcome, Some(RoundOutcome::DealerWins));
    assert!(output.contains("Score: 29, busted!\n"));
    assert!(output.ends_with("Dealer won this time.\n\n"));
    assert_eq!(game.dealer().hand().len(), 1);
    assert_eq!(game.dealer().cards_remaining(), 1);
}

#[test]
fn tie_round_reports_no_winner() {
    let deck = Deck::from_draws(&[
        card(Rank::Ten, Suit::Club),    // dealer
        card(Rank::Ten, Suit::Heart),   // player
        card(Rank::Nine, Suit::Club),   // player
        card(Rank::Nine, Suit::Spade),  // dealer draw
    ]);
    let mut game = quiet_game(deck);

    let mut console = Console::new(&b"S\n"[..], Vec::new());
    let outcome = console.play_round(&mut game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert_eq!(outcome, Some(RoundOutcome::Tie));
    assert!(output.ends_with("It is a tie.\n\n"));
    assert_eq!(game.summary().rounds_won, 0);
}

#[test]
fn end_of_input_quits() {
    let deck = Deck::from_draws(&[
        card(Rank::Five, Suit::Club),
        card(Rank::Two, Suit::Heart),
        card(Rank::Three, Suit::Diamond),
    ]);
    let mut game = quiet_game(deck);

    let (summary, output) = run(&mut game, "");

    assert!(game.is_finished());
    assert_eq!(summary, GameSummary::default());
    assert!(output.ends_with("Rounds played: 0\nPlayer won   : 0\n"));
}

#[test]
fn rules_are_printed_when_enabled() {
    let deck = Deck::from_draws(&[
        card(Rank::Five, Suit::Club),
        card(Rank::Two, Suit::Heart),
        card(Rank::Three, Suit::Diamond),
    ]);
    let mut game = Game::with_deck(GameOptions::default(), 1, deck);

    let (_, output) = run(&mut game, "q\n");

    assert!(output.starts_with("It's a simplified blackjack."));
    assert!(output.contains("-----\n\n=== Round #1 ===\n"));
}
