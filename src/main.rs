//! Terminal blackjack against a scripted dealer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::{Level, info};

use soft17::{Console, DEFAULT_SHUFFLE_SWAPS, Game, GameOptions, ShuffleMode};

/// Play a simplified game of blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffle each deck uniformly instead of with random swaps.
    #[arg(long)]
    uniform_shuffle: bool,

    /// Number of random swaps per shuffle.
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_SWAPS)]
    shuffle_swaps: usize,

    /// Do not print the rules before the first round.
    #[arg(long)]
    no_rules: bool,

    /// Diagnostics level, written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let shuffle = if args.uniform_shuffle {
        ShuffleMode::Uniform
    } else {
        ShuffleMode::RandomSwaps
    };
    let options = GameOptions::default()
        .with_shuffle(shuffle)
        .with_shuffle_swaps(args.shuffle_swaps)
        .with_show_rules(!args.no_rules);
    info!(seed, ?shuffle, "starting game");

    let mut game = Game::new(options, seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match console.run(&mut game) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
