//! Console blackjack for one to seven players.

use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tablejack::{
    ConsolePrompter, Game, PromptError, Prompter, RoundError, RoundOutcome, TableOptions,
};
use tracing::{Level, error, info};

/// Play blackjack against the house.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about)]
struct Args {
    /// Seed for the deck shuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Capital each player starts with.
    #[arg(long, default_value_t = 100)]
    capital: usize,
    /// Dealer hits while the total is below this value.
    #[arg(long, default_value_t = 17)]
    dealer_stands_on: u8,
    /// Rebuild the deck before a deal when fewer cards remain (0 disables).
    #[arg(long, default_value_t = 0)]
    reshuffle_below: usize,
    /// Log level written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match Level::from_str(&args.log_level) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("invalid log level {:?}: {err}", args.log_level);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // Running out of input is how a piped session ends.
        Err(err) if input_closed(err.as_ref()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = TableOptions::default()
        .with_starting_capital(args.capital)
        .with_dealer_stands_on(args.dealer_stands_on)
        .with_reshuffle_below(args.reshuffle_below);
    info!(seed, ?options, "starting table");

    let mut prompter = ConsolePrompter::stdio();
    prompter.say("\t\tWelcome to Blackjack\n")?;

    let count = prompter.ask_number("How many players?", 1, usize::from(options.max_players))?;
    let mut names = Vec::with_capacity(count);
    for seat in 1..=count {
        names.push(prompter.ask_text(&format!("Enter player name #{seat}: "))?);
    }
    prompter.say("")?;

    let mut game = Game::new(options, seed, prompter);
    for name in names {
        game.join(name)?;
    }

    loop {
        match game.play_round()? {
            RoundOutcome::TableClosed => break,
            RoundOutcome::Played(result) => {
                for player in &result.players {
                    info!(player = %player.name, net = player.net(), capital = player.capital, "settled");
                }
            }
        }

        // With nobody left to bet, the next round closes the table.
        if game.players_with_funds() > 0
            && !game
                .prompter_mut()
                .ask_yes_no("\nDo you want to play again")?
        {
            break;
        }
    }

    game.prompter_mut().say("\nThanks for playing!")?;
    Ok(())
}

fn input_closed(err: &(dyn Error + 'static)) -> bool {
    matches!(err.downcast_ref::<PromptError>(), Some(PromptError::Closed))
        || matches!(
            err.downcast_ref::<RoundError>(),
            Some(RoundError::Prompt(PromptError::Closed))
        )
}
