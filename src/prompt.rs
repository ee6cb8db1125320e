//! The decision provider the engine consults, and the events it is told about.

use core::fmt;

use crate::error::{BetError, PromptError};
use crate::hand::Hand;

/// Something happening at the table worth telling the players about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent<'a> {
    /// A hand changed and should be shown.
    Hand(&'a Hand),
    /// A wager was accepted.
    BetPlaced {
        /// Player name.
        name: &'a str,
        /// Amount wagered.
        bet: usize,
        /// Capital left after the wager.
        capital: usize,
    },
    /// A wager was rejected and will be asked for again.
    BetRejected {
        /// Player name.
        name: &'a str,
        /// Why the wager was rejected.
        error: BetError,
    },
    /// A hand went over 21.
    Busted {
        /// Participant name.
        name: &'a str,
    },
    /// A player beat the dealer.
    Won {
        /// Player name.
        name: &'a str,
        /// Amount credited (stake plus winnings).
        payout: usize,
        /// Capital after the credit.
        capital: usize,
    },
    /// A player lost to the dealer.
    Lost {
        /// Player name.
        name: &'a str,
        /// Amount forfeited.
        bet: usize,
        /// Capital after the loss.
        capital: usize,
    },
    /// A player tied the dealer.
    Pushed {
        /// Player name.
        name: &'a str,
        /// Stake returned.
        bet: usize,
        /// Capital after the refund.
        capital: usize,
    },
    /// The deck ran low or out and was rebuilt.
    DeckReplenished,
    /// A player ran out of capital and left the table.
    PlayerLeft {
        /// Player name.
        name: &'a str,
    },
    /// No player with capital remains.
    TableClosed,
}

impl fmt::Display for TableEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Hand(hand) => write!(f, "{hand}"),
            Self::BetPlaced { name, bet, capital } => {
                write!(f, "{name} bets ${bet}. Remaining: ${capital}.")
            }
            Self::BetRejected { name, error } => write!(f, "{name}: {error}."),
            Self::Busted { name } => write!(f, "{name} busts!"),
            Self::Won {
                name,
                payout,
                capital,
            } => write!(f, "{name} wins ${payout}! Capital: ${capital}."),
            Self::Lost { name, bet, capital } => {
                write!(f, "{name} loses ${bet}. Capital: ${capital}.")
            }
            Self::Pushed { name, bet, capital } => {
                write!(f, "{name} pushes. Bet ${bet} returned. Capital: ${capital}.")
            }
            Self::DeckReplenished => f.write_str("New deck is populated and shuffled!"),
            Self::PlayerLeft { name } => {
                write!(f, "{name} is out of money and leaves the table.")
            }
            Self::TableClosed => f.write_str("All players are out of money. Game over."),
        }
    }
}

/// Supplies decisions to the engine and receives table events.
///
/// The engine calls these synchronously and blocks on the answer. Bad input
/// is the provider's to re-prompt; an error means no answer can be had.
pub trait Prompter {
    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError>;

    /// Asks for an integer in `low..=high`.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask_number(&mut self, question: &str, low: usize, high: usize)
    -> Result<usize, PromptError>;

    /// Asks for a wager between 1 and `capital`.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask_bet(&mut self, question: &str, capital: usize) -> Result<usize, PromptError>;

    /// Receives a table event. Ignored by default.
    fn notify(&mut self, _event: &TableEvent<'_>) {}
}
