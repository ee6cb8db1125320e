//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount must be positive")]
    ZeroBet,
    /// Bet exceeds the player's capital.
    #[error("bet exceeds your capital")]
    InsufficientFunds,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A round is in progress.
    #[error("cannot join while a round is in progress")]
    InvalidState,
    /// Every seat is taken.
    #[error("the table is full")]
    TableFull,
    /// The table has closed.
    #[error("the table is closed")]
    TableClosed,
    /// Every player ID has been handed out.
    #[error("no player ids left")]
    IdsExhausted,
}

/// Errors raised by a decision provider.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended before a valid answer was given.
    #[error("input stream closed")]
    Closed,
    /// Reading or writing the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a round.
#[derive(Debug, Error)]
pub enum RoundError {
    /// The step was invoked out of sequence.
    #[error("invalid round state for this step")]
    InvalidState,
    /// A hand total was unknown when outcomes were resolved.
    #[error("total of {name}'s hand is undefined at resolution")]
    UndefinedTotal {
        /// Owner of the hand.
        name: String,
    },
    /// Paying a player would overflow their capital.
    #[error("payout to {name} overflows their capital")]
    CapitalOverflow {
        /// Owner of the hand.
        name: String,
    },
    /// The decision provider failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}
