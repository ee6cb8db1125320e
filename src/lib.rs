//! A turn-based blackjack table engine.
//!
//! The crate provides a [`Game`] type that runs full rounds for one dealer
//! and up to seven players: betting, the initial deal, player and dealer
//! turns, resolution, and payout. Decisions are requested from a
//! [`Prompter`], so the same engine drives a console game or a scripted
//! replay.
//!
//! # Example
//!
//! ```no_run
//! use tablejack::{ConsolePrompter, Game, RoundOutcome, TableOptions};
//!
//! let options = TableOptions::default().with_starting_capital(200);
//! let mut game = Game::new(options, 42, ConsolePrompter::stdio());
//! game.join("Alice").unwrap();
//! game.join("Bob").unwrap();
//!
//! if let Ok(RoundOutcome::Played(result)) = game.play_round() {
//!     for player in &result.players {
//!         println!("{}: {:?}, capital {}", player.name, player.outcome, player.capital);
//!     }
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod prompt;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::ConsolePrompter;
pub use deck::Deck;
pub use error::{BetError, JoinError, PromptError, RoundError};
pub use game::{DEALER_NAME, Game, RoundOutcome, RoundPhase};
pub use hand::{BLACKJACK, Hand, evaluate};
pub use options::{MAX_PLAYERS, TableOptions};
pub use participant::{Dealer, Participant, Player, check_bet};
pub use prompt::{Prompter, TableEvent};
pub use result::{HandOutcome, PlayerResult, RoundResult};
