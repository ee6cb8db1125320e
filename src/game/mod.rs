//! Round engine and table state.

use tracing::{error, info, info_span};

use crate::deck::Deck;
use crate::error::{JoinError, RoundError};
use crate::options::{MAX_PLAYERS, TableOptions};
use crate::participant::{Dealer, Participant, Player};
use crate::prompt::{Prompter, TableEvent};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{RoundOutcome, RoundPhase};

/// Display name of the house.
pub const DEALER_NAME: &str = "Dealer";

/// A blackjack table that runs rounds for its seated players.
///
/// The game owns the deck, every hand, and each player's capital. Decisions
/// come from the [`Prompter`] it is built with.
///
/// # Example
///
/// ```no_run
/// use tablejack::{ConsolePrompter, Game, RoundOutcome, TableOptions};
///
/// let mut game = Game::new(TableOptions::default(), 42, ConsolePrompter::stdio());
/// game.join("Alice").unwrap();
///
/// while let Ok(RoundOutcome::Played(_)) = game.play_round() {}
/// ```
pub struct Game<P> {
    /// The deck cards are dealt from.
    deck: Deck,
    /// Table options.
    options: TableOptions,
    /// Players still seated, in seat order.
    players: Vec<Player>,
    /// Players who left for lack of capital.
    departed: Vec<Player>,
    /// The house.
    dealer: Dealer,
    /// Next step of the round.
    phase: RoundPhase,
    /// Next player ID to assign. Reaches 256 once every ID is taken.
    next_id: u16,
    /// Rounds played to completion.
    rounds: u64,
    /// Decision provider.
    prompter: P,
}

impl<P: Prompter> Game<P> {
    /// Creates a new table with a populated, shuffled deck.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64, prompter: P) -> Self {
        Self {
            deck: Deck::shuffled(seed),
            options,
            players: Vec::new(),
            departed: Vec::new(),
            dealer: Dealer::new(DEALER_NAME, options.dealer_stands_on),
            phase: RoundPhase::PruneBrokePlayers,
            next_id: 0,
            rounds: 0,
            prompter,
        }
    }

    /// Seats a player with the starting capital.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the table is closed,
    /// every seat is taken, or all 256 player IDs have been handed out.
    pub fn join(&mut self, name: impl Into<String>) -> Result<u8, JoinError> {
        match self.phase {
            RoundPhase::PruneBrokePlayers => {}
            RoundPhase::Closed => return Err(JoinError::TableClosed),
            _ => return Err(JoinError::InvalidState),
        }

        let seats = self.options.max_players.clamp(1, MAX_PLAYERS);
        if self.players.len() >= usize::from(seats) {
            return Err(JoinError::TableFull);
        }

        let id = u8::try_from(self.next_id).map_err(|_| JoinError::IdsExhausted)?;
        self.next_id += 1;
        let player = Player::new(id, name, self.options.starting_capital);
        info!(player = player.name(), id, capital = player.capital(), "player joined");
        self.players.push(player);
        Ok(id)
    }

    /// Plays one full round, from pruning to cleanup.
    ///
    /// # Errors
    ///
    /// Returns an error if a step fails. The round is then abandoned with
    /// [`Game::abort_round`], so the table is ready for another round.
    /// Calling this while a stepwise round is in progress returns
    /// [`RoundError::InvalidState`] and leaves that round untouched.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RoundError> {
        let span = info_span!("round", number = self.rounds + 1);
        let _entered = span.enter();

        let outcome = self.run_steps();
        if let Err(err) = &outcome {
            error!(phase = ?self.phase, %err, "round aborted");
            if !matches!(err, RoundError::InvalidState) {
                self.abort_round();
            }
        }
        outcome
    }

    /// Abandons the round in progress.
    ///
    /// Unsettled wagers go back to their players, every hand is discarded,
    /// and the table waits for the next round. An abandoned round is not
    /// counted as played. Does nothing between rounds or once the table has
    /// closed.
    pub fn abort_round(&mut self) {
        match self.phase {
            RoundPhase::PruneBrokePlayers | RoundPhase::Closed => return,
            // Outcomes are already settled.
            RoundPhase::Cleanup => {}
            _ => {
                for player in &mut self.players {
                    player.refund();
                }
            }
        }

        for player in &mut self.players {
            player.clear();
        }
        self.dealer.clear();
        self.phase = RoundPhase::PruneBrokePlayers;
        info!(rounds = self.rounds, "round abandoned");
    }

    fn run_steps(&mut self) -> Result<RoundOutcome, RoundError> {
        if self.prune_broke_players()? == 0 {
            return Ok(RoundOutcome::TableClosed);
        }
        self.collect_bets()?;
        self.initial_deal()?;
        self.player_turns()?;
        self.reveal_dealer()?;
        self.dealer_turn()?;
        let result = self.resolve()?;
        self.cleanup()?;
        Ok(RoundOutcome::Played(result))
    }

    /// Removes players without capital from the table.
    ///
    /// Returns how many players remain seated. When none remain the table
    /// closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not between rounds.
    pub fn prune_broke_players(&mut self) -> Result<usize, RoundError> {
        self.expect_phase(RoundPhase::PruneBrokePlayers)?;

        let (broke, seated): (Vec<Player>, Vec<Player>) =
            self.players.drain(..).partition(Player::is_broke);
        self.players = seated;

        for player in broke {
            info!(player = player.name(), "player leaves the table");
            self.prompter
                .notify(&TableEvent::PlayerLeft { name: player.name() });
            self.departed.push(player);
        }

        if self.players.is_empty() {
            info!(rounds = self.rounds, "table closed");
            self.prompter.notify(&TableEvent::TableClosed);
            self.phase = RoundPhase::Closed;
            return Ok(0);
        }

        self.phase = RoundPhase::CollectBets;
        Ok(self.players.len())
    }

    /// Discards every hand and readies the table for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if outcomes have not been resolved yet.
    pub fn cleanup(&mut self) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::Cleanup)?;

        for player in &mut self.players {
            player.clear();
        }
        self.dealer.clear();

        self.rounds += 1;
        self.phase = RoundPhase::PruneBrokePlayers;
        info!(cards_remaining = self.deck.len(), "round complete");
        Ok(())
    }

    fn expect_phase(&self, phase: RoundPhase) -> Result<(), RoundError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Deals one card to a participant and announces the new hand.
    fn deal_to(deck: &mut Deck, participant: &mut impl Participant, prompter: &mut P) {
        let replenished = deck.deal(&mut [participant.hand_mut()], 1);
        if replenished > 0 {
            prompter.notify(&TableEvent::DeckReplenished);
        }
        prompter.notify(&TableEvent::Hand(participant.hand()));
    }

    /// Returns the next step of the round.
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns whether the table has closed.
    pub fn is_closed(&self) -> bool {
        self.phase == RoundPhase::Closed
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the seated players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the seated player with the given ID.
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// Returns the players who left the table for lack of capital.
    pub fn departed(&self) -> &[Player] {
        &self.departed
    }

    /// Returns the number of seated players who can still bet.
    pub fn players_with_funds(&self) -> usize {
        self.players.iter().filter(|player| !player.is_broke()).count()
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck mutably, for stacking cards.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of rounds played to completion.
    pub const fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Returns the decision provider.
    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Returns the decision provider mutably.
    pub const fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Consumes the game and returns the decision provider.
    pub fn into_prompter(self) -> P {
        self.prompter
    }
}
