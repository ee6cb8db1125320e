use tracing::{debug, info};

use crate::error::RoundError;
use crate::hand::Hand;
use crate::participant::Participant;
use crate::prompt::{Prompter, TableEvent};

use super::{Game, RoundPhase};

impl<P: Prompter> Game<P> {
    /// Asks every seated player for a wager, in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not collecting bets or the decision
    /// provider cannot answer.
    pub fn collect_bets(&mut self) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::CollectBets)?;

        for player in &mut self.players {
            player.place_bet(&mut self.prompter)?;
        }

        let pot: usize = self.players.iter().map(|player| player.bet()).sum();
        info!(players = self.players.len(), pot, "bets collected");
        self.phase = RoundPhase::InitialDeal;
        Ok(())
    }

    /// Deals two cards to each player and then to the dealer, round-robin,
    /// and hides the dealer's first card.
    ///
    /// If a low-deck threshold is configured and fewer cards remain, the deck
    /// is rebuilt first.
    ///
    /// # Errors
    ///
    /// Returns an error if bets have not been collected.
    pub fn initial_deal(&mut self) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::InitialDeal)?;

        if self.options.reshuffle_below > 0 && self.deck.len() < self.options.reshuffle_below {
            debug!(
                remaining = self.deck.len(),
                threshold = self.options.reshuffle_below,
                "deck below threshold"
            );
            self.deck.replenish();
            self.prompter.notify(&TableEvent::DeckReplenished);
        }

        let mut recipients: Vec<&mut Hand> = self
            .players
            .iter_mut()
            .map(|player| player.hand_mut())
            .chain(core::iter::once(self.dealer.hand_mut()))
            .collect();
        let replenished = self.deck.deal(&mut recipients, 2);
        drop(recipients);

        if replenished > 0 {
            self.prompter.notify(&TableEvent::DeckReplenished);
        }

        self.dealer.flip_first_card();

        for player in &self.players {
            self.prompter.notify(&TableEvent::Hand(player.hand()));
        }
        self.prompter.notify(&TableEvent::Hand(self.dealer.hand()));

        self.phase = RoundPhase::PlayerTurns;
        Ok(())
    }
}
