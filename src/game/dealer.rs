use core::cmp::Ordering;

use tracing::info;

use crate::error::RoundError;
use crate::participant::Participant;
use crate::prompt::{Prompter, TableEvent};
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{Game, RoundPhase};

impl<P: Prompter> Game<P> {
    /// Turns over the dealer's hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if players have not finished their turns.
    pub fn reveal_dealer(&mut self) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::DealerReveal)?;

        self.dealer.flip_first_card();
        self.prompter.notify(&TableEvent::Hand(self.dealer.hand()));

        self.phase = RoundPhase::DealerTurn;
        Ok(())
    }

    /// Dealer draws while under the house rule, if any player is still
    /// standing.
    ///
    /// Returns the number of cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole card has not been revealed.
    pub fn dealer_turn(&mut self) -> Result<usize, RoundError> {
        self.expect_phase(RoundPhase::DealerTurn)?;

        let drawn = if self.any_standing() {
            Self::additional_cards(&mut self.deck, &mut self.dealer, &mut self.prompter)?
        } else {
            0
        };

        self.phase = RoundPhase::Resolve;
        Ok(drawn)
    }

    /// Compares every standing player's hand to the dealer's and settles
    /// the wagers.
    ///
    /// Busted players already forfeited their stake and are reported as
    /// [`HandOutcome::Bust`].
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played, a hand total is
    /// unknown (which would mean a card is still face down), or a payout
    /// does not fit in the player's capital. No capital changes on error.
    pub fn resolve(&mut self) -> Result<RoundResult, RoundError> {
        self.expect_phase(RoundPhase::Resolve)?;

        let dealer_total = self
            .dealer
            .hand()
            .total()
            .ok_or_else(|| RoundError::UndefinedTotal {
                name: self.dealer.hand().name().to_owned(),
            })?;
        let dealer_bust = self.dealer.hand().is_busted();
        let dealer_played = self.any_standing();

        // Settle nothing until every total and payout is known to fit.
        let mut settlements = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let undefined = || RoundError::UndefinedTotal {
                name: player.name().to_owned(),
            };
            let total = player.hand().total().ok_or_else(undefined)?;
            let outcome = if player.hand().is_busted() {
                HandOutcome::Bust
            } else if dealer_bust {
                HandOutcome::Win
            } else {
                match total.cmp(&dealer_total) {
                    Ordering::Greater => HandOutcome::Win,
                    Ordering::Less => HandOutcome::Lose,
                    Ordering::Equal => HandOutcome::Push,
                }
            };

            let bet = player.bet();
            let payout = match outcome {
                HandOutcome::Win => bet.checked_mul(2),
                HandOutcome::Push => Some(bet),
                HandOutcome::Lose | HandOutcome::Bust => Some(0),
            };
            let overflow = || RoundError::CapitalOverflow {
                name: player.name().to_owned(),
            };
            let payout = payout.ok_or_else(overflow)?;
            player.capital().checked_add(payout).ok_or_else(overflow)?;
            settlements.push((total, outcome, payout));
        }

        let mut results = Vec::with_capacity(self.players.len());
        for (player, (total, outcome, payout)) in self.players.iter_mut().zip(settlements) {
            let bet = player.bet();
            match outcome {
                HandOutcome::Win => player.win(),
                HandOutcome::Push => player.push(),
                HandOutcome::Lose => player.lose(),
                HandOutcome::Bust => {}
            }

            let name = player.name();
            let capital = player.capital();
            match outcome {
                HandOutcome::Win => self.prompter.notify(&TableEvent::Won {
                    name,
                    payout,
                    capital,
                }),
                HandOutcome::Push => self.prompter.notify(&TableEvent::Pushed { name, bet, capital }),
                HandOutcome::Lose => self.prompter.notify(&TableEvent::Lost { name, bet, capital }),
                HandOutcome::Bust => {}
            }

            results.push(PlayerResult {
                player_id: player.id(),
                name: name.to_owned(),
                outcome,
                bet,
                payout,
                total,
                capital,
            });
        }

        info!(dealer_total, dealer_bust, players = results.len(), "round resolved");
        self.phase = RoundPhase::Cleanup;

        Ok(RoundResult {
            players: results,
            dealer_total,
            dealer_bust,
            dealer_played,
        })
    }
}
