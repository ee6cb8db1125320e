use tracing::debug;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::participant::Participant;
use crate::prompt::{Prompter, TableEvent};

use super::{Game, RoundPhase};

impl<P: Prompter> Game<P> {
    /// Deals cards to a participant for as long as they keep hitting and
    /// have not busted.
    ///
    /// Returns the number of cards drawn.
    pub(super) fn additional_cards(
        deck: &mut Deck,
        participant: &mut impl Participant,
        prompter: &mut P,
    ) -> Result<usize, RoundError> {
        let mut drawn = 0;
        while !participant.hand().is_busted() && participant.is_hitting(prompter)? {
            Self::deal_to(deck, participant, prompter);
            drawn += 1;

            if participant.hand().is_busted() {
                participant.bust();
                prompter.notify(&TableEvent::Busted {
                    name: participant.hand().name(),
                });
            }
        }
        debug!(
            name = participant.hand().name(),
            drawn,
            total = ?participant.hand().total(),
            "turn over"
        );
        Ok(drawn)
    }

    /// Lets each player hit or stand in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has not happened or the decision
    /// provider cannot answer.
    pub fn player_turns(&mut self) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::PlayerTurns)?;

        for player in &mut self.players {
            Self::additional_cards(&mut self.deck, player, &mut self.prompter)?;
        }

        self.phase = RoundPhase::DealerReveal;
        Ok(())
    }

    /// Returns whether any player finished their turn without busting.
    pub fn any_standing(&self) -> bool {
        self.players
            .iter()
            .any(|player| !player.hand().is_busted())
    }
}
