//! Players and the dealer.

use tracing::{debug, info};

use crate::error::{BetError, PromptError};
use crate::hand::Hand;
use crate::prompt::{Prompter, TableEvent};

/// Checks a wager against the capital it would be taken from.
///
/// # Errors
///
/// Returns an error if the amount is zero or exceeds `capital`.
pub const fn check_bet(amount: usize, capital: usize) -> Result<(), BetError> {
    if amount == 0 {
        return Err(BetError::ZeroBet);
    }
    if amount > capital {
        return Err(BetError::InsufficientFunds);
    }
    Ok(())
}

/// Behavior shared by everyone holding a hand at the table.
///
/// The settlement hooks default to doing nothing, which is all the dealer
/// needs.
pub trait Participant {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Decides whether to take another card.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision provider cannot answer.
    fn is_hitting(&self, prompter: &mut dyn Prompter) -> Result<bool, PromptError>;

    /// Called when the hand goes over 21.
    fn bust(&mut self) {}

    /// Called when the participant beats the dealer.
    fn win(&mut self) {}

    /// Called when the participant loses to the dealer.
    fn lose(&mut self) {}

    /// Called when the participant ties the dealer.
    fn push(&mut self) {}
}

/// A seated player with capital and a wager.
#[derive(Debug, Clone)]
pub struct Player {
    id: u8,
    hand: Hand,
    capital: usize,
    bet: usize,
}

impl Player {
    /// Creates a new player with an empty hand and no wager.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>, capital: usize) -> Self {
        Self {
            id,
            hand: Hand::new(name),
            capital,
            bet: 0,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.hand.name()
    }

    /// Returns the capital not currently wagered.
    #[must_use]
    pub const fn capital(&self) -> usize {
        self.capital
    }

    /// Returns the current wager, 0 when none is placed.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player has no capital left.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.capital == 0
    }

    /// Takes `amount` from capital and records it as the wager.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the capital; nothing
    /// changes in that case.
    pub fn wager(&mut self, amount: usize) -> Result<(), BetError> {
        check_bet(amount, self.capital)?;
        self.capital -= amount;
        self.bet = amount;
        debug!(player = self.name(), bet = amount, capital = self.capital, "bet placed");
        Ok(())
    }

    /// Asks for a wager until a valid one is given, then places it.
    ///
    /// Rejected amounts are reported through [`TableEvent::BetRejected`].
    ///
    /// # Errors
    ///
    /// Returns an error if the decision provider cannot answer.
    pub fn place_bet(&mut self, prompter: &mut dyn Prompter) -> Result<usize, PromptError> {
        loop {
            let question = format!("{}, you have ${}. Enter your bet", self.name(), self.capital);
            let amount = prompter.ask_bet(&question, self.capital)?;
            match self.wager(amount) {
                Ok(()) => {
                    prompter.notify(&TableEvent::BetPlaced {
                        name: self.name(),
                        bet: amount,
                        capital: self.capital,
                    });
                    return Ok(amount);
                }
                Err(error) => {
                    debug!(player = self.name(), amount, %error, "bet rejected");
                    prompter.notify(&TableEvent::BetRejected {
                        name: self.name(),
                        error,
                    });
                }
            }
        }
    }

    /// Returns the wager to capital without settling it.
    pub fn refund(&mut self) {
        if self.bet > 0 {
            debug!(player = self.name(), bet = self.bet, "bet refunded");
        }
        self.capital = self.capital.saturating_add(self.bet);
        self.bet = 0;
    }

    /// Clears the hand and the wager for the next round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.bet = 0;
    }
}

impl Participant for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting(&self, prompter: &mut dyn Prompter) -> Result<bool, PromptError> {
        prompter.ask_yes_no(&format!("{}, do you want another card", self.name()))
    }

    fn bust(&mut self) {
        info!(player = self.name(), "player busts");
        self.lose();
    }

    fn win(&mut self) {
        let payout = self.bet.saturating_mul(2);
        self.capital = self.capital.saturating_add(payout);
        info!(player = self.name(), payout, capital = self.capital, "player wins");
    }

    fn lose(&mut self) {
        info!(player = self.name(), bet = self.bet, capital = self.capital, "player loses");
    }

    fn push(&mut self) {
        self.capital = self.capital.saturating_add(self.bet);
        info!(player = self.name(), bet = self.bet, capital = self.capital, "player pushes");
    }
}

/// The house. Hits on a fixed rule and never wagers.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: Hand,
    stands_on: u8,
}

impl Dealer {
    /// Creates a dealer who hits while the total is below `stands_on`.
    #[must_use]
    pub fn new(name: impl Into<String>, stands_on: u8) -> Self {
        Self {
            hand: Hand::new(name),
            stands_on,
        }
    }

    /// Returns the total the dealer stands on.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Turns over the first card, hiding or revealing the hole card.
    pub fn flip_first_card(&mut self) {
        if self.hand.flip_first() {
            debug!(revealed = self.is_hole_revealed(), "dealer hole card flipped");
        }
    }

    /// Returns whether the hole card is face up (or there is none).
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.hand.cards().first().is_none_or(|card| card.is_face_up())
    }

    /// Returns whether the dealer must draw under the house rule.
    ///
    /// A hand with a hidden card never draws.
    #[must_use]
    pub fn must_hit(&self) -> bool {
        self.hand.total().is_some_and(|total| total < self.stands_on)
    }

    /// Clears the hand for the next round.
    pub fn clear(&mut self) {
        self.hand.clear();
    }
}

impl Participant for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting(&self, _prompter: &mut dyn Prompter) -> Result<bool, PromptError> {
        Ok(self.must_hit())
    }

    fn bust(&mut self) {
        info!(total = ?self.hand.total(), "dealer busts");
    }
}
