//! Round result types.

/// How a player's hand settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player beat the dealer, or the dealer busted.
    Win,
    /// Dealer had the higher total.
    Lose,
    /// Tie; the stake is returned.
    Push,
    /// Player went over 21 and forfeited the stake.
    Bust,
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// The player name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The amount wagered.
    pub bet: usize,
    /// The amount credited back (0 on a loss).
    pub payout: usize,
    /// The player's final total.
    pub total: u8,
    /// Capital after settlement.
    pub capital: usize,
}

impl PlayerResult {
    /// Net change against the capital held before the wager.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "table amounts fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer played out the hand (some player was still standing).
    pub dealer_played: bool,
}

impl RoundResult {
    /// Returns the result for the given player ID.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerResult> {
        self.players.iter().find(|result| result.player_id == player_id)
    }
}
