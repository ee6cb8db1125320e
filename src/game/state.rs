//! Round state types.

use crate::result::RoundResult;

/// The next step a round will take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Removing players without capital; also the between-rounds state.
    PruneBrokePlayers,
    /// Accepting bets.
    CollectBets,
    /// Dealing two cards to everyone.
    InitialDeal,
    /// Players hit or stand in seat order.
    PlayerTurns,
    /// Turning over the hole card.
    DealerReveal,
    /// Dealer draws to the house rule.
    DealerTurn,
    /// Comparing hands and paying out.
    Resolve,
    /// Discarding hands.
    Cleanup,
    /// Every player ran out of capital; no more rounds.
    Closed,
}

/// What a call to [`Game::play_round`](super::Game::play_round) produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A round was played to completion.
    Played(RoundResult),
    /// Nobody could bet, so the table closed without dealing.
    TableClosed,
}
