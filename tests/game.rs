//! Game integration tests.

mod common;

use std::collections::HashSet;
use std::iter;

use common::{ScriptedPrompter, cards};
use tablejack::{
    DECK_SIZE, Game, HandOutcome, JoinError, MAX_PLAYERS, Participant, PromptError, RoundError,
    RoundOutcome, RoundPhase, RoundResult, TableOptions,
};

use tablejack::Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Two};

fn game_with(prompter: ScriptedPrompter) -> Game<ScriptedPrompter> {
    Game::new(TableOptions::default(), 42, prompter)
}

fn played(outcome: RoundOutcome) -> RoundResult {
    match outcome {
        RoundOutcome::Played(result) => result,
        RoundOutcome::TableClosed => panic!("expected a round to be played"),
    }
}

#[test]
fn player_stands_and_loses_to_dealer_draw() {
    let prompter = ScriptedPrompter::new().with_bets(&[20]).with_hits(&[false]);
    let mut game = game_with(prompter);
    let player = game.join("Alice").unwrap();

    // player, dealer, player, dealer, dealer draw
    game.deck_mut()
        .set_cards(cards(&[Ten, Seven, Nine, Nine, Four]));

    let result = played(game.play_round().unwrap());
    let alice = result.player(player).unwrap();

    assert_eq!(alice.outcome, HandOutcome::Lose);
    assert_eq!(alice.total, 19);
    assert_eq!(alice.bet, 20);
    assert_eq!(alice.payout, 0);
    assert_eq!(alice.capital, 80);
    assert_eq!(alice.net(), -20);
    assert_eq!(result.dealer_total, 20);
    assert!(!result.dealer_bust);
    assert!(result.dealer_played);
    assert_eq!(game.player(player).unwrap().capital(), 80);
    assert_eq!(game.phase(), RoundPhase::PruneBrokePlayers);
}

#[test]
fn busted_player_forfeits_and_dealer_does_not_draw() {
    let prompter = ScriptedPrompter::new().with_bets(&[50]).with_hits(&[true]);
    let mut game = game_with(prompter);
    let player = game.join("Bob").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Six, Nine, Ten, Five, Two]));

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();
    game.initial_deal().unwrap();
    game.player_turns().unwrap();
    assert!(game.players()[0].hand().is_busted());
    assert_eq!(game.players()[0].hand().total(), Some(24));

    game.reveal_dealer().unwrap();
    assert_eq!(game.dealer_turn().unwrap(), 0);
    assert_eq!(game.dealer().hand().len(), 2);

    let result = game.resolve().unwrap();
    let bob = result.player(player).unwrap();
    assert_eq!(bob.outcome, HandOutcome::Bust);
    assert_eq!(bob.capital, 50);
    assert!(!result.dealer_played);
    assert!(game.prompter().saw("Bob busts!"));

    game.cleanup().unwrap();
    assert_eq!(game.player(player).unwrap().capital(), 50);
    assert_eq!(game.player(player).unwrap().bet(), 0);
    assert!(game.players()[0].hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    // The unused card stays in the deck; discards are not returned.
    assert_eq!(game.deck().len(), 1);
}

#[test]
fn dealer_bust_pays_standing_players_even_money() {
    let prompter = ScriptedPrompter::new().with_bets(&[10]).with_hits(&[false]);
    let mut game = game_with(prompter);
    let player = game.join("Carol").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Queen, Six, King]));

    let result = played(game.play_round().unwrap());
    let carol = result.player(player).unwrap();

    assert!(result.dealer_bust);
    assert_eq!(result.dealer_total, 26);
    assert_eq!(carol.outcome, HandOutcome::Win);
    assert_eq!(carol.payout, 20);
    assert_eq!(carol.capital, 110);
    assert!(game.prompter().saw("Dealer busts!"));
    assert!(game.prompter().saw("Carol wins $20! Capital: $110."));
}

#[test]
fn equal_totals_push_and_return_the_stake() {
    let prompter = ScriptedPrompter::new().with_bets(&[30]).with_hits(&[false]);
    let mut game = game_with(prompter);
    let player = game.join("Dan").unwrap();

    game.deck_mut().set_cards(cards(&[Ten, Nine, Eight, Nine]));

    let result = played(game.play_round().unwrap());
    let dan = result.player(player).unwrap();

    assert_eq!(dan.outcome, HandOutcome::Push);
    assert_eq!(dan.payout, 30);
    assert_eq!(dan.capital, 100);
    assert_eq!(dan.net(), 0);
    assert_eq!(result.dealer_total, 18);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let prompter = ScriptedPrompter::new().with_bets(&[10]).with_hits(&[false]);
    let mut game = game_with(prompter);
    game.join("Erin").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Ace, Nine, Six, Five]));

    let result = played(game.play_round().unwrap());
    assert_eq!(result.dealer_total, 17);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(game.deck().len(), 1);
}

#[test]
fn hole_card_is_hidden_until_revealed() {
    let prompter = ScriptedPrompter::new().with_bets(&[10]).with_hits(&[false]);
    let mut game = game_with(prompter);
    game.join("Finn").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Jack, Seven, Seven]));

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();
    game.initial_deal().unwrap();

    let dealer = game.dealer();
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.hand().total(), None);
    assert!(!dealer.hand().is_busted());
    assert!(game.prompter().saw("Dealer:\t\u{25ae}\u{25ae} 7"));

    game.player_turns().unwrap();
    game.reveal_dealer().unwrap();
    assert!(game.dealer().is_hole_revealed());
    assert_eq!(game.dealer().hand().total(), Some(17));
}

#[test]
fn initial_deal_conserves_cards() {
    let prompter = ScriptedPrompter::new().with_bets(&[5, 5, 5]);
    let mut game = game_with(prompter);
    for name in ["A", "B", "C"] {
        game.join(name).unwrap();
    }

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();
    game.initial_deal().unwrap();

    let in_hands: usize = game
        .players()
        .iter()
        .map(|player| player.hand().len())
        .sum::<usize>()
        + game.dealer().hand().len();
    assert_eq!(in_hands, 8);
    assert_eq!(game.deck().len() + in_hands, DECK_SIZE);
    assert!(game.players().iter().all(|player| player.hand().len() == 2));
}

#[test]
fn deal_replenishes_an_exhausted_deck_mid_round() {
    let prompter = ScriptedPrompter::new()
        .with_bets(&[10, 10])
        .with_hits(&[false, false]);
    let mut game = game_with(prompter);
    game.join("Gus").unwrap();
    game.join("Hana").unwrap();

    game.deck_mut().set_cards(cards(&[Ten, Ten, Ten]));

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();
    game.initial_deal().unwrap();

    assert_eq!(game.deck().replenish_count(), 1);
    assert_eq!(game.deck().len(), DECK_SIZE - 3);
    assert!(game.prompter().saw("New deck is populated and shuffled!"));
    assert_eq!(game.phase(), RoundPhase::PlayerTurns);
}

#[test]
fn low_deck_threshold_rebuilds_before_dealing() {
    let prompter = ScriptedPrompter::new().with_bets(&[10]);
    let options = TableOptions::default().with_reshuffle_below(10);
    let mut game = Game::new(options, 3, prompter);
    game.join("Ivy").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Ten, Ten, Ten]));

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();
    game.initial_deal().unwrap();

    assert_eq!(game.deck().replenish_count(), 1);
    assert_eq!(game.deck().len(), DECK_SIZE - 4);
}

#[test]
fn invalid_bets_are_rejected_and_asked_again() {
    let prompter = ScriptedPrompter::new().with_bets(&[0, 500, 25]);
    let mut game = game_with(prompter);
    let player = game.join("Jo").unwrap();

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();

    let jo = game.player(player).unwrap();
    assert_eq!(jo.bet(), 25);
    assert_eq!(jo.capital(), 75);

    let prompter = game.prompter();
    assert_eq!(prompter.questions.len(), 3);
    assert!(prompter.saw("Jo: bet amount must be positive."));
    assert!(prompter.saw("Jo: bet exceeds your capital."));
    assert!(prompter.saw("Jo bets $25. Remaining: $75."));
}

#[test]
fn broke_player_leaves_and_table_closes_without_dealing() {
    let prompter = ScriptedPrompter::new().with_bets(&[100]).with_hits(&[false]);
    let mut game = game_with(prompter);
    let player = game.join("Kim").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Seven, Nine, Two, Two]));

    let result = played(game.play_round().unwrap());
    assert_eq!(result.player(player).unwrap().outcome, HandOutcome::Lose);
    assert_eq!(game.players_with_funds(), 0);

    let remaining = game.deck().len();
    assert_eq!(game.play_round().unwrap(), RoundOutcome::TableClosed);
    assert!(game.is_closed());
    assert!(game.players().is_empty());
    assert_eq!(game.departed().len(), 1);
    assert_eq!(game.departed()[0].name(), "Kim");
    assert_eq!(game.deck().len(), remaining);
    assert_eq!(game.rounds_played(), 1);

    let prompter = game.prompter();
    assert!(prompter.saw("Kim is out of money and leaves the table."));
    assert!(prompter.saw("All players are out of money. Game over."));
    assert_eq!(game.join("Lee").unwrap_err(), JoinError::TableClosed);
}

#[test]
fn broke_player_is_skipped_while_others_play_on() {
    let prompter = ScriptedPrompter::new()
        .with_bets(&[100, 10, 10])
        .with_hits(&[false, false, false]);
    let mut game = game_with(prompter);
    let broke = game.join("Max").unwrap();
    let other = game.join("Nia").unwrap();

    // Max 17 loses to 20, Nia 20 pushes.
    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Ten, Seven, Ten, Ten]));
    played(game.play_round().unwrap());
    assert_eq!(game.player(broke).unwrap().capital(), 0);
    assert_eq!(game.player(other).unwrap().capital(), 100);

    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Nine, Seven]));
    let result = played(game.play_round().unwrap());

    assert_eq!(result.players.len(), 1);
    assert_eq!(result.players[0].player_id, other);
    assert!(game.player(broke).is_none());
    assert_eq!(game.departed()[0].id(), broke);
    // Only one bet was asked for in the second round.
    assert!(game.prompter().bets.is_empty());
}

#[test]
fn players_act_in_seat_order() {
    let prompter = ScriptedPrompter::new()
        .with_bets(&[10, 10])
        .with_hits(&[true, false, false]);
    let mut game = game_with(prompter);
    game.join("Oda").unwrap();
    game.join("Pia").unwrap();

    // Oda, Pia, dealer twice round-robin, then Oda's hit.
    game.deck_mut()
        .set_cards(cards(&[Five, Ten, Ten, Six, Nine, Seven, Seven]));

    let result = played(game.play_round().unwrap());
    let questions = &game.prompter().questions;
    assert_eq!(questions[2], "Oda, do you want another card");
    assert_eq!(questions[3], "Oda, do you want another card");
    assert_eq!(questions[4], "Pia, do you want another card");

    assert_eq!(result.players[0].total, 18);
    assert_eq!(result.players[1].total, 19);
    assert_eq!(result.dealer_total, 17);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[1].outcome, HandOutcome::Win);
}

#[test]
fn steps_out_of_order_are_rejected() {
    let mut game = game_with(ScriptedPrompter::new());
    game.join("Quinn").unwrap();

    assert!(matches!(game.collect_bets(), Err(RoundError::InvalidState)));
    assert!(matches!(game.initial_deal(), Err(RoundError::InvalidState)));
    assert!(matches!(game.resolve(), Err(RoundError::InvalidState)));
    assert!(matches!(game.cleanup(), Err(RoundError::InvalidState)));

    game.prune_broke_players().unwrap();
    assert!(matches!(game.prune_broke_players(), Err(RoundError::InvalidState)));
    assert_eq!(game.join("Ray").unwrap_err(), JoinError::InvalidState);
}

#[test]
fn join_respects_max_players() {
    let options = TableOptions::default().with_max_players(2);
    let mut game = Game::new(options, 1, ScriptedPrompter::new());

    assert_eq!(game.join("Sam").unwrap(), 0);
    assert_eq!(game.join("Tia").unwrap(), 1);
    assert_eq!(game.join("Uma").unwrap_err(), JoinError::TableFull);
    assert_eq!(game.players().len(), 2);
    assert_eq!(game.players()[0].capital(), 100);
}

#[test]
fn max_players_is_clamped_to_the_table() {
    let options = TableOptions::default().with_max_players(0);
    let mut game = Game::new(options, 1, ScriptedPrompter::new());
    game.join("Sam").unwrap();
    assert_eq!(game.join("Tia").unwrap_err(), JoinError::TableFull);

    let options = TableOptions {
        max_players: 40,
        ..TableOptions::default()
    };
    let mut game = Game::new(options, 1, ScriptedPrompter::new());
    for _ in 0..MAX_PLAYERS {
        game.join("Guest").unwrap();
    }
    assert_eq!(game.join("Uma").unwrap_err(), JoinError::TableFull);
}

#[test]
fn exhausted_script_aborts_the_round() {
    let mut game = game_with(ScriptedPrompter::new().with_bets(&[20]));
    let vic = game.join("Vic").unwrap();
    let wyn = game.join("Wyn").unwrap();

    let err = game.play_round().unwrap_err();
    assert!(matches!(err, RoundError::Prompt(PromptError::Closed)));
    assert!(game.prompter().saw("Vic bets $20."));

    // Vic's stake comes back and the table is ready again.
    assert_eq!(game.phase(), RoundPhase::PruneBrokePlayers);
    for player in game.players() {
        assert_eq!(player.capital(), 100);
        assert_eq!(player.bet(), 0);
    }
    assert_eq!(game.rounds_played(), 0);

    game.prompter_mut().bets.extend([30, 10]);
    game.prompter_mut().hits.extend([false, false]);
    // Vic 19, Wyn 18, dealer 17
    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Ten, Nine, Eight, Seven]));

    let result = played(game.play_round().unwrap());
    assert_eq!(result.player(vic).unwrap().capital, 130);
    assert_eq!(result.player(wyn).unwrap().capital, 110);
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn abandoning_a_round_refunds_stakes_and_clears_hands() {
    let mut game = game_with(ScriptedPrompter::new().with_bets(&[20]));
    let player = game.join("Xia").unwrap();
    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Two, Seven]));

    game.prune_broke_players().unwrap();
    game.collect_bets().unwrap();
    game.initial_deal().unwrap();

    // A stepwise round in progress is left alone.
    assert!(matches!(game.play_round(), Err(RoundError::InvalidState)));
    assert_eq!(game.phase(), RoundPhase::PlayerTurns);
    assert_eq!(game.player(player).unwrap().capital(), 80);

    game.abort_round();
    assert_eq!(game.phase(), RoundPhase::PruneBrokePlayers);
    assert_eq!(game.player(player).unwrap().capital(), 100);
    assert_eq!(game.player(player).unwrap().bet(), 0);
    assert!(game.player(player).unwrap().hand().is_empty());
    assert!(game.dealer().hand().is_empty());

    // Between rounds there is nothing to abandon.
    game.abort_round();
    assert_eq!(game.player(player).unwrap().capital(), 100);
}

#[test]
fn payout_that_overflows_capital_settles_nothing() {
    let options = TableOptions::default().with_starting_capital(usize::MAX);
    let prompter = ScriptedPrompter::new()
        .with_bets(&[usize::MAX])
        .with_hits(&[false]);
    let mut game = Game::new(options, 3, prompter);
    let player = game.join("Yan").unwrap();
    // player 20, dealer 17
    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Ten, Seven]));

    let err = game.play_round().unwrap_err();
    assert!(matches!(err, RoundError::CapitalOverflow { ref name } if name == "Yan"));
    assert!(!game.prompter().saw("wins"));
    assert_eq!(game.player(player).unwrap().capital(), usize::MAX);
    assert_eq!(game.phase(), RoundPhase::PruneBrokePlayers);
}

#[test]
fn largest_payout_that_fits_is_paid() {
    let stake = usize::MAX / 2;
    let options = TableOptions::default().with_starting_capital(stake);
    let prompter = ScriptedPrompter::new().with_bets(&[stake]).with_hits(&[false]);
    let mut game = Game::new(options, 3, prompter);
    let player = game.join("Zed").unwrap();
    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Ten, Seven]));

    let result = played(game.play_round().unwrap());
    let zed = result.player(player).unwrap();
    assert_eq!(zed.outcome, HandOutcome::Win);
    assert_eq!(zed.payout, usize::MAX - 1);
    assert_eq!(zed.capital, usize::MAX - 1);
}

#[test]
fn player_ids_are_never_reused() {
    let options = TableOptions::default().with_starting_capital(1);
    let mut game = Game::new(options, 5, ScriptedPrompter::new());
    let regular = game.join("Regular").unwrap();

    let exhausted = 'table: loop {
        assert!(game.rounds_played() < 200);
        while game.players().len() < usize::from(MAX_PLAYERS) {
            if let Err(err) = game.join("Guest") {
                break 'table err;
            }
        }

        // The regular pushes on 20 and every guest loses on 4.
        let seated = game.players_with_funds();
        let mut pass = vec![Ten];
        pass.extend(iter::repeat_n(Two, seated - 1));
        pass.push(Ten);
        game.deck_mut().set_cards(cards(&[pass.clone(), pass].concat()));
        game.prompter_mut().bets.extend(iter::repeat_n(1, seated));
        game.prompter_mut().hits.extend(iter::repeat_n(false, seated));
        played(game.play_round().unwrap());
    };

    assert_eq!(exhausted, JoinError::IdsExhausted);
    let ids: HashSet<u8> = game
        .players()
        .iter()
        .chain(game.departed())
        .map(|player| player.id())
        .collect();
    assert_eq!(ids.len(), 256);
    assert_eq!(game.players().len() + game.departed().len(), 256);
    assert_eq!(game.player(regular).unwrap().capital(), 1);
}

#[test]
fn capital_carries_across_rounds() {
    let prompter = ScriptedPrompter::new()
        .with_bets(&[10, 40])
        .with_hits(&[false, false]);
    let options = TableOptions::default().with_starting_capital(50);
    let mut game = Game::new(options, 9, prompter);
    let player = game.join("Wes").unwrap();

    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Ten, Seven]));
    played(game.play_round().unwrap());
    assert_eq!(game.player(player).unwrap().capital(), 60);

    game.deck_mut()
        .set_cards(cards(&[Ten, Ten, Seven, Ten]));
    played(game.play_round().unwrap());
    assert_eq!(game.player(player).unwrap().capital(), 20);
    assert_eq!(game.rounds_played(), 2);
}
