use felt_engine::errors::GameError;
use felt_engine::game::{Game, GameOptions, Phase};
use felt_engine::player::{PlayerAction, PlayerStatus};

fn fresh_hand() -> Game {
    let mut g = Game::new(GameOptions {
        seed: Some(42),
        dealer: Some(0),
        ..Default::default()
    });
    g.start_new_round().expect("hand starts");
    g
}

#[test]
fn check_behind_the_table_bet_is_rejected_without_mutation() {
    let mut g = fresh_hand();
    // seat 3 owes the big blind and may not check
    let err = g.handle_player_action(PlayerAction::Check).unwrap_err();
    assert_eq!(
        err,
        GameError::CheckNotAllowed {
            player_bet: 0,
            table_bet: 20
        }
    );

    // nothing moved: same actor, same pot, no action recorded
    assert_eq!(g.current_seat(), 3);
    assert_eq!(g.pot(), 30);
    assert_eq!(g.current_bet(), 20);
    assert!(g.action_log().is_empty());
}

#[test]
fn round_closes_once_all_live_bets_match() {
    let mut g = fresh_hand();
    g.handle_player_action(PlayerAction::Call).unwrap(); // seat 3
    g.handle_player_action(PlayerAction::Call).unwrap(); // seat 0

    // The small blind's call matches every live bet, so the street closes
    // here; the big blind gets no extra option.
    g.handle_player_action(PlayerAction::Call).unwrap(); // seat 1
    assert_eq!(g.phase(), Phase::Flop);
    assert_eq!(g.community().len(), 3);

    // Post-flop the action opens at the first eligible seat after the
    // dealer with a clean table bet, so a check is legal. It also matches
    // every live bet at once, which closes the street immediately.
    assert_eq!(g.current_seat(), 1);
    assert_eq!(g.current_bet(), 0);
    g.handle_player_action(PlayerAction::Check).unwrap();
    assert_eq!(g.phase(), Phase::Turn);
    assert_eq!(g.current_seat(), 1);
}

#[test]
fn call_pays_the_delta_into_the_pot() {
    let mut g = fresh_hand();
    g.handle_player_action(PlayerAction::Call).unwrap(); // seat 3 pays 20
    assert_eq!(g.pot(), 50);
    assert_eq!(g.players()[3].chips, 980);

    g.handle_player_action(PlayerAction::Call).unwrap(); // seat 0 pays 20
    g.handle_player_action(PlayerAction::Call).unwrap(); // seat 1 tops up 10
    assert_eq!(g.pot(), 80);
    assert_eq!(g.players()[1].chips, 980);
}

#[test]
fn undersized_raise_is_floored_to_the_minimum() {
    let mut g = fresh_hand();
    // minimum raise starts at the big blind; a raise of 5 becomes 20
    g.handle_player_action(PlayerAction::Raise(5)).unwrap();

    let raiser = &g.players()[3];
    assert_eq!(raiser.current_bet, 40); // call 20 + floored raise 20
    assert_eq!(g.current_bet(), 40);
    assert_eq!(g.min_raise(), 20);
    assert_eq!(g.pot(), 70);
}

#[test]
fn raise_updates_the_minimum_to_its_increment() {
    let mut g = fresh_hand();
    g.handle_player_action(PlayerAction::Raise(60)).unwrap(); // seat 3 to 80
    assert_eq!(g.current_bet(), 80);
    assert_eq!(g.min_raise(), 60);

    // the next raise must put in at least 60 more; 30 gets floored
    g.handle_player_action(PlayerAction::Raise(30)).unwrap(); // seat 0
    assert_eq!(g.players()[0].current_bet, 80 + 60);
    assert_eq!(g.current_bet(), 140);
    assert_eq!(g.min_raise(), 60);
}

#[test]
fn all_in_above_the_table_bet_raises_it() {
    let mut g = fresh_hand();
    g.handle_player_action(PlayerAction::AllIn).unwrap(); // seat 3 shoves 1000
    assert_eq!(g.players()[3].status, PlayerStatus::AllIn);
    assert_eq!(g.players()[3].chips, 0);
    assert_eq!(g.current_bet(), 1000);
    assert_eq!(g.pot(), 1030);
}

#[test]
fn actions_outside_a_hand_are_rejected() {
    let mut g = Game::new(GameOptions {
        seed: Some(42),
        dealer: Some(0),
        ..Default::default()
    });
    let err = g.handle_player_action(PlayerAction::Call).unwrap_err();
    assert_eq!(err, GameError::NoHandInProgress);
}

#[test]
fn starting_a_round_twice_is_rejected() {
    let mut g = fresh_hand();
    assert_eq!(g.start_new_round().unwrap_err(), GameError::HandInProgress);
}
