use headsup_holdem::betting::{Action, ActionError, Phase};
use headsup_holdem::config::TableConfig;
use headsup_holdem::engine::GameEngine;
use headsup_holdem::game::{Game, Outcome};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_secs(1);

fn mk_game(seed: u64) -> Game {
    Game::new(TableConfig::default().with_seed(seed)).unwrap()
}

/// Apply `action`, then let the computer finish thinking.
fn act_and_wait<E: GameEngine>(engine: &mut E, action: Action, now: Instant) -> Instant {
    engine.apply_action_at(action, now).unwrap();
    let later = now + DELAY;
    if engine.current_state().computer_thinking {
        assert!(engine.tick(later));
    }
    later
}

#[test]
fn call_down_reveals_three_one_one() {
    let mut game = mk_game(3);
    let mut t = Instant::now();
    let mut seen = Vec::new();
    for _ in 0..3 {
        t = act_and_wait(&mut game, Action::Call, t);
        let s = game.current_state();
        assert_eq!(s.current_wager, s.minimum_wager, "wager resets on every reveal");
        seen.push((s.phase, s.community.len()));
    }
    assert_eq!(seen, vec![(Phase::Flop, 3), (Phase::Turn, 4), (Phase::River, 5)]);

    game.apply_action_at(Action::Call, t).unwrap();
    let s = game.current_state();
    assert_eq!(s.phase, Phase::RoundOver);
    assert!(!s.computer_thinking, "river call resolves without a delay");
    assert!(matches!(s.outcome, Some(Outcome::Showdown { .. })));
    assert_eq!(s.pot, 0);
    assert_eq!(s.user_balance + s.computer_balance, 1000);
}

#[test]
fn raise_doubles_wager_until_the_next_reveal() {
    let mut game = mk_game(4);
    let t0 = Instant::now();
    game.apply_action_at(Action::Raise, t0).unwrap();
    let s = game.current_state();
    assert_eq!(s.current_wager, 40);
    assert_eq!(s.pot, 80);
    assert_eq!(s.amount_at_risk, 40);
    assert_eq!((s.user_balance, s.computer_balance), (460, 460));

    assert!(game.tick(t0 + DELAY));
    let s = game.current_state();
    assert_eq!(s.phase, Phase::Flop);
    assert_eq!(s.current_wager, 20);
    assert_eq!(s.pot, 80);
}

#[test]
fn actions_wait_for_the_computer() {
    let mut game = mk_game(5);
    let t0 = Instant::now();
    game.apply_action_at(Action::Call, t0).unwrap();
    for action in [Action::Fold, Action::Call, Action::Raise] {
        assert_eq!(game.apply_action_at(action, t0), Err(ActionError::ComputerTurn));
    }
    assert!(!game.current_state().can_raise);
    assert!(!game.tick(t0 + DELAY / 2));
    assert!(game.current_state().computer_thinking);
    assert!(game.tick(t0 + DELAY));
    assert!(game.current_state().can_raise);
}

#[test]
fn finished_round_rejects_actions() {
    let mut game = mk_game(6);
    game.apply_action(Action::Fold).unwrap();
    assert_eq!(game.apply_action(Action::Call), Err(ActionError::RoundOver));
    assert_eq!(game.apply_action(Action::Fold), Err(ActionError::RoundOver));
}

#[test]
fn zero_delay_reveals_on_the_next_tick() {
    let mut game = Game::new(TableConfig::default().with_seed(7).with_computer_delay(Duration::ZERO))
        .unwrap();
    let t0 = Instant::now();
    game.apply_action_at(Action::Call, t0).unwrap();
    assert!(game.tick(t0));
    assert_eq!(game.current_state().phase, Phase::Flop);
}

#[test]
fn new_round_resets_the_table() {
    let mut game = mk_game(8);
    let t = act_and_wait(&mut game, Action::Raise, Instant::now());
    assert_eq!(game.start_new_round(), Err(ActionError::RoundInProgress));
    game.apply_action_at(Action::Fold, t).unwrap();
    game.start_new_round().unwrap();

    let s = game.current_state();
    assert_eq!(s.phase, Phase::PreFlop);
    assert_eq!(s.pot, 0);
    assert_eq!(s.current_wager, 20);
    assert_eq!(s.amount_at_risk, 0);
    assert!(s.community.is_empty());
    assert!(s.outcome.is_none());
    assert!(s.computer_hole.is_none());
    let hole = s.user_hole.unwrap();
    assert_ne!(hole.first(), hole.second());
    assert_eq!(game.deck().count(), 48);
}
