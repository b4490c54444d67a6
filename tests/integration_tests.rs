//! Integration tests for the game rules through the public API

use speedway::core::{Coin, GameState, Obstacle, RandomSource, SequenceRng, SimpleRng};
use speedway::engine::{Session, SessionStatus};
use speedway::types::{Direction, GameAction, ObstacleKind};

fn quiet() -> GameState<SequenceRng> {
    GameState::with_rng(400, 600, SequenceRng::never())
}

/// Pass `count` obstacles off the bottom edge away from the player.
fn bank_points(state: &mut GameState<SequenceRng>, count: usize) {
    for _ in 0..count {
        state.insert_obstacle(Obstacle::new(60, 599.0, 40, 30, ObstacleKind::Barrier));
    }
    state.update();
}

#[test]
fn test_reset_scenario_and_left_clamp() {
    let mut state = GameState::new(12345);
    assert_eq!((state.player_x(), state.player_y()), (200, 500));

    state.move_player(Direction::Left);
    assert_eq!(state.player_x(), 195);

    for _ in 0..40 {
        state.move_player(Direction::Left);
    }
    assert_eq!(state.player_x(), 50);
}

#[test]
fn test_movement_stays_in_lane_from_any_start() {
    for start_moves in 0..60 {
        let mut state = quiet();
        for _ in 0..start_moves {
            state.move_player(Direction::Right);
        }
        for dir in [Direction::Left, Direction::Right] {
            for _ in 0..100 {
                state.move_player(dir);
                assert!((50..=350).contains(&state.player_x()));
            }
        }
    }
}

#[test]
fn test_obstacle_exits_after_four_updates() {
    let mut state = quiet();
    // Below the player hitbox (bottom edge y=530), so it never collides.
    state.insert_obstacle(Obstacle::new(200, 590.0, 40, 30, ObstacleKind::Car));

    for expected in [593.0, 596.0, 599.0] {
        state.update();
        assert_eq!(state.obstacles()[0].y, expected);
        assert_eq!(state.score(), 0);
    }
    state.update();
    assert!(state.obstacles().is_empty());
    assert_eq!(state.score(), 10);
}

#[test]
fn test_coin_at_490_levels_up_once() {
    let mut state = quiet();
    bank_points(&mut state, 49);
    assert_eq!(state.score(), 490);
    assert_eq!(state.level(), 1);

    state.insert_coin(Coin::new(200, 498.0, 10));
    let report = state.update();
    assert_eq!(report.collected, 1);
    assert!(report.leveled_up);
    assert_eq!(state.score(), 540);
    assert_eq!(state.level(), 2);
    assert_eq!(state.obstacle_speed(), 3.5);
    assert!((state.coin_speed() - 2.3).abs() < 1e-9);
}

#[test]
fn test_multi_threshold_jump_applies_one_speed_step() {
    let mut state = quiet();
    bank_points(&mut state, 120);
    assert_eq!(state.score(), 1200);
    assert_eq!(state.level(), 3);
    assert_eq!(state.obstacle_speed(), 3.5);
}

#[test]
fn test_collisions_cost_lives_not_score() {
    let mut state = quiet();
    state.insert_obstacle(Obstacle::new(200, 497.0, 40, 30, ObstacleKind::Car));
    state.insert_obstacle(Obstacle::new(210, 497.0, 40, 30, ObstacleKind::Truck));
    let report = state.update();

    assert_eq!(report.hits, 2);
    assert_eq!(state.player_lives(), 1);
    assert_eq!(state.score(), 0);
    assert!(!state.game_over());
    assert!(state.obstacles().is_empty());
}

#[test]
fn test_game_over_is_sticky_until_reset() {
    let mut state = quiet();
    for dx in [-5, 0, 5, 10] {
        state.insert_obstacle(Obstacle::new(200 + dx, 497.0, 40, 30, ObstacleKind::Car));
    }
    let report = state.update();
    assert!(report.game_over);
    assert_eq!(state.player_lives(), -1);

    let frozen = state.snapshot();
    for _ in 0..10 {
        state.update();
    }
    assert_eq!(state.snapshot(), frozen);

    state.reset();
    assert!(!state.game_over());
    assert_eq!(state.player_lives(), 3);
}

#[test]
fn test_paused_update_changes_nothing() {
    let mut state = GameState::new(99);
    for _ in 0..200 {
        state.update();
    }
    state.apply_action(GameAction::Pause);
    let before = state.clone();
    for _ in 0..50 {
        state.update();
    }
    assert_eq!(state, before);
}

#[test]
fn test_movement_allowed_while_paused() {
    let mut state = quiet();
    state.apply_action(GameAction::Pause);
    assert!(state.move_player(Direction::Right));
    assert_eq!(state.player_x(), 205);
}

#[test]
fn test_level_formula_holds_every_tick() {
    let mut state = GameState::new(2024);
    for _ in 0..5_000 {
        state.update();
        assert_eq!(state.level(), state.score() / 500 + 1);
        if state.game_over() {
            break;
        }
    }
}

#[test]
fn test_same_seed_replays_same_round() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    for i in 0..1_000 {
        if i % 7 == 0 {
            a.move_player(Direction::Left);
            b.move_player(Direction::Left);
        }
        a.update();
        b.update();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_scripted_draws_spawn_exact_entities() {
    // Obstacle: chance, x, width, height, kind index. Coin: chance, x, size.
    let draws = vec![0.0, 120.0, 40.0, 30.0, 1.0, 0.0, 300.0, 12.0];
    let mut state = GameState::with_rng(400, 600, SequenceRng::new(draws));
    state.update();

    assert_eq!(
        state.obstacles(),
        &[Obstacle::new(120, -50.0, 40, 30, ObstacleKind::Truck)]
    );
    assert_eq!(state.coins(), &[Coin::new(300, -30.0, 12)]);
    assert_eq!(state.rng().consumed(), 8);
}

#[test]
fn test_boxed_random_source() {
    let rng: Box<dyn RandomSource> = Box::new(SimpleRng::new(5));
    let mut state = GameState::with_rng(400, 600, rng);
    for _ in 0..100 {
        state.update();
    }
    assert_eq!(state.level(), state.score() / 500 + 1);
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new(31, 100);
    assert_eq!(session.status(), SessionStatus::Running);

    let mut ticks = 0;
    for _ in 0..50 {
        if session.advance(100).is_some() {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 50);

    session.apply(GameAction::Pause);
    assert!(session.advance(100).is_none());
    session.apply(GameAction::Reset);
    assert_eq!(session.round(), 2);
    assert_eq!(session.status(), SessionStatus::Running);
}
