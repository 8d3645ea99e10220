use glam::Vec2;
use windbreaker::consts::*;
use windbreaker::messages;
use windbreaker::sim::*;

const DT: f32 = 1.0 / 60.0;

fn press(launch: bool, pause: bool, restart: bool) -> TickInput {
    TickInput {
        launch,
        pause,
        restart,
        ..Default::default()
    }
}

fn launched(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    tick(&mut state, &press(true, false, false), DT);
    assert_eq!(state.phase, GamePhase::Playing);
    state
}

/// Place the ball and zero out wind so the step is predictable
fn place_ball(state: &mut GameState, pos: Vec2, vel: Vec2) {
    state.ball.circle.center = pos;
    state.ball.vel = vel;
    state.wind = Wind::default();
}

#[test]
fn test_descending_ball_bounces_off_paddle() {
    let mut state = launched(1);
    let paddle = state.paddle.rect;
    place_ball(
        &mut state,
        Vec2::new(paddle.x + paddle.w * 0.75, paddle.y - 5.0),
        Vec2::new(0.0, 200.0),
    );

    tick(&mut state, &TickInput::default(), DT);

    assert!(state.ball.vel.y < 0.0);
    assert!(state.ball.vel.x > 0.0, "right of center deflects right");
    assert_eq!(
        state.ball.pos().y,
        paddle.y - BALL_RADIUS - BALL_BOUNCE_GAP
    );
    assert!((state.ball.vel.length() - BALL_BASE_SPEED).abs() < 1e-2);
    assert!(state.events.contains(&GameEvent::PaddleHit));
}

#[test]
fn test_rising_ball_passes_through_paddle() {
    let mut state = launched(1);
    let paddle = state.paddle.rect;
    place_ball(
        &mut state,
        Vec2::new(paddle.x + paddle.w / 2.0, paddle.y + 5.0),
        Vec2::new(0.0, -200.0),
    );

    tick(&mut state, &TickInput::default(), DT);

    assert_eq!(state.ball.vel, Vec2::new(0.0, -200.0));
    assert!(!state.events.contains(&GameEvent::PaddleHit));
}

#[test]
fn test_bounce_speed_grows_with_score() {
    let mut state = launched(1);
    state.score = 400;
    let paddle = state.paddle.rect;
    place_ball(
        &mut state,
        Vec2::new(paddle.x + paddle.w / 2.0, paddle.y - 5.0),
        Vec2::new(0.0, 200.0),
    );

    tick(&mut state, &TickInput::default(), DT);

    assert!((state.ball.vel.length() - (BALL_BASE_SPEED + 50.0)).abs() < 1e-2);
}

#[test]
fn test_last_brick_clears_level_and_halts() {
    let mut state = launched(2);
    state.bricks.truncate(1);
    state.bricks[0].hits = state.bricks[0].max_hits - 1;
    let brick = state.bricks[0].rect;
    place_ball(
        &mut state,
        Vec2::new(brick.center().x, brick.bottom() + 5.0),
        Vec2::new(0.0, -100.0),
    );

    tick(&mut state, &TickInput::default(), DT);

    assert!(state.bricks.is_empty());
    assert_eq!(state.phase, GamePhase::LevelClear);
    assert_eq!(state.message, messages::LEVEL_CLEAR);
    assert!(state.events.contains(&GameEvent::LevelClear));

    // Physics no longer advances; launch and pause are ignored
    let pos = state.ball.pos();
    tick(&mut state, &press(true, true, false), DT);
    assert_eq!(state.ball.pos(), pos);
    assert_eq!(state.phase, GamePhase::LevelClear);

    // Restart brings the grid back
    tick(&mut state, &press(false, false, true), DT);
    assert_eq!(state.phase, GamePhase::Serve);
    assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
    assert_eq!(state.score, 0);
}

#[test]
fn test_floor_costs_exactly_one_life() {
    let mut state = launched(3);
    place_ball(
        &mut state,
        Vec2::new(400.0, FIELD_HEIGHT + BALL_RADIUS - 1.0),
        Vec2::new(0.0, 300.0),
    );

    tick(&mut state, &TickInput::default(), DT);

    assert_eq!(state.lives, STARTING_LIVES - 1);
    assert_eq!(state.phase, GamePhase::Serve);
    assert_eq!(state.message, messages::LIFE_LOST);
    assert_eq!(state.ball.vel, Vec2::ZERO);
    assert_eq!(state.ball.pos().x, state.paddle.center_x());

    // Next frame keeps the ball resting
    tick(&mut state, &TickInput::default(), DT);
    assert_eq!(state.lives, STARTING_LIVES - 1);
}

#[test]
fn test_game_over_rejects_input_until_restart() {
    let mut state = launched(4);
    state.lives = 1;
    state.score = 750;
    place_ball(
        &mut state,
        Vec2::new(400.0, FIELD_HEIGHT + BALL_RADIUS + 1.0),
        Vec2::new(0.0, 300.0),
    );

    tick(&mut state, &TickInput::default(), DT);
    assert_eq!(state.lives, 0);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.message, messages::GAME_OVER);
    assert!(state.events.contains(&GameEvent::GameOver));

    tick(&mut state, &press(true, false, false), DT);
    assert_eq!(state.phase, GamePhase::GameOver);
    tick(&mut state, &press(false, true, false), DT);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.score, 750);

    tick(&mut state, &press(false, false, true), DT);
    assert_eq!(state.phase, GamePhase::Serve);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.score, 0);
    assert_eq!(state.message, messages::LAUNCH);
    assert_eq!(state.wind.current, 0.0);
    assert!(state.events.contains(&GameEvent::Restarted));
}

#[test]
fn test_restart_while_paused_returns_to_serve() {
    let mut state = launched(6);
    state.score = 300;
    state.lives = 1;
    tick(&mut state, &press(false, true, false), DT);
    assert_eq!(state.phase, GamePhase::Paused { launched: true });

    tick(&mut state, &press(false, false, true), DT);
    assert_eq!(state.phase, GamePhase::Serve);
    assert_eq!(state.message, messages::LAUNCH);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.score, 0);
    assert_eq!(state.ball.vel, Vec2::ZERO);
    assert!(state.events.contains(&GameEvent::Restarted));
}

#[test]
fn test_bounce_gap_from_tuning() {
    let tuning = windbreaker::Tuning {
        ball_bounce_gap: 3.0,
        ..Default::default()
    };
    let mut state = GameState::with_tuning(tuning, 9);
    tick(&mut state, &press(true, false, false), DT);
    let paddle = state.paddle.rect;
    place_ball(
        &mut state,
        Vec2::new(paddle.center().x, paddle.y - BALL_RADIUS + 2.0),
        Vec2::new(0.0, 200.0),
    );

    tick(&mut state, &TickInput::default(), DT);
    assert!(state.ball.vel.y < 0.0);
    assert_eq!(state.ball.pos().y, paddle.y - BALL_RADIUS - 3.0);
}

#[test]
fn test_restart_then_launch_same_frame() {
    let mut state = launched(5);
    state.score = 100;
    tick(&mut state, &press(true, false, true), DT);
    assert_eq!(state.score, 0);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn test_autopilot_plays_a_session() {
    let mut state = GameState::new(2024);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut hits = 0;
    for _ in 0..(60 * 60) {
        tick(&mut state, &input, DT);
        hits += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickHit { .. }))
            .count();
        if state.phase.is_terminal() {
            break;
        }
    }

    assert!(hits > 0);
    assert!(state.score > 0);
}

#[test]
fn test_wind_never_jumps() {
    let mut state = launched(6);
    let max_step = DT * WIND_APPROACH_RATE + 1e-6;
    let mut last = state.wind.current;

    for _ in 0..(60 * 30) {
        // Keep the ball in play, away from bricks and the floor
        place_ball_keep_wind(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert!((state.wind.current - last).abs() <= max_step);
        last = state.wind.current;
    }

    assert!(state.wind.target != 0.0, "wind target shifted at least once");
}

fn place_ball_keep_wind(state: &mut GameState) {
    state.ball.circle.center = Vec2::new(400.0, 400.0);
    state.ball.vel = Vec2::ZERO;
}
