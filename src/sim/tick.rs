//! Per-frame simulation step
//!
//! Core game loop that advances the state by one variable timestep. The
//! caller clamps `dt` to [`Tuning::max_frame_dt`](crate::Tuning) first.

use glam::Vec2;
use rand::Rng;

use super::collision::{CollisionSide, circle_rect_overlap, collision_side};
use super::dynamics::{approach, reflect_from_paddle, sample_wind_in};
use super::state::{GameEvent, GamePhase, GameState};
use crate::messages;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement direction: -1 left, 0 still, 1 right
    pub move_dir: f32,
    /// Launch the ball (edge-triggered)
    pub launch: bool,
    /// Pause toggle (edge-triggered)
    pub pause: bool,
    /// Restart the session (edge-triggered)
    pub restart: bool,
    /// Demo mode - the paddle plays itself
    pub autopilot: bool,
}

/// Advance the game state by one frame
///
/// Edge inputs apply first (restart, then pause, then launch), then physics.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.restart {
        state.restart();
    }

    if input.pause {
        toggle_pause(state);
    }

    let mut input = input.clone();
    if input.autopilot {
        steer_autopilot(state, &mut input);
    }

    if input.launch {
        launch(state);
    }

    state.paddle.slide(input.move_dir, dt, &state.tuning);

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Serve => {
            state.ball.rest_on(&state.paddle);
            return;
        }
        GamePhase::Paused { .. } | GamePhase::GameOver | GamePhase::LevelClear => return,
    }

    update_wind(state, dt);
    integrate_ball(state, dt);
    bounce_off_walls(state);

    if state.ball.pos().y - state.ball.radius() > state.tuning.field_height {
        lose_life(state);
        return;
    }

    bounce_off_paddle(state);
    hit_first_brick(state);

    state.bricks.retain(|b| !b.is_destroyed());

    if state.bricks.is_empty() {
        state.phase = GamePhase::LevelClear;
        state.message = messages::LEVEL_CLEAR.to_string();
        state.events.push(GameEvent::LevelClear);
        log::info!("Level clear with score {}", state.score);
    }
}

fn toggle_pause(state: &mut GameState) {
    match state.phase {
        GamePhase::Serve => {
            state.phase = GamePhase::Paused { launched: false };
            state.message = messages::PAUSED.to_string();
            state.events.push(GameEvent::Paused);
        }
        GamePhase::Playing => {
            state.phase = GamePhase::Paused { launched: true };
            state.message = messages::PAUSED.to_string();
            state.events.push(GameEvent::Paused);
        }
        GamePhase::Paused { launched } => {
            if launched {
                state.phase = GamePhase::Playing;
                state.message.clear();
            } else {
                state.phase = GamePhase::Serve;
                state.message = messages::LAUNCH.to_string();
            }
            state.events.push(GameEvent::Resumed);
        }
        GamePhase::GameOver | GamePhase::LevelClear => {}
    }
}

fn launch(state: &mut GameState) {
    if state.phase != GamePhase::Serve {
        return;
    }
    state.ball.vel = reflect_from_paddle(state.ball.pos(), &state.paddle.rect, state.ball.base_speed);
    state.phase = GamePhase::Playing;
    state.message.clear();
    state.events.push(GameEvent::Launched);
}

/// Launch from serve and keep the paddle under the ball
fn steer_autopilot(state: &GameState, input: &mut TickInput) {
    if state.phase == GamePhase::Serve {
        input.launch = true;
    }

    let dead_zone = state.paddle.rect.w * 0.1;
    let offset = state.ball.pos().x - state.paddle.center_x();
    input.move_dir = if offset > dead_zone {
        1.0
    } else if offset < -dead_zone {
        -1.0
    } else {
        0.0
    };
}

fn update_wind(state: &mut GameState, dt: f32) {
    let tuning = &state.tuning;

    state.wind.timer += dt;
    if state.wind.timer >= tuning.wind_period {
        state.wind.timer = 0.0;
        let rng = &mut state.rng;
        state.wind.target = sample_wind_in(
            || rng.random::<f32>(),
            tuning.wind_min_magnitude,
            tuning.wind_max_magnitude,
        );
        state.events.push(GameEvent::WindShift {
            target: state.wind.target,
        });
        log::debug!("Wind shifting toward {:.2}", state.wind.target);
    }

    state.wind.current = approach(
        state.wind.current,
        state.wind.target,
        dt * tuning.wind_approach_rate,
    );
}

fn integrate_ball(state: &mut GameState, dt: f32) {
    let ball = &mut state.ball;
    ball.vel.x += state.wind.current * dt * state.tuning.wind_gain;
    ball.circle.center += ball.vel * dt;
}

/// Left, right and top walls reflect; the floor does not
fn bounce_off_walls(state: &mut GameState) {
    let width = state.tuning.field_width;
    let ball = &mut state.ball;
    let r = ball.radius();

    if ball.circle.center.x - r < 0.0 {
        ball.circle.center.x = r;
        ball.vel.x = ball.vel.x.abs();
    }
    if ball.circle.center.x + r > width {
        ball.circle.center.x = width - r;
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.circle.center.y - r < 0.0 {
        ball.circle.center.y = r;
        ball.vel.y = ball.vel.y.abs();
    }
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.ball.vel = Vec2::ZERO;
        state.message = messages::GAME_OVER.to_string();
        state.events.push(GameEvent::GameOver);
        log::info!("Game over with score {}", state.score);
        return;
    }

    log::info!("Life lost, {} remaining", state.lives);
    state.serve(messages::LIFE_LOST);
}

/// Only a descending ball can bounce, so a ball leaving the paddle can't re-hit it
fn bounce_off_paddle(state: &mut GameState) {
    let paddle = &state.paddle.rect;
    let gap = state.tuning.ball_bounce_gap;
    let ball = &mut state.ball;

    if ball.vel.y <= 0.0 || !circle_rect_overlap(&ball.circle, paddle) {
        return;
    }

    let speed = state.tuning.bounce_speed(state.score);
    ball.vel = reflect_from_paddle(ball.pos(), paddle, speed);
    ball.circle.center.y = paddle.y - ball.radius() - gap;
    state.events.push(GameEvent::PaddleHit);
}

/// Resolve at most one brick hit per frame
///
/// Bricks are scanned in grid order and the first overlap wins. Resolving
/// several hits in one step would flip the velocity back and forth.
fn hit_first_brick(state: &mut GameState) {
    let ball = &mut state.ball;
    let Some(brick) = state
        .bricks
        .iter_mut()
        .find(|b| circle_rect_overlap(&ball.circle, &b.rect))
    else {
        return;
    };

    brick.hits += 1;
    match collision_side(ball.pos(), &brick.rect) {
        CollisionSide::Horizontal => ball.vel.x = -ball.vel.x,
        CollisionSide::Vertical => ball.vel.y = -ball.vel.y,
    }
    state.score += state.tuning.points_per_toughness * u64::from(brick.max_hits);
    state.events.push(GameEvent::BrickHit {
        row: brick.row,
        col: brick.col,
        destroyed: brick.is_destroyed(),
    });
}
