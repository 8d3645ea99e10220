//! Read-only view of the game for rendering and HUD

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Circle, Rect};
use super::state::GameState;

/// Color of a brick that has taken a hit but is still standing
pub const CRACKED_BRICK_COLOR: &str = "#30363d";

#[derive(Debug, Clone, Serialize)]
pub struct BrickView {
    pub rect: Rect,
    pub hits: u32,
    pub max_hits: u32,
    /// CSS color to paint the brick with
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Seed the wind RNG was started from
    pub seed: u64,
    pub paddle: Rect,
    pub ball: Circle,
    pub ball_vel: Vec2,
    pub bricks: Vec<BrickView>,
    pub wind: f32,
    /// Seconds until the wind picks a new target
    pub next_wind_shift: f32,
    pub score: u64,
    pub lives: u32,
    pub message: String,
    pub launched: bool,
    /// Explicit pause only; game over and level clear report `false` here
    pub paused: bool,
    pub game_over: bool,
    pub level_clear: bool,
    pub field_width: f32,
    pub field_height: f32,
    pub field_margin: f32,
}

impl Snapshot {
    pub fn of(state: &GameState) -> Self {
        let bricks = state
            .bricks
            .iter()
            .map(|b| BrickView {
                rect: b.rect,
                hits: b.hits,
                max_hits: b.max_hits,
                color: if b.hits > 0 {
                    CRACKED_BRICK_COLOR
                } else {
                    b.tint.hex()
                },
            })
            .collect();

        Self {
            seed: state.seed,
            paddle: state.paddle.rect,
            ball: state.ball.circle,
            ball_vel: state.ball.vel,
            bricks,
            wind: state.wind.current,
            next_wind_shift: state.wind.time_to_shift(state.tuning.wind_period),
            score: state.score,
            lives: state.lives,
            message: state.message.clone(),
            launched: state.launched(),
            paused: state.paused(),
            game_over: state.game_over(),
            level_clear: state.level_clear(),
            field_width: state.tuning.field_width,
            field_height: state.tuning.field_height,
            field_margin: state.tuning.field_margin,
        }
    }
}
