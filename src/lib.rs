//! Windbreaker - a breakout game with a shifting crosswind
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, ball dynamics, game state)
//! - `tuning`: Data-driven game balance with JSON overrides
//! - `input`: Keyboard mapping and per-frame input assembly
//! - `hud`: HUD text formatting
//! - `renderer`: Canvas 2D presentation (browser only)

pub mod hud;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::HudText;
pub use input::{InputState, KeyAction};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Largest frame step fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Interior margin the paddle may not cross
    pub const FIELD_MARGIN: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 128.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance from the paddle top to the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 520.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 330.0;
    /// Gap between a resting ball and the paddle surface
    pub const BALL_REST_GAP: f32 = 4.0;
    /// Gap left after a paddle bounce so the next frame can't re-hit
    pub const BALL_BOUNCE_GAP: f32 = 0.2;
    /// Speed bonus cap and the score needed per point of bonus
    pub const SPEED_BONUS_MAX: f32 = 120.0;
    pub const SPEED_BONUS_SCORE_DIVISOR: f32 = 8.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_PADDING: f32 = 12.0;
    pub const BRICK_OFFSET_TOP: f32 = 80.0;
    pub const BRICK_OFFSET_LEFT: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 26.0;
    /// Rows (from the top) that take two hits
    pub const TOUGH_ROWS: usize = 2;
    /// Points per hit, multiplied by the brick's toughness
    pub const POINTS_PER_TOUGHNESS: u64 = 50;

    /// Wind defaults
    pub const WIND_PERIOD: f32 = 5.0;
    /// How fast the current wind chases its target (units per second)
    pub const WIND_APPROACH_RATE: f32 = 0.75;
    /// Lateral acceleration per unit of wind
    pub const WIND_GAIN: f32 = 14.0;
    pub const WIND_MIN_MAGNITUDE: f32 = 0.35;
    pub const WIND_MAX_MAGNITUDE: f32 = 2.10;

    pub const STARTING_LIVES: u32 = 3;
}

/// Status messages shown over the playfield
pub mod messages {
    pub const LAUNCH: &str = "Press Space to launch";
    pub const PAUSED: &str = "Paused";
    pub const LIFE_LOST: &str = "Life lost. Press Space to relaunch.";
    pub const GAME_OVER: &str = "Out of lives! Press R to restart.";
    pub const LEVEL_CLEAR: &str = "All clear! Press R to play again.";
}
