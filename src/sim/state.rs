//! Game state and core simulation types
//!
//! Everything the per-frame update touches lives in [`GameState`]; there is
//! no ambient state anywhere else in the simulation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect, clamp};
use crate::messages;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Physics frozen (paddle still moves); remembers whether the ball was in flight
    Paused { launched: bool },
    /// Out of lives; only restart leaves this phase
    GameOver,
    /// Every brick destroyed; only restart leaves this phase
    LevelClear,
}

impl GamePhase {
    /// Terminal phases ignore launch and pause input
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::LevelClear)
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Restarted,
    Launched,
    Paused,
    Resumed,
    WindShift { target: f32 },
    PaddleHit,
    BrickHit { row: usize, col: usize, destroyed: bool },
    LifeLost { lives_left: u32 },
    GameOver,
    LevelClear,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal speed (pixels/sec)
    pub speed: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.paddle_start_x(),
                tuning.paddle_y(),
                tuning.paddle_width,
                tuning.paddle_height,
            ),
            speed: tuning.paddle_speed,
        }
    }

    /// Move horizontally by `direction * speed * dt`, staying inside the field margins
    pub fn slide(&mut self, direction: f32, dt: f32, tuning: &Tuning) {
        let min_x = tuning.field_margin;
        let max_x = tuning.field_width - self.rect.w - tuning.field_margin;
        self.rect.x = clamp(self.rect.x + direction * self.speed * dt, min_x, max_x);
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.rect.x + self.rect.w / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub circle: Circle,
    pub vel: Vec2,
    /// Launch speed; paddle bounces add a score bonus on top
    pub base_speed: f32,
    /// Gap kept between a resting ball and the paddle surface
    pub rest_gap: f32,
}

impl Ball {
    pub fn new(tuning: &Tuning, paddle: &Paddle) -> Self {
        let mut ball = Self {
            circle: Circle::new(Vec2::ZERO, tuning.ball_radius),
            vel: Vec2::ZERO,
            base_speed: tuning.ball_base_speed,
            rest_gap: tuning.ball_rest_gap,
        };
        ball.rest_on(paddle);
        ball
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.circle.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.circle.radius
    }

    /// Pin the ball just above the paddle center
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.circle.center = Vec2::new(
            paddle.center_x(),
            paddle.rect.y - self.circle.radius - self.rest_gap,
        );
    }
}

/// Display color of a brick row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTint {
    Coral,
    Amber,
    Sand,
    Mint,
    Sky,
}

impl BrickTint {
    const ROWS: [BrickTint; 5] = [
        BrickTint::Coral,
        BrickTint::Amber,
        BrickTint::Sand,
        BrickTint::Mint,
        BrickTint::Sky,
    ];

    /// Tint for a grid row (cycles past the fifth row)
    pub fn for_row(row: usize) -> Self {
        Self::ROWS[row % Self::ROWS.len()]
    }

    pub fn hex(self) -> &'static str {
        match self {
            BrickTint::Coral => "#ff7b72",
            BrickTint::Amber => "#ffa657",
            BrickTint::Sand => "#ffd27f",
            BrickTint::Mint => "#7ee787",
            BrickTint::Sky => "#79c0ff",
        }
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub row: usize,
    pub col: usize,
    pub hits: u32,
    /// Toughness: hits needed to destroy, also scales the point value
    pub max_hits: u32,
    pub tint: BrickTint,
}

impl Brick {
    pub fn is_destroyed(&self) -> bool {
        self.hits >= self.max_hits
    }

    /// Hit at least once but still standing
    pub fn is_cracked(&self) -> bool {
        self.hits > 0 && !self.is_destroyed()
    }
}

/// Build the full brick grid, row by row, left to right
pub fn build_bricks(tuning: &Tuning) -> Vec<Brick> {
    let width = tuning.brick_width();
    let mut bricks = Vec::with_capacity(tuning.brick_rows * tuning.brick_cols);

    for row in 0..tuning.brick_rows {
        for col in 0..tuning.brick_cols {
            let max_hits = if row < tuning.tough_rows { 2 } else { 1 };
            bricks.push(Brick {
                rect: Rect::new(
                    tuning.brick_offset_left + col as f32 * (width + tuning.brick_padding),
                    tuning.brick_offset_top + row as f32 * (tuning.brick_height + tuning.brick_padding),
                    width,
                    tuning.brick_height,
                ),
                row,
                col,
                hits: 0,
                max_hits,
                tint: BrickTint::for_row(row),
            });
        }
    }

    bricks
}

/// Crosswind acting on the ball
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wind {
    /// Current lateral strength (signed)
    pub current: f32,
    /// Strength the current value is drifting toward
    pub target: f32,
    /// Seconds since the last target shift
    pub timer: f32,
}

impl Wind {
    /// Seconds until the next target shift
    pub fn time_to_shift(&self, period: f32) -> f32 {
        (period - self.timer).max(0.0)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Wind RNG
    pub rng: Pcg32,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Status text shown over the playfield (empty while playing)
    pub message: String,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks in grid order
    pub bricks: Vec<Brick>,
    pub wind: Wind,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let paddle = Paddle::new(&tuning);
        let ball = Ball::new(&tuning, &paddle);
        let bricks = build_bricks(&tuning);
        let lives = tuning.starting_lives;

        Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives,
            phase: GamePhase::Serve,
            message: messages::LAUNCH.to_string(),
            paddle,
            ball,
            bricks,
            wind: Wind::default(),
            events: Vec::new(),
        }
    }

    /// Reset score, lives, wind and bricks; back to serve
    ///
    /// The paddle stays where it is and the RNG keeps its stream.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.wind = Wind::default();
        self.bricks = build_bricks(&self.tuning);
        self.serve(messages::LAUNCH);
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted (seed {}, {} bricks)", self.seed, self.bricks.len());
    }

    /// Put the ball back on the paddle and wait for launch
    pub fn serve(&mut self, message: &str) {
        self.ball.vel = Vec2::ZERO;
        self.ball.rest_on(&self.paddle);
        self.phase = GamePhase::Serve;
        self.message = message.to_string();
    }

    pub fn launched(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Playing | GamePhase::Paused { launched: true }
        )
    }

    pub fn paused(&self) -> bool {
        matches!(self.phase, GamePhase::Paused { .. })
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn level_clear(&self) -> bool {
        self.phase == GamePhase::LevelClear
    }
}
