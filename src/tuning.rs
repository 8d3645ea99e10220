//! Data-driven game balance
//!
//! [`Tuning`] mirrors every constant in [`crate::consts`]. The browser build
//! reads an optional JSON override from the canvas `data-tuning` attribute;
//! missing keys fall back to the compile-time defaults, so a minimal override
//! like `{"wind_gain": 20}` only changes what it names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected tuning override
#[derive(Debug)]
pub enum TuningError {
    /// The override was not valid JSON for [`Tuning`]
    Parse(String),
    /// A value is outside the range the simulation can handle
    OutOfRange {
        /// Field name (as written in JSON)
        field: &'static str,
        /// The value that was rejected
        value: f32,
        /// Human-readable description of the accepted range
        expected: &'static str,
    },
    /// The brick grid is wider than the playfield
    GridTooWide { needed: f32, available: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            TuningError::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "tuning '{field}' = {value} is outside {expected}"),
            TuningError::GridTooWide { needed, available } => write!(
                f,
                "brick grid margins and padding need {needed}px but the field is {available}px wide"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e.to_string())
    }
}

/// Runtime-tunable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Field
    pub field_width: f32,
    pub field_height: f32,
    pub field_margin: f32,
    pub max_frame_dt: f32,

    // Paddle
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,

    // Ball
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_rest_gap: f32,
    pub ball_bounce_gap: f32,
    pub speed_bonus_max: f32,
    pub speed_bonus_score_divisor: f32,

    // Bricks
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
    pub brick_height: f32,
    pub tough_rows: usize,
    pub points_per_toughness: u64,

    // Wind
    pub wind_period: f32,
    pub wind_approach_rate: f32,
    pub wind_gain: f32,
    pub wind_min_magnitude: f32,
    pub wind_max_magnitude: f32,

    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            field_margin: FIELD_MARGIN,
            max_frame_dt: MAX_FRAME_DT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_rest_gap: BALL_REST_GAP,
            ball_bounce_gap: BALL_BOUNCE_GAP,
            speed_bonus_max: SPEED_BONUS_MAX,
            speed_bonus_score_divisor: SPEED_BONUS_SCORE_DIVISOR,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
            brick_height: BRICK_HEIGHT,
            tough_rows: TOUGH_ROWS,
            points_per_toughness: POINTS_PER_TOUGHNESS,

            wind_period: WIND_PERIOD,
            wind_approach_rate: WIND_APPROACH_RATE,
            wind_gain: WIND_GAIN,
            wind_min_magnitude: WIND_MIN_MAGNITUDE,
            wind_max_magnitude: WIND_MAX_MAGNITUDE,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Apply an optional override, keeping the defaults when it is rejected
    pub fn from_override(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            None => Self::default(),
            Some(Ok(tuning)) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {e}");
                Self::default()
            }
        }
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("max_frame_dt", self.max_frame_dt),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
            ("speed_bonus_score_divisor", self.speed_bonus_score_divisor),
            ("brick_height", self.brick_height),
            ("wind_period", self.wind_period),
            ("wind_approach_rate", self.wind_approach_rate),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::OutOfRange {
                    field,
                    value,
                    expected: "(0, inf)",
                });
            }
        }

        let non_negative = [
            ("field_margin", self.field_margin),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("ball_rest_gap", self.ball_rest_gap),
            ("ball_bounce_gap", self.ball_bounce_gap),
            ("speed_bonus_max", self.speed_bonus_max),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
            ("wind_gain", self.wind_gain),
            ("wind_min_magnitude", self.wind_min_magnitude),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::OutOfRange {
                    field,
                    value,
                    expected: "[0, inf)",
                });
            }
        }

        if !self.wind_max_magnitude.is_finite()
            || self.wind_max_magnitude <= self.wind_min_magnitude
        {
            return Err(TuningError::OutOfRange {
                field: "wind_max_magnitude",
                value: self.wind_max_magnitude,
                expected: "(wind_min_magnitude, inf)",
            });
        }

        if self.brick_rows == 0 {
            return Err(TuningError::OutOfRange {
                field: "brick_rows",
                value: 0.0,
                expected: "[1, inf)",
            });
        }
        if self.brick_cols == 0 {
            return Err(TuningError::OutOfRange {
                field: "brick_cols",
                value: 0.0,
                expected: "[1, inf)",
            });
        }
        if self.starting_lives == 0 {
            return Err(TuningError::OutOfRange {
                field: "starting_lives",
                value: 0.0,
                expected: "[1, inf)",
            });
        }

        if self.paddle_width + 2.0 * self.field_margin > self.field_width {
            return Err(TuningError::OutOfRange {
                field: "paddle_width",
                value: self.paddle_width,
                expected: "(0, field_width - 2 * field_margin]",
            });
        }

        let needed = 2.0 * self.brick_offset_left
            + self.brick_padding * (self.brick_cols - 1) as f32;
        if self.brick_width() <= 0.0 {
            return Err(TuningError::GridTooWide {
                needed,
                available: self.field_width,
            });
        }

        Ok(())
    }

    /// Width of a single brick, derived from the field width and grid layout
    pub fn brick_width(&self) -> f32 {
        let cols = self.brick_cols.max(1) as f32;
        (self.field_width - self.brick_offset_left * 2.0 - self.brick_padding * (cols - 1.0)) / cols
    }

    /// Paddle x that leaves it centered in the field
    pub fn paddle_start_x(&self) -> f32 {
        self.field_width / 2.0 - self.paddle_width / 2.0
    }

    /// Paddle top edge
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_offset
    }

    /// Ball speed after a paddle bounce at the given score
    pub fn bounce_speed(&self, score: u64) -> f32 {
        self.ball_base_speed + (score as f32 / self.speed_bonus_score_divisor).min(self.speed_bonus_max)
    }
}
