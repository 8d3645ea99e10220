//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (wind sampling takes its random source as a parameter)
//! - Stable iteration order (bricks kept in grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod dynamics;
pub mod geometry;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionSide, circle_rect_overlap, collision_side};
pub use dynamics::{approach, reflect_from_paddle, sample_wind, sample_wind_in};
pub use geometry::{Circle, Rect, clamp};
pub use snapshot::{BrickView, Snapshot};
pub use state::{
    Ball, Brick, BrickTint, GameEvent, GamePhase, GameState, Paddle, Wind, build_bricks,
};
pub use tick::{TickInput, tick};
