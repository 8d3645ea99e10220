//! Axis-aligned geometry for the playfield
//!
//! Screen coordinates: origin at the top-left, y grows downward.
//! Rectangles are stored by their top-left corner and size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Restrict `value` to `[min, max]`
///
/// Unlike [`f32::clamp`] this never panics; callers are expected to pass
/// `min <= max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// A circle (the ball)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle (paddle or brick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.w / 2.0, self.h / 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.half_extents()
    }

    /// Closest point inside (or on the boundary of) the rectangle
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.x, self.right()),
            clamp(p.y, self.y, self.bottom()),
        )
    }
}
