//! Collision detection between the ball and axis-aligned rectangles
//!
//! Discrete test only: overlap is checked at the end-of-step position, so a
//! fast ball can tunnel through a thin rectangle when `dt` is large. The
//! frame step is clamped upstream to keep that rare.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};

/// Which velocity component a rectangle hit should flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionSide {
    /// Ball struck a left/right edge; flip horizontal velocity
    Horizontal,
    /// Ball struck a top/bottom edge; flip vertical velocity
    Vertical,
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle center into the rectangle to find the nearest point,
/// then compares squared distances. Tangency counts as overlap.
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let closest = rect.closest_point(circle.center);
    circle.center.distance_squared(closest) <= circle.radius * circle.radius
}

/// Classify which side of `rect` a ball centered at `point` hit
///
/// Compares penetration (half extent minus offset from center) per axis and
/// picks the axis the point is least centered on. Equal penetration counts as
/// `Vertical`.
pub fn collision_side(point: Vec2, rect: &Rect) -> CollisionSide {
    let offset = point - rect.center();
    let penetration = rect.half_extents() - offset.abs();

    if penetration.x < penetration.y {
        CollisionSide::Horizontal
    } else {
        CollisionSide::Vertical
    }
}
