//! Ball dynamics: paddle deflection and wind drift

use std::f32::consts::{FRAC_PI_3, PI};

use glam::Vec2;

use super::geometry::{Rect, clamp};
use crate::consts::{WIND_MAX_MAGNITUDE, WIND_MIN_MAGNITUDE};

/// Compute the ball velocity after bouncing off the paddle
///
/// The contact position along the paddle maps linearly to an exit angle
/// between -60° and +60° from straight up. The result always points upward
/// for positive `speed`.
pub fn reflect_from_paddle(ball_pos: Vec2, paddle: &Rect, speed: f32) -> Vec2 {
    let relative = clamp((ball_pos.x - paddle.x) / paddle.w, 0.0, 1.0);
    let angle = -FRAC_PI_3 + relative * (2.0 * PI / 3.0);
    Vec2::new(angle.sin() * speed, -angle.cos() * speed)
}

/// Sample a new wind target using the default magnitude range
///
/// `draw` must yield uniform samples in `[0, 1)`. The first sample picks the
/// direction, the second the magnitude.
pub fn sample_wind(draw: impl FnMut() -> f32) -> f32 {
    sample_wind_in(draw, WIND_MIN_MAGNITUDE, WIND_MAX_MAGNITUDE)
}

/// Sample a wind target with magnitude in `[min_magnitude, max_magnitude)`
pub fn sample_wind_in(mut draw: impl FnMut() -> f32, min_magnitude: f32, max_magnitude: f32) -> f32 {
    let direction = if draw() > 0.5 { 1.0 } else { -1.0 };
    let magnitude = min_magnitude + draw() * (max_magnitude - min_magnitude);
    direction * magnitude
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
#[inline]
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    if current < target {
        (current + max_delta).min(target)
    } else {
        (current - max_delta).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 10.0)
    }

    #[test]
    fn test_reflect_center_goes_straight_up() {
        let vel = reflect_from_paddle(Vec2::new(50.0, 0.0), &paddle(), 10.0);
        assert!(vel.y < 0.0);
        assert!(vel.x.abs() < 1e-4);
        assert!((vel.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_edges_angle_outward() {
        let left = reflect_from_paddle(Vec2::new(0.0, 0.0), &paddle(), 10.0);
        let right = reflect_from_paddle(Vec2::new(100.0, 0.0), &paddle(), 10.0);
        assert!(left.x < 0.0 && left.y < 0.0);
        assert!(right.x > 0.0 && right.y < 0.0);
        // 60 degrees from vertical
        assert!((right.x - 10.0 * (PI / 3.0).sin()).abs() < 1e-4);
        assert!((right.y + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_clamps_beyond_paddle() {
        let far_right = reflect_from_paddle(Vec2::new(500.0, 0.0), &paddle(), 10.0);
        let edge = reflect_from_paddle(Vec2::new(100.0, 0.0), &paddle(), 10.0);
        assert_eq!(far_right, edge);
    }

    #[test]
    fn test_wind_direction_follows_draw() {
        assert!(sample_wind(|| 0.9) > 0.0);
        assert!(sample_wind(|| 0.1) < 0.0);
        // Threshold is strict
        assert!(sample_wind(|| 0.5) < 0.0);
    }

    #[test]
    fn test_wind_draw_order() {
        let mut draws = [0.9, 0.0].into_iter();
        let wind = sample_wind(|| draws.next().unwrap_or(0.0));
        assert!((wind - WIND_MIN_MAGNITUDE).abs() < 1e-6);
    }

    #[test]
    fn test_approach_steps() {
        assert!((approach(0.0, 1.0, 0.3) - 0.3).abs() < 1e-6);
        assert!((approach(1.0, 0.0, 0.2) - 0.8).abs() < 1e-6);
        assert_eq!(approach(0.9, 1.0, 0.3), 1.0);
        assert_eq!(approach(-0.9, -1.0, 0.3), -1.0);
        assert_eq!(approach(2.0, 2.0, 0.3), 2.0);
    }

    #[test]
    fn test_approach_converges_exactly() {
        let mut wind = 0.0;
        for _ in 0..10 {
            wind = approach(wind, 1.0, 0.3);
        }
        assert_eq!(wind, 1.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reflect_always_upward(x in -200f32..300.0, speed in 0.1f32..1000.0) {
                let vel = reflect_from_paddle(Vec2::new(x, 0.0), &paddle(), speed);
                prop_assert!(vel.y < 0.0);
            }

            #[test]
            fn wind_magnitude_in_range(a in 0f32..1.0, b in 0f32..0.999) {
                let mut draws = [a, b].into_iter();
                let wind = sample_wind(|| draws.next().unwrap_or(0.0));
                prop_assert!(wind.abs() >= WIND_MIN_MAGNITUDE);
                prop_assert!(wind.abs() < WIND_MAX_MAGNITUDE);
            }

            #[test]
            fn approach_never_overshoots(current in -10f32..10.0, target in -10f32..10.0, delta in 0f32..5.0) {
                let next = approach(current, target, delta);
                if current < target {
                    prop_assert!(next <= target && next >= current);
                } else {
                    prop_assert!(next >= target && next <= current);
                }
            }
        }
    }
}
