//! Draw-list generation for a frame
//!
//! Turns a [`Snapshot`] into a flat list of 2D primitives. The canvas
//! backend just replays the list, so layout can be tested without a browser.

use glam::Vec2;

use crate::hud::HudText;
use crate::sim::{Rect, Snapshot};

pub const BACKGROUND: &str = "#0a0f18";
pub const FIELD: &str = "#111c2c";
pub const PADDLE: &str = "#f0f6fc";
pub const BALL: &str = "#58a6ff";
pub const BRICK_OUTLINE: &str = "rgba(255,255,255,0.2)";
pub const BANNER_TEXT: &str = "rgba(255,255,255,0.7)";
pub const MESSAGE_BAND: &str = "rgba(0,0,0,0.55)";
pub const MESSAGE_TEXT: &str = "#f0f6fc";

pub const BANNER_FONT: &str = "16px 'Segoe UI', sans-serif";
pub const MESSAGE_FONT: &str = "20px 'Segoe UI', sans-serif";

/// Height of the band behind the status message
const MESSAGE_BAND_HEIGHT: f32 = 84.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A single 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: &'static str },
    StrokeRect { rect: Rect, color: &'static str },
    Circle { center: Vec2, radius: f32, color: &'static str },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: &'static str,
        align: TextAlign,
    },
}

/// Build the draw list for one frame, back to front
pub fn frame(snap: &Snapshot, hud: &HudText) -> Vec<Shape> {
    let (w, h, margin) = (snap.field_width, snap.field_height, snap.field_margin);
    let mut shapes = Vec::with_capacity(snap.bricks.len() * 2 + 8);

    shapes.push(Shape::Clear {
        width: w,
        height: h,
    });
    shapes.push(Shape::FillRect {
        rect: Rect::new(0.0, 0.0, w, h),
        color: BACKGROUND,
    });
    shapes.push(Shape::FillRect {
        rect: Rect::new(margin, margin, w - margin * 2.0, h - margin * 2.0),
        color: FIELD,
    });

    shapes.push(Shape::FillRect {
        rect: snap.paddle,
        color: PADDLE,
    });
    shapes.push(Shape::Circle {
        center: snap.ball.center,
        radius: snap.ball.radius,
        color: BALL,
    });

    for brick in &snap.bricks {
        shapes.push(Shape::FillRect {
            rect: brick.rect,
            color: brick.color,
        });
        shapes.push(Shape::StrokeRect {
            rect: brick.rect,
            color: BRICK_OUTLINE,
        });
    }

    shapes.push(Shape::Text {
        text: hud.wind_banner.clone(),
        pos: Vec2::new(32.0, h - 20.0),
        font: BANNER_FONT,
        color: BANNER_TEXT,
        align: TextAlign::Left,
    });

    if let Some(message) = &hud.message {
        shapes.push(Shape::FillRect {
            rect: message_band(w, h),
            color: MESSAGE_BAND,
        });
        shapes.push(Shape::Text {
            text: message.clone(),
            pos: Vec2::new(w / 2.0, h / 2.0 + 8.0),
            font: MESSAGE_FONT,
            color: MESSAGE_TEXT,
            align: TextAlign::Center,
        });
    }

    shapes
}

/// Full-width band centered vertically behind the status message
pub fn message_band(width: f32, height: f32) -> Rect {
    Rect::new(
        0.0,
        height / 2.0 - MESSAGE_BAND_HEIGHT / 2.0,
        width,
        MESSAGE_BAND_HEIGHT,
    )
}
