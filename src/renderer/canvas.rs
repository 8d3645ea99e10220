//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::Shape;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Replay a draw list
    pub fn draw(&self, shapes: &[Shape]) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        for shape in shapes {
            match shape {
                Shape::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                Shape::FillRect { rect, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                }
                Shape::StrokeRect { rect, color } => {
                    ctx.set_stroke_style_str(color);
                    ctx.stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.set_fill_style_str(color);
                    ctx.fill();
                }
                Shape::Text {
                    text,
                    pos,
                    font,
                    color,
                    align,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    ctx.set_text_align(align.as_str());
                    ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }

        ctx.set_text_align("left");
        Ok(())
    }
}
