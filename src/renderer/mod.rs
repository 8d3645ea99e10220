//! Canvas 2D rendering module
//!
//! `shapes` builds a backend-independent draw list; `canvas` replays it on
//! a `CanvasRenderingContext2d` in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Shape, TextAlign, frame};
