//! Easel Sketch
//!
//! Write a [`Sketch`], hand it to a frame driver:
//! - [`Runner`] steps frames headlessly (tests, offline rendering)
//! - [`run_windowed`] opens a window and presents every frame

pub mod config;
mod context;
mod runner;
#[cfg(feature = "window")]
mod window;

pub use config::SketchConfig;
pub use context::SketchContext;
pub use runner::Runner;
#[cfg(feature = "window")]
pub use window::run_windowed;

pub use easel_canvas::{
    Arc, ArcMode, BlendMode, Color, CubicBezier, Ellipse, Graphics, Image, ImageSource,
    LineSegment, Point, Polygon, QuadraticBezier, Rectangle, ShapeMode, Size, StrokeCap,
    StrokeJoin,
};

/// A program drawn frame by frame
pub trait Sketch {
    /// Called once before the first frame
    fn setup(&mut self, _g: &mut SketchContext) {}

    /// Called once per frame
    fn draw(&mut self, g: &mut SketchContext);
}

/// Sketch error
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    #[error("Canvas error: {0}")]
    Canvas(#[from] easel_canvas::CanvasError),

    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, SketchError>;
