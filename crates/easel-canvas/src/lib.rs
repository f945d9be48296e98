//! Easel Canvas - Deferred 2D drawing
//!
//! Drawing calls made through [`Graphics`] are recorded as [`Command`]s and
//! replayed against a [`Rasterizer`] once per frame by [`Canvas::dispatch`].
//!
//! Features:
//! - Geometry primitives convertible to tiny-skia paths
//! - Shape builder with Catmull-Rom curve vertices
//! - Persistent canvas state (styles, clip source, ongoing shape)
//! - tiny-skia rasterizer with save stack, clipping and text
//! - Recording rasterizer for inspecting replay order

pub mod color;
pub mod geometry;
pub mod compositing;
pub mod style;
pub mod path_builder;
pub mod state;
pub mod command;
pub mod raster;
pub mod image;
pub mod skia;
pub mod recording;
pub mod config;
mod canvas;
mod graphics;

pub use color::Color;
pub use geometry::{
    Arc, ArcMode, CubicBezier, Ellipse, LineSegment, Point, Polygon,
    QuadraticBezier, Rectangle, Size, ToPath,
};
pub use compositing::BlendMode;
pub use style::{StrokeCap, StrokeJoin, StrokeStyle};
pub use path_builder::{PathBuilder, ShapeMode, Vertex, VertexKind};
pub use state::CanvasState;
pub use command::{Command, CommandQueue};
pub use raster::{GlyphPaint, Rasterizer, TextRun};
pub use image::{Image, ImageSource};
pub use skia::SkiaRasterizer;
pub use recording::{RasterOp, RecordingRasterizer};
pub use config::CanvasConfig;
pub use canvas::Canvas;
pub use graphics::Graphics;

/// Canvas error
///
/// Apart from construction failures these are reported during dispatch and
/// never abort it; see [`Canvas::diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("No path to clip")]
    NoPathToClip,

    #[error("Shape already started, discarded {0} vertices")]
    ShapeAlreadyStarted(usize),

    #[error("Pop without matching push")]
    EmptySaveStack,

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Invalid text size: {0}")]
    InvalidTextSize(f32),

    #[error("Image source has no pixels")]
    EmptyImage,

    #[error("Text error: {0}")]
    Text(#[from] easel_text::TextError),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
