//! Easel Text - Text outlines for the Easel canvas
//!
//! This crate turns strings into renderable paths:
//! - Font loading and fallback resolution (fontdb)
//! - Text shaping (rustybuzz - HarfBuzz port)
//! - Glyph outlines converted to tiny-skia paths (ttf-parser)

pub mod font;
pub mod shaping;
pub mod render;
mod engine;

pub use font::{FontDatabase, FontId, FontStyle, FontWeight, FontQuery};
pub use shaping::{PlacedGlyph, ShapedRun, TextShaper};
pub use render::GlyphOutliner;
pub use engine::{TextEngine, TextLayout, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

/// Text error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Shaping failed: {0}")]
    ShapingFailed(String),

    #[error("Invalid font size: {0}")]
    InvalidSize(f32),
}

pub type Result<T> = std::result::Result<T, TextError>;
