//! Glyph rendering module

mod outline;

pub use outline::GlyphOutliner;
