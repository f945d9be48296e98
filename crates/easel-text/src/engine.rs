//! Text engine - string to glyph path

use tiny_skia::PathBuilder;

use crate::font::{FontDatabase, FontId};
use crate::render::GlyphOutliner;
use crate::shaping::TextShaper;
use crate::{Result, TextError};

/// Family used when no font was requested or the requested one is missing
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Size used when no text size was set
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// A laid out line of text.
///
/// The path is in pixels relative to the top-left of the line box: the
/// baseline sits at `y = ascent`.
#[derive(Debug, Clone)]
pub struct TextLayout {
    /// Glyph outlines, `None` when nothing is visible (empty string, spaces)
    pub path: Option<tiny_skia::Path>,
    /// Advance width in pixels
    pub width: f32,
    /// Distance from the top of the line box to the baseline
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box
    pub descent: f32,
    /// Face the text was laid out with
    pub font: FontId,
}

/// Font database plus shaper
pub struct TextEngine {
    fonts: FontDatabase,
    shaper: TextShaper,
}

impl TextEngine {
    pub fn new(fonts: FontDatabase) -> Self {
        Self {
            fonts,
            shaper: TextShaper::new(),
        }
    }

    /// Engine backed by the fonts installed on this system
    pub fn with_system_fonts() -> Self {
        Self::new(FontDatabase::with_system_fonts())
    }

    pub fn fonts(&self) -> &FontDatabase {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontDatabase {
        &mut self.fonts
    }

    /// Replace the shaper, e.g. to toggle OpenType features
    pub fn with_shaper(mut self, shaper: TextShaper) -> Self {
        self.shaper = shaper;
        self
    }

    /// Shape and outline a single line of text
    pub fn layout(&self, text: &str, family: Option<&str>, size: f32) -> Result<TextLayout> {
        if !size.is_finite() || size <= 0.0 {
            return Err(TextError::InvalidSize(size));
        }

        let font = self.fonts.resolve(family)?;
        self.fonts
            .with_face_data(font, |data, index| self.layout_face(data, index, font, text, size))
            .ok_or_else(|| TextError::FontNotFound(format!("{:?}", font)))?
    }

    fn layout_face(
        &self,
        data: &[u8],
        index: u32,
        font: FontId,
        text: &str,
        size: f32,
    ) -> Result<TextLayout> {
        let face = rustybuzz::Face::from_slice(data, index)
            .ok_or_else(|| TextError::FontParsing(format!("face {} of {:?}", index, font)))?;
        let run = self.shaper.shape(&face, text, size);

        let scale = run.scale();
        let ascent = face.ascender() as f32 * scale;
        let descent = -(face.descender() as f32) * scale;

        let mut builder = PathBuilder::new();
        for glyph in run.glyphs() {
            let mut outliner = GlyphOutliner::new(&mut builder, scale, glyph.x, ascent + glyph.y);
            // Glyphs without contours (spaces) yield None
            let _ = face.outline_glyph(glyph.id, &mut outliner);
        }

        tracing::trace!("Laid out {:?}: {} glyphs, {:.1}px wide", text, run.len(), run.advance());

        Ok(TextLayout {
            path: builder.finish(),
            width: run.advance(),
            ascent,
            descent,
            font,
        })
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new(FontDatabase::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_is_rejected() {
        let engine = TextEngine::default();
        assert!(matches!(engine.layout("hi", None, 0.0), Err(TextError::InvalidSize(_))));
        assert!(matches!(engine.layout("hi", None, f32::NAN), Err(TextError::InvalidSize(_))));
    }

    #[test]
    fn test_empty_engine_has_no_fonts() {
        let engine = TextEngine::default();
        assert!(matches!(engine.layout("hi", None, 12.0), Err(TextError::FontNotFound(_))));
    }
}
