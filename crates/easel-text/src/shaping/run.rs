//! Shaped runs in pixel space

use ttf_parser::GlyphId;

/// One glyph placed on the line.
///
/// `x` is measured from the start of the run; `y` is the offset from the
/// baseline with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub id: GlyphId,
    pub x: f32,
    pub y: f32,
    /// Byte index of the first character this glyph came from
    pub cluster: u32,
}

/// A single line of shaped glyphs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedRun {
    glyphs: Vec<PlacedGlyph>,
    advance: f32,
    scale: f32,
}

impl ShapedRun {
    /// Start an empty run; `scale` converts font units to pixels
    pub fn new(scale: f32) -> Self {
        Self {
            glyphs: Vec::new(),
            advance: 0.0,
            scale,
        }
    }

    /// Append a glyph given in font units (y up), advancing the pen
    pub fn push(&mut self, id: GlyphId, cluster: u32, offset: (i32, i32), advance: i32) {
        self.glyphs.push(PlacedGlyph {
            id,
            x: self.advance + offset.0 as f32 * self.scale,
            y: -(offset.1 as f32) * self.scale,
            cluster,
        });
        self.advance += advance as f32 * self.scale;
    }

    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    /// Pen position after the last glyph, in pixels
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Pixels per font unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
