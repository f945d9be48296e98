//! Glyph outlines as tiny-skia paths

use ttf_parser::OutlineBuilder;

/// Outline builder that appends ttf-parser glyph contours to a tiny-skia path.
///
/// Font units are scaled to pixels and the y axis is flipped so the glyph
/// baseline sits at `origin_y`.
pub struct GlyphOutliner<'a> {
    builder: &'a mut tiny_skia::PathBuilder,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl<'a> GlyphOutliner<'a> {
    pub fn new(builder: &'a mut tiny_skia::PathBuilder, scale: f32, origin_x: f32, origin_y: f32) -> Self {
        Self { builder, scale, origin_x, origin_y }
    }

    /// Font units (y up) to pixels (y down)
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }
}

impl OutlineBuilder for GlyphOutliner<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (cx, cy) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(cx, cy, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1x, c1y) = self.map(x1, y1);
        let (c2x, c2y) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_is_scaled_and_flipped() {
        let mut builder = tiny_skia::PathBuilder::new();
        {
            // A 20x20 unit square sitting on the baseline
            let mut outliner = GlyphOutliner::new(&mut builder, 0.5, 5.0, 20.0);
            outliner.move_to(0.0, 0.0);
            outliner.line_to(20.0, 0.0);
            outliner.line_to(20.0, 20.0);
            outliner.line_to(0.0, 20.0);
            outliner.close();
        }
        let path = builder.finish().unwrap();
        let bounds = path.bounds();

        assert_eq!(bounds.left(), 5.0);
        assert_eq!(bounds.right(), 15.0);
        assert_eq!(bounds.top(), 10.0);
        assert_eq!(bounds.bottom(), 20.0);
    }

    #[test]
    fn test_contours_from_several_glyphs_share_one_path() {
        let mut builder = tiny_skia::PathBuilder::new();
        for origin_x in [0.0, 10.0] {
            let mut outliner = GlyphOutliner::new(&mut builder, 1.0, origin_x, 8.0);
            outliner.move_to(0.0, 0.0);
            outliner.quad_to(2.0, 4.0, 4.0, 0.0);
            outliner.close();
        }
        let path = builder.finish().unwrap();
        assert_eq!(path.bounds().right(), 14.0);
    }
}
