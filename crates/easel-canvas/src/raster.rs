//! Rasterizer surface
//!
//! The replay target of a canvas. [`crate::SkiaRasterizer`] paints pixels,
//! [`crate::RecordingRasterizer`] only logs what it was asked to do.

use tiny_skia::Path;

use crate::color::Color;
use crate::compositing::BlendMode;
use crate::geometry::{Point, Size};
use crate::image::Image;
use crate::style::StrokeStyle;
use crate::Result;

/// Drawing surface a canvas replays its commands against.
///
/// Transforms compose with the current transform. `save` pushes the
/// transform, clip and blend mode; `restore` pops them.
pub trait Rasterizer {
    fn size(&self) -> Size;

    fn fill_path(&mut self, path: &Path, color: Color);
    fn stroke_path(&mut self, path: &Path, color: Color, style: &StrokeStyle);

    /// Intersect the active clip with `path` (in current coordinates)
    fn clip_path(&mut self, path: &Path);
    /// Remove any clip
    fn reset_clip(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    /// Rotate clockwise by `angle` radians
    fn rotate(&mut self, angle: f32);

    fn save(&mut self);
    /// Errors with [`crate::CanvasError::EmptySaveStack`] and changes nothing
    /// when there is no saved state
    fn restore(&mut self) -> Result<()>;

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Fill the whole surface, ignoring transform and clip
    fn clear(&mut self, color: Color);

    fn draw_text(&mut self, run: &TextRun) -> Result<()>;

    /// Composite an image with its top-left at the current origin
    fn draw_image(&mut self, image: &Image);

    fn snapshot(&self) -> Option<Image>;
}

/// How glyph outlines are painted.
///
/// Follows the usual outline-text convention: a negative `stroke_width`
/// means "fill and stroke" with the absolute width, a positive one means
/// stroke only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPaint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl GlyphPaint {
    /// Paint for the given fill/stroke colors; clear colors are dropped
    pub fn new(fill: Color, stroke: Color, weight: f32) -> Self {
        let fill = fill.is_visible().then_some(fill);
        let stroke = stroke.is_visible().then_some(stroke);
        let stroke_width = match (fill, stroke) {
            (Some(_), Some(_)) => -weight.abs(),
            (None, Some(_)) => weight.abs(),
            _ => 0.0,
        };
        Self { fill, stroke, stroke_width }
    }

    /// Whether this paint draws anything
    pub fn is_visible(&self) -> bool {
        self.fill.is_some() || self.stroke.is_some()
    }

    /// Stroke color and absolute width, if stroking
    pub fn stroke(&self) -> Option<(Color, f32)> {
        self.stroke.map(|color| (color, self.stroke_width.abs()))
    }
}

/// A line of text ready to rasterize
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    /// Top-left of the line box
    pub origin: Point,
    /// `None` uses the default family
    pub family: Option<String>,
    pub size: f32,
    pub paint: GlyphPaint,
}
