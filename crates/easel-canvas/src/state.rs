//! Canvas state
//!
//! Style and shape state that survives between frames. Only the dispatcher
//! mutates it, while replaying commands.

use tiny_skia::Path;

use crate::color::Color;
use crate::compositing::BlendMode;
use crate::config::CanvasConfig;
use crate::geometry::Point;
use crate::path_builder::{PathBuilder, ShapeMode};
use crate::raster::{GlyphPaint, Rasterizer};
use crate::style::{StrokeCap, StrokeJoin, StrokeStyle};
use crate::{CanvasError, Result};

/// Persistent drawing state
#[derive(Debug, Clone)]
pub struct CanvasState {
    fill: Color,
    stroke: Color,
    stroke_style: StrokeStyle,
    blend_mode: BlendMode,
    /// Blend modes saved by push, mirroring the rasterizer save stack
    saved_blend_modes: Vec<BlendMode>,
    background: Color,
    text_size: f32,
    text_font: Option<String>,
    curve_tightness: f32,
    /// Most recently rasterized path, the source of the next clip
    last_path: Option<Path>,
    ongoing: PathBuilder,
}

impl CanvasState {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            fill: config.fill,
            stroke: config.stroke,
            stroke_style: StrokeStyle {
                width: config.stroke_weight,
                cap: config.stroke_cap,
                join: config.stroke_join,
            },
            blend_mode: BlendMode::default(),
            saved_blend_modes: Vec::new(),
            background: config.background,
            text_size: config.text_size,
            text_font: config.text_font.clone(),
            curve_tightness: config.curve_tightness,
            last_path: None,
            ongoing: PathBuilder::new(config.curve_tightness),
        }
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Color {
        self.stroke
    }

    pub fn stroke_style(&self) -> &StrokeStyle {
        &self.stroke_style
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn text_font(&self) -> Option<&str> {
        self.text_font.as_deref()
    }

    pub fn curve_tightness(&self) -> f32 {
        self.curve_tightness
    }

    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_ref()
    }

    pub fn ongoing(&self) -> &PathBuilder {
        &self.ongoing
    }

    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    pub fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_style.width = weight;
    }

    pub fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.stroke_style.cap = cap;
    }

    pub fn set_stroke_join(&mut self, join: StrokeJoin) {
        self.stroke_style.join = join;
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    pub fn save(&mut self) {
        self.saved_blend_modes.push(self.blend_mode);
    }

    /// Back to the blend mode active at the matching `save`
    pub fn restore(&mut self) {
        if let Some(mode) = self.saved_blend_modes.pop() {
            self.blend_mode = mode;
        }
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Rejects sizes that are not finite and positive, keeping the old one
    pub fn set_text_size(&mut self, size: f32) -> Result<()> {
        if !size.is_finite() || size <= 0.0 {
            return Err(CanvasError::InvalidTextSize(size));
        }
        self.text_size = size;
        Ok(())
    }

    pub fn set_text_font(&mut self, family: impl Into<String>) {
        self.text_font = Some(family.into());
    }

    /// Also applies to the shape being built
    pub fn set_curve_tightness(&mut self, tightness: f32) {
        self.curve_tightness = tightness;
        self.ongoing.set_tightness(tightness);
    }

    /// Fill then stroke `path` with the current colors. Clear colors skip
    /// their half. The path becomes the clip source either way.
    pub fn stroke_or_fill<R: Rasterizer + ?Sized>(&mut self, raster: &mut R, path: Path) {
        if self.fill.is_visible() {
            raster.fill_path(&path, self.fill);
        }
        if self.stroke.is_visible() {
            raster.stroke_path(&path, self.stroke, &self.stroke_style);
        }
        self.last_path = Some(path);
    }

    /// Clip to the last drawn path and forget it
    pub fn clip<R: Rasterizer + ?Sized>(&mut self, raster: &mut R) -> Result<()> {
        let path = self.last_path.take().ok_or(CanvasError::NoPathToClip)?;
        raster.clip_path(&path);
        Ok(())
    }

    /// Start a new shape. A shape already in progress is discarded and
    /// reported.
    pub fn begin_shape(&mut self) -> Result<()> {
        let discarded = self.ongoing.len();
        self.ongoing.begin();
        self.ongoing.set_tightness(self.curve_tightness);
        if discarded > 0 {
            return Err(CanvasError::ShapeAlreadyStarted(discarded));
        }
        Ok(())
    }

    pub fn vertex(&mut self, point: Point) {
        self.ongoing.add_vertex(point);
    }

    pub fn curve_vertex(&mut self, point: Point) {
        self.ongoing.add_curve_vertex(point);
    }

    /// Finish the ongoing shape and reset it
    pub fn end_shape(&mut self, mode: ShapeMode) -> Option<Path> {
        let path = self.ongoing.end(mode);
        self.ongoing.begin();
        path
    }

    /// Glyph paint for the current fill, stroke and weight
    pub fn glyph_paint(&self) -> GlyphPaint {
        GlyphPaint::new(self.fill, self.stroke, self.stroke_style.width)
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rectangle, ToPath};
    use crate::recording::{RasterOp, RecordingRasterizer};

    fn square() -> Path {
        Rectangle::new(0.0, 0.0, 10.0, 10.0).to_path().unwrap()
    }

    #[test]
    fn test_clear_fill_only_strokes() {
        let mut state = CanvasState::default();
        let mut raster = RecordingRasterizer::new(100, 100);
        state.set_fill(Color::CLEAR);
        state.stroke_or_fill(&mut raster, square());

        assert_eq!(raster.ops().len(), 1);
        assert!(matches!(raster.ops()[0], RasterOp::StrokePath { .. }));
        assert!(state.last_path().is_some());
    }

    #[test]
    fn test_clip_consumes_last_path() {
        let mut state = CanvasState::default();
        let mut raster = RecordingRasterizer::new(100, 100);

        assert!(matches!(state.clip(&mut raster), Err(CanvasError::NoPathToClip)));

        state.stroke_or_fill(&mut raster, square());
        assert!(state.clip(&mut raster).is_ok());
        assert!(matches!(state.clip(&mut raster), Err(CanvasError::NoPathToClip)));
    }

    #[test]
    fn test_nested_begin_shape_discards() {
        let mut state = CanvasState::default();
        assert!(state.begin_shape().is_ok());
        state.vertex(Point::new(1.0, 1.0));
        state.vertex(Point::new(2.0, 2.0));

        assert!(matches!(state.begin_shape(), Err(CanvasError::ShapeAlreadyStarted(2))));
        assert!(state.ongoing().is_empty());
    }

    #[test]
    fn test_end_shape_resets() {
        let mut state = CanvasState::default();
        state.vertex(Point::new(0.0, 0.0));
        state.vertex(Point::new(5.0, 5.0));
        assert!(state.end_shape(ShapeMode::Open).is_some());
        assert!(state.ongoing().is_empty());
        assert!(state.end_shape(ShapeMode::Open).is_none());
    }

    #[test]
    fn test_tightness_reaches_ongoing_shape() {
        let mut state = CanvasState::default();
        state.vertex(Point::ZERO);
        state.set_curve_tightness(0.75);
        assert_eq!(state.ongoing().tightness(), 0.75);
    }

    #[test]
    fn test_restore_brings_back_blend_mode() {
        let mut state = CanvasState::default();
        state.save();
        state.set_blend_mode(BlendMode::Screen);
        state.restore();
        assert_eq!(state.blend_mode(), BlendMode::SourceOver);

        state.restore();
        assert_eq!(state.blend_mode(), BlendMode::SourceOver);
    }

    #[test]
    fn test_invalid_text_size_is_kept_out() {
        let mut state = CanvasState::default();
        assert!(state.set_text_size(-1.0).is_err());
        assert_eq!(state.text_size(), easel_text::DEFAULT_FONT_SIZE);
        assert!(state.set_text_size(30.0).is_ok());
        assert_eq!(state.text_size(), 30.0);
    }
}
