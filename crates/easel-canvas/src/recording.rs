//! Recording rasterizer
//!
//! Logs every call it receives together with the transform, save depth and
//! clip state in effect, without touching pixels.

use tiny_skia::{Path, Transform};

use crate::color::Color;
use crate::compositing::BlendMode;
use crate::geometry::Size;
use crate::image::Image;
use crate::raster::{Rasterizer, TextRun};
use crate::style::StrokeStyle;
use crate::{CanvasError, Result};

/// Graphics state at the time of a recorded call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: Transform,
    /// Number of saved states below the current one
    pub depth: usize,
    pub clipped: bool,
    pub blend_mode: BlendMode,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            depth: 0,
            clipped: false,
            blend_mode: BlendMode::default(),
        }
    }
}

/// A rasterizer call
#[derive(Debug, Clone, PartialEq)]
pub enum RasterOp {
    FillPath { path: Path, color: Color, state: DrawState },
    StrokePath { path: Path, color: Color, style: StrokeStyle, state: DrawState },
    ClipPath { path: Path, state: DrawState },
    ResetClip,
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32),
    Save,
    Restore,
    SetBlendMode(BlendMode),
    Clear(Color),
    DrawText { run: TextRun, state: DrawState },
    DrawImage { width: u32, height: u32, state: DrawState },
}

impl RasterOp {
    /// State captured with the call, for drawing and clipping calls
    pub fn state(&self) -> Option<&DrawState> {
        match self {
            Self::FillPath { state, .. }
            | Self::StrokePath { state, .. }
            | Self::ClipPath { state, .. }
            | Self::DrawText { state, .. }
            | Self::DrawImage { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Path in surface coordinates, for path calls
    pub fn device_path(&self) -> Option<Path> {
        match self {
            Self::FillPath { path, state, .. }
            | Self::StrokePath { path, state, .. }
            | Self::ClipPath { path, state } => path.clone().transform(state.transform),
            _ => None,
        }
    }
}

/// Rasterizer that records calls instead of painting
#[derive(Debug, Clone)]
pub struct RecordingRasterizer {
    size: Size,
    current: DrawState,
    stack: Vec<DrawState>,
    ops: Vec<RasterOp>,
}

impl RecordingRasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width as f32, height as f32),
            current: DrawState::default(),
            stack: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[RasterOp] {
        &self.ops
    }

    /// Take the recorded calls, keeping the graphics state
    pub fn take_ops(&mut self) -> Vec<RasterOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn state(&self) -> &DrawState {
        &self.current
    }

    fn record(&mut self, op: RasterOp) {
        tracing::trace!("Recorded {:?}", op);
        self.ops.push(op);
    }
}

impl Rasterizer for RecordingRasterizer {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let state = self.current;
        self.record(RasterOp::FillPath { path: path.clone(), color, state });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, style: &StrokeStyle) {
        let state = self.current;
        self.record(RasterOp::StrokePath { path: path.clone(), color, style: *style, state });
    }

    fn clip_path(&mut self, path: &Path) {
        let state = self.current;
        self.record(RasterOp::ClipPath { path: path.clone(), state });
        self.current.clipped = true;
    }

    fn reset_clip(&mut self) {
        self.current.clipped = false;
        self.record(RasterOp::ResetClip);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current.transform = self.current.transform.pre_translate(dx, dy);
        self.record(RasterOp::Translate(dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.current.transform = self.current.transform.pre_scale(sx, sy);
        self.record(RasterOp::Scale(sx, sy));
    }

    fn rotate(&mut self, angle: f32) {
        self.current.transform = self.current.transform.pre_concat(Transform::from_rotate(angle.to_degrees()));
        self.record(RasterOp::Rotate(angle));
    }

    fn save(&mut self) {
        self.stack.push(self.current);
        self.current.depth = self.stack.len();
        self.record(RasterOp::Save);
    }

    fn restore(&mut self) -> Result<()> {
        self.current = self.stack.pop().ok_or(CanvasError::EmptySaveStack)?;
        self.record(RasterOp::Restore);
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.current.blend_mode = mode;
        self.record(RasterOp::SetBlendMode(mode));
    }

    fn clear(&mut self, color: Color) {
        self.record(RasterOp::Clear(color));
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        let state = self.current;
        self.record(RasterOp::DrawText { run: run.clone(), state });
        Ok(())
    }

    fn draw_image(&mut self, image: &Image) {
        let state = self.current;
        self.record(RasterOp::DrawImage { width: image.width(), height: image.height(), state });
    }

    fn snapshot(&self) -> Option<Image> {
        None
    }
}
