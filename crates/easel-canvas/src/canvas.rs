//! Canvas
//!
//! Owns the command queue, the persistent state and the rasterizer, and
//! replays the queue once per frame.

use crate::color::Color;
use crate::command::{Command, CommandQueue};
use crate::compositing::BlendMode;
use crate::config::CanvasConfig;
use crate::geometry::{Arc, CubicBezier, Ellipse, LineSegment, Point, Polygon, QuadraticBezier, Rectangle, Size, ToPath};
use crate::graphics::Graphics;
use crate::image::{Image, ImageSource};
use crate::path_builder::ShapeMode;
use crate::raster::{Rasterizer, TextRun};
use crate::skia::SkiaRasterizer;
use crate::state::CanvasState;
use crate::style::{StrokeCap, StrokeJoin};
use crate::{CanvasError, Result};

/// Deferred drawing canvas
pub struct Canvas<R: Rasterizer = SkiaRasterizer> {
    raster: R,
    state: CanvasState,
    queue: CommandQueue,
    frame_count: u64,
    /// Problems reported by the last dispatch
    diagnostics: Vec<CanvasError>,
}

impl Canvas<SkiaRasterizer> {
    /// Pixel canvas with the default style
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::from_config(&CanvasConfig::new(width, height))
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        let raster = SkiaRasterizer::from_config(config)?;
        Ok(Self::with_rasterizer(raster, config))
    }
}

impl<R: Rasterizer> Canvas<R> {
    /// Canvas replaying into `raster`; only the style half of `config` is used
    pub fn with_rasterizer(raster: R, config: &CanvasConfig) -> Self {
        Self {
            raster,
            state: CanvasState::new(config),
            queue: CommandQueue::new(),
            frame_count: 1,
            diagnostics: Vec::new(),
        }
    }

    pub fn rasterizer(&self) -> &R {
        &self.raster
    }

    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.raster
    }

    pub fn into_rasterizer(self) -> R {
        self.raster
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    /// Commands recorded since the last dispatch
    pub fn pending(&self) -> &[Command] {
        self.queue.as_slice()
    }

    /// Problems reported during the last dispatch
    pub fn diagnostics(&self) -> &[CanvasError] {
        &self.diagnostics
    }

    /// Record a command without going through [`Graphics`]
    pub fn submit(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Replay every pending command in order, then advance the frame counter.
    ///
    /// Problems are logged and collected in [`Self::diagnostics`]; they never
    /// stop the pass.
    pub fn dispatch(&mut self) {
        self.diagnostics.clear();
        let commands = self.queue.take();
        tracing::debug!("Dispatching frame {}: {} commands", self.frame_count, commands.len());

        for command in commands {
            let name = command.name();
            if let Err(e) = self.apply(command) {
                tracing::warn!("Frame {} {}: {}", self.frame_count, name, e);
                self.diagnostics.push(e);
            }
        }

        self.frame_count += 1;
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Line(line) => self.draw(&line),
            Command::Rectangle(rect) => self.draw(&rect),
            Command::Ellipse(ellipse) => self.draw(&ellipse),
            Command::Arc(arc) => self.draw(&arc),
            Command::Point(point) => self.draw(&point),
            Command::CubicBezier(curve) => self.draw(&curve),
            Command::QuadraticBezier(curve) => self.draw(&curve),
            Command::Polygon(polygon) => self.draw(&polygon),

            Command::BeginShape => self.state.begin_shape()?,
            Command::Vertex(point) => self.state.vertex(point),
            Command::CurveVertex(point) => self.state.curve_vertex(point),
            Command::EndShape(mode) => {
                if let Some(path) = self.state.end_shape(mode) {
                    self.state.stroke_or_fill(&mut self.raster, path);
                }
            }

            Command::Clip => self.state.clip(&mut self.raster)?,
            Command::EndClip => self.raster.reset_clip(),

            Command::BlendMode(mode) => {
                self.state.set_blend_mode(mode);
                self.raster.set_blend_mode(mode);
            }
            Command::Background(color) => {
                self.state.set_background(color);
                self.raster.clear(color);
            }
            Command::Fill(color) => self.state.set_fill(color),
            Command::Stroke(color) => self.state.set_stroke(color),
            Command::StrokeWeight(weight) => self.state.set_stroke_weight(weight),
            Command::StrokeCap(cap) => self.state.set_stroke_cap(cap),
            Command::StrokeJoin(join) => self.state.set_stroke_join(join),
            Command::CurveTightness(tightness) => self.state.set_curve_tightness(tightness),

            Command::Image(image) => {
                let image = image.ok_or(CanvasError::EmptyImage)?;
                self.raster.draw_image(&image);
            }

            Command::Translate(by) => self.raster.translate(by.x, by.y),
            Command::Scale(by) => self.raster.scale(by.x, by.y),
            Command::Rotate(angle) => self.raster.rotate(angle),
            Command::Push => {
                self.raster.save();
                self.state.save();
            }
            Command::Pop => {
                self.raster.restore()?;
                self.state.restore();
            }

            Command::Text { content, origin } => {
                let run = TextRun {
                    content,
                    origin,
                    family: self.state.text_font().map(str::to_string),
                    size: self.state.text_size(),
                    paint: self.state.glyph_paint(),
                };
                if run.paint.is_visible() {
                    self.raster.draw_text(&run)?;
                }
            }
            Command::TextSize(size) => self.state.set_text_size(size)?,
            Command::TextFont(family) => self.state.set_text_font(family),
        }
        Ok(())
    }

    fn draw(&mut self, shape: &dyn ToPath) {
        if let Some(path) = shape.to_path() {
            self.state.stroke_or_fill(&mut self.raster, path);
        }
    }
}

impl<R: Rasterizer> Graphics for Canvas<R> {
    fn size(&self) -> Size {
        self.raster.size()
    }

    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn line(&mut self, line: LineSegment) {
        self.queue.push(Command::Line(line));
    }

    fn rectangle(&mut self, rectangle: Rectangle) {
        self.queue.push(Command::Rectangle(rectangle));
    }

    fn ellipse(&mut self, ellipse: Ellipse) {
        self.queue.push(Command::Ellipse(ellipse));
    }

    fn arc(&mut self, arc: Arc) {
        self.queue.push(Command::Arc(arc));
    }

    fn point(&mut self, point: Point) {
        self.queue.push(Command::Point(point));
    }

    fn cubic_curve(&mut self, curve: CubicBezier) {
        self.queue.push(Command::CubicBezier(curve));
    }

    fn quadratic_curve(&mut self, curve: QuadraticBezier) {
        self.queue.push(Command::QuadraticBezier(curve));
    }

    fn polygon(&mut self, polygon: Polygon) {
        self.queue.push(Command::Polygon(polygon));
    }

    fn begin_shape(&mut self) {
        self.queue.push(Command::BeginShape);
    }

    fn vertex(&mut self, point: Point) {
        self.queue.push(Command::Vertex(point));
    }

    fn curve_vertex(&mut self, point: Point) {
        self.queue.push(Command::CurveVertex(point));
    }

    fn end_shape(&mut self, mode: ShapeMode) {
        self.queue.push(Command::EndShape(mode));
    }

    fn clip(&mut self) {
        self.queue.push(Command::Clip);
    }

    fn end_clip(&mut self) {
        self.queue.push(Command::EndClip);
    }

    fn blend_mode(&mut self, mode: BlendMode) {
        self.queue.push(Command::BlendMode(mode));
    }

    fn background(&mut self, color: Color) {
        self.queue.push(Command::Background(color));
    }

    fn fill(&mut self, color: Color) {
        self.queue.push(Command::Fill(color));
    }

    fn stroke(&mut self, color: Color) {
        self.queue.push(Command::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.queue.push(Command::StrokeWeight(weight));
    }

    fn stroke_cap(&mut self, cap: StrokeCap) {
        self.queue.push(Command::StrokeCap(cap));
    }

    fn stroke_join(&mut self, join: StrokeJoin) {
        self.queue.push(Command::StrokeJoin(join));
    }

    fn curve_tightness(&mut self, tightness: f32) {
        self.queue.push(Command::CurveTightness(tightness));
    }

    fn image(&mut self, source: &dyn ImageSource) {
        self.queue.push(Command::Image(source.snapshot()));
    }

    fn translate(&mut self, by: Point) {
        self.queue.push(Command::Translate(by));
    }

    fn scale(&mut self, by: Point) {
        self.queue.push(Command::Scale(by));
    }

    fn rotate(&mut self, angle: f32) {
        self.queue.push(Command::Rotate(angle));
    }

    fn push(&mut self) {
        self.queue.push(Command::Push);
    }

    fn pop(&mut self) {
        self.queue.push(Command::Pop);
    }

    fn text(&mut self, content: &str, origin: Point) {
        self.queue.push(Command::Text { content: content.to_string(), origin });
    }

    fn text_size(&mut self, size: f32) {
        self.queue.push(Command::TextSize(size));
    }

    fn text_font(&mut self, family: &str) {
        self.queue.push(Command::TextFont(family.to_string()));
    }
}

impl<R: Rasterizer> ImageSource for Canvas<R> {
    fn snapshot(&self) -> Option<Image> {
        self.raster.snapshot()
    }
}
