//! Sketch context
//!
//! What a sketch draws with. Every [`Graphics`] call is forwarded unchanged to
//! the canvas; the context only adds frame control.

use easel_canvas::{
    Arc, BlendMode, Canvas, CanvasConfig, CanvasError, Color, CubicBezier, Ellipse, Graphics,
    Image, ImageSource, LineSegment, Point, Polygon, QuadraticBezier, Rectangle, ShapeMode,
    Size, SkiaRasterizer, StrokeCap, StrokeJoin,
};

use crate::config::SketchConfig;
use crate::Result;

/// Canvas plus frame control
pub struct SketchContext {
    canvas: Canvas,
    config: CanvasConfig,
    looping: bool,
}

impl SketchContext {
    pub fn new(config: &SketchConfig) -> Result<Self> {
        let canvas_config = config.canvas_config();
        Ok(Self {
            canvas: Canvas::from_config(&canvas_config)?,
            config: canvas_config,
            looping: config.looping,
        })
    }

    /// Keep drawing frames
    pub fn loop_(&mut self) {
        self.looping = true;
    }

    /// Stop after the current frame
    pub fn no_loop(&mut self) {
        self.looping = false;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Replace the canvas with a fresh one of the new size.
    ///
    /// Style and pending commands start over; loaded fonts are kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let mut config = self.config.clone();
        config.width = width;
        config.height = height;

        let mut raster = SkiaRasterizer::from_config(&config)?;
        if let Some(engine) = self.canvas.rasterizer().loaded_text_engine() {
            raster = raster.with_text_engine(engine);
        }
        let frame_count = self.canvas.frame_count();
        tracing::info!("Canvas resized to {}x{} at frame {}", width, height, frame_count);

        self.canvas = Canvas::with_rasterizer(raster, &config);
        self.config = config;
        Ok(())
    }

    /// The rendered pixels
    pub fn surface(&self) -> &SkiaRasterizer {
        self.canvas.rasterizer()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Problems reported by the last frame
    pub fn diagnostics(&self) -> &[CanvasError] {
        self.canvas.diagnostics()
    }

    pub(crate) fn dispatch(&mut self) {
        self.canvas.dispatch();
    }
}

impl ImageSource for SketchContext {
    fn snapshot(&self) -> Option<Image> {
        self.canvas.snapshot()
    }
}

impl Graphics for SketchContext {
    fn size(&self) -> Size {
        self.canvas.size()
    }

    fn frame_count(&self) -> u64 {
        self.canvas.frame_count()
    }

    fn line(&mut self, line: LineSegment) {
        self.canvas.line(line);
    }

    fn rectangle(&mut self, rectangle: Rectangle) {
        self.canvas.rectangle(rectangle);
    }

    fn ellipse(&mut self, ellipse: Ellipse) {
        self.canvas.ellipse(ellipse);
    }

    fn arc(&mut self, arc: Arc) {
        self.canvas.arc(arc);
    }

    fn point(&mut self, point: Point) {
        self.canvas.point(point);
    }

    fn cubic_curve(&mut self, curve: CubicBezier) {
        self.canvas.cubic_curve(curve);
    }

    fn quadratic_curve(&mut self, curve: QuadraticBezier) {
        self.canvas.quadratic_curve(curve);
    }

    fn polygon(&mut self, polygon: Polygon) {
        self.canvas.polygon(polygon);
    }

    fn begin_shape(&mut self) {
        self.canvas.begin_shape();
    }

    fn vertex(&mut self, point: Point) {
        self.canvas.vertex(point);
    }

    fn curve_vertex(&mut self, point: Point) {
        self.canvas.curve_vertex(point);
    }

    fn end_shape(&mut self, mode: ShapeMode) {
        self.canvas.end_shape(mode);
    }

    fn clip(&mut self) {
        self.canvas.clip();
    }

    fn end_clip(&mut self) {
        self.canvas.end_clip();
    }

    fn blend_mode(&mut self, mode: BlendMode) {
        self.canvas.blend_mode(mode);
    }

    fn background(&mut self, color: Color) {
        self.canvas.background(color);
    }

    fn fill(&mut self, color: Color) {
        self.canvas.fill(color);
    }

    fn stroke(&mut self, color: Color) {
        self.canvas.stroke(color);
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.canvas.stroke_weight(weight);
    }

    fn stroke_cap(&mut self, cap: StrokeCap) {
        self.canvas.stroke_cap(cap);
    }

    fn stroke_join(&mut self, join: StrokeJoin) {
        self.canvas.stroke_join(join);
    }

    fn curve_tightness(&mut self, tightness: f32) {
        self.canvas.curve_tightness(tightness);
    }

    fn image(&mut self, source: &dyn ImageSource) {
        self.canvas.image(source);
    }

    fn translate(&mut self, by: Point) {
        self.canvas.translate(by);
    }

    fn scale(&mut self, by: Point) {
        self.canvas.scale(by);
    }

    fn rotate(&mut self, angle: f32) {
        self.canvas.rotate(angle);
    }

    fn push(&mut self) {
        self.canvas.push();
    }

    fn pop(&mut self) {
        self.canvas.pop();
    }

    fn text(&mut self, content: &str, origin: Point) {
        self.canvas.text(content, origin);
    }

    fn text_size(&mut self, size: f32) {
        self.canvas.text_size(size);
    }

    fn text_font(&mut self, family: &str) {
        self.canvas.text_font(family);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::Command;

    fn context() -> SketchContext {
        SketchContext::new(&SketchConfig::new(32, 16)).unwrap()
    }

    #[test]
    fn test_calls_forward_one_to_one() {
        let mut g = context();
        g.no_fill();
        g.circle_centered(Point::new(8.0, 8.0), 4.0);
        g.push();
        g.rotate(1.0);
        g.pop();

        assert_eq!(
            g.canvas().pending(),
            &[
                Command::Fill(Color::CLEAR),
                Command::Ellipse(Ellipse::new(4.0, 4.0, 8.0, 8.0)),
                Command::Push,
                Command::Rotate(1.0),
                Command::Pop,
            ]
        );
    }

    #[test]
    fn test_loop_flag() {
        let mut g = context();
        assert!(g.is_looping());
        g.no_loop();
        assert!(!g.is_looping());
        g.loop_();
        assert!(g.is_looping());
    }

    #[test]
    fn test_resize_replaces_canvas() {
        let mut g = context();
        g.fill(Color::BLACK);
        g.resize(64, 48).unwrap();

        assert_eq!(g.size(), Size::new(64.0, 48.0));
        assert!(g.canvas().pending().is_empty());
        assert_eq!(g.surface().pixel(10, 10), Some(Color::WHITE));
        assert!(g.resize(0, 10).is_err());
    }
}
