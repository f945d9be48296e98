//! Drawing API
//!
//! Every operation records exactly one command and returns. Nothing is drawn
//! until the owner dispatches.

use crate::color::Color;
use crate::compositing::BlendMode;
use crate::geometry::{Arc, CubicBezier, Ellipse, LineSegment, Point, Polygon, QuadraticBezier, Rectangle, Size};
use crate::image::ImageSource;
use crate::path_builder::ShapeMode;
use crate::style::{StrokeCap, StrokeJoin};

/// Deferred drawing API
pub trait Graphics {
    /// Surface size in pixels
    fn size(&self) -> Size;

    /// Frames dispatched so far, starting at 1
    fn frame_count(&self) -> u64;

    // Geometry

    fn line(&mut self, line: LineSegment);
    fn rectangle(&mut self, rectangle: Rectangle);
    fn ellipse(&mut self, ellipse: Ellipse);
    /// Filled then stroked
    fn arc(&mut self, arc: Arc);
    /// Rendered as a dot of the stroke weight
    fn point(&mut self, point: Point);
    fn cubic_curve(&mut self, curve: CubicBezier);
    fn quadratic_curve(&mut self, curve: QuadraticBezier);
    fn polygon(&mut self, polygon: Polygon);

    // Shapes

    fn begin_shape(&mut self);
    fn vertex(&mut self, point: Point);
    fn curve_vertex(&mut self, point: Point);
    fn end_shape(&mut self, mode: ShapeMode);

    // Clipping

    /// Clip to the last drawn path
    fn clip(&mut self);
    fn end_clip(&mut self);

    // Style

    fn blend_mode(&mut self, mode: BlendMode);
    /// Fill the whole surface
    fn background(&mut self, color: Color);
    fn fill(&mut self, color: Color);
    fn stroke(&mut self, color: Color);
    fn stroke_weight(&mut self, weight: f32);
    fn stroke_cap(&mut self, cap: StrokeCap);
    fn stroke_join(&mut self, join: StrokeJoin);
    fn curve_tightness(&mut self, tightness: f32);

    /// Draw a snapshot of `source` taken now, at the current origin
    fn image(&mut self, source: &dyn ImageSource);

    // Transform

    fn translate(&mut self, by: Point);
    fn scale(&mut self, by: Point);
    /// Clockwise, in radians
    fn rotate(&mut self, angle: f32);
    fn push(&mut self);
    fn pop(&mut self);

    // Text

    /// `origin` is the top-left of the line
    fn text(&mut self, content: &str, origin: Point);
    fn text_size(&mut self, size: f32);
    fn text_font(&mut self, family: &str);

    fn no_fill(&mut self) {
        self.fill(Color::CLEAR);
    }

    fn no_stroke(&mut self) {
        self.stroke(Color::CLEAR);
    }

    /// Circle whose bounding box starts at `origin`
    fn circle(&mut self, origin: Point, radius: f32) {
        self.ellipse(Ellipse::new(origin.x, origin.y, radius * 2.0, radius * 2.0));
    }

    fn circle_centered(&mut self, center: Point, radius: f32) {
        self.ellipse(Ellipse::circle(center, radius));
    }

    fn width(&self) -> f32 {
        self.size().width
    }

    fn height(&self) -> f32 {
        self.size().height
    }

    fn center(&self) -> Point {
        let size = self.size();
        Point::new(size.width * 0.5, size.height * 0.5)
    }
}
