//! Geometry primitives
//!
//! Plain value types for everything the canvas can draw. Each shape knows how
//! to turn itself into a renderable [`tiny_skia::Path`] through [`ToPath`];
//! `None` means there is nothing to draw.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::{Add, Mul, Sub};

use tiny_skia::{Path, PathBuilder};

/// Conversion of a primitive into a renderable path
pub trait ToPath {
    fn to_path(&self) -> Option<Path>;
}

/// 2D point (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (*self - other).length()
    }

    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl ToPath for Point {
    /// A zero-length segment: the degenerate path of a zero-radius ellipse.
    /// Stroked with a round or square cap it renders as a dot.
    fn to_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        pb.move_to(self.x, self.y);
        pb.line_to(self.x, self.y);
        pb.finish()
    }
}

/// Width and height
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle; negative sizes extend left/up from the origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(center.x - size.width * 0.5, center.y - size.height * 0.5, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same rectangle with non-negative width and height
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
            self.width.abs(),
            self.height.abs(),
        )
    }
}

impl ToPath for Rectangle {
    fn to_path(&self) -> Option<Path> {
        let r = self.normalized();
        let (right, bottom) = (r.x + r.width, r.y + r.height);
        let mut pb = PathBuilder::new();
        pb.move_to(r.x, r.y);
        pb.line_to(right, r.y);
        pb.line_to(right, bottom);
        pb.line_to(r.x, bottom);
        pb.close();
        pb.finish()
    }
}

/// Straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

impl ToPath for LineSegment {
    fn to_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        pb.move_to(self.start.x, self.start.y);
        pb.line_to(self.end.x, self.end.y);
        pb.finish()
    }
}

/// Ellipse inscribed in a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Ellipse {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Ellipse from its center and radii
    pub fn centered(center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self::new(center.x - radius_x, center.y - radius_y, radius_x * 2.0, radius_y * 2.0)
    }

    pub fn circle(center: Point, radius: f32) -> Self {
        Self::centered(center, radius, radius)
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height).normalized()
    }
}

impl ToPath for Ellipse {
    fn to_path(&self) -> Option<Path> {
        let b = self.bounds();
        let center = b.center();
        let (rx, ry) = (b.width * 0.5, b.height * 0.5);

        let mut pb = PathBuilder::new();
        pb.move_to(center.x + rx, center.y);
        append_elliptical_arc(&mut pb, center, rx, ry, 0.0, TAU);
        pb.close();
        pb.finish()
    }
}

/// How an arc is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcMode {
    /// Only the curve; a fill closes it implicitly
    #[default]
    Open,
    /// Curve plus a straight segment between its ends
    Chord,
    /// Curve plus two radii, like a pie slice
    Pie,
}

/// Elliptical arc. Angles are radians, clockwise from +x on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arc {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
    pub start: f32,
    pub stop: f32,
    pub mode: ArcMode,
}

impl Arc {
    pub const fn new(center: Point, radius_x: f32, radius_y: f32, start: f32, stop: f32) -> Self {
        Self { center, radius_x, radius_y, start, stop, mode: ArcMode::Open }
    }

    pub const fn with_mode(mut self, mode: ArcMode) -> Self {
        self.mode = mode;
        self
    }

    /// Angle swept from `start` to `stop`, in `[0, TAU]`
    pub fn sweep(&self) -> f32 {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return 0.0;
        }
        let mut sweep = self.stop - self.start;
        if sweep < 0.0 {
            sweep = sweep.rem_euclid(TAU);
        }
        sweep.min(TAU)
    }

    fn point_at(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius_x * angle.cos(),
            self.center.y + self.radius_y * angle.sin(),
        )
    }
}

impl ToPath for Arc {
    fn to_path(&self) -> Option<Path> {
        let sweep = self.sweep();
        if sweep <= 0.0 {
            return None;
        }

        let start = self.point_at(self.start);
        let mut pb = PathBuilder::new();
        match self.mode {
            ArcMode::Pie => {
                pb.move_to(self.center.x, self.center.y);
                pb.line_to(start.x, start.y);
            }
            ArcMode::Open | ArcMode::Chord => pb.move_to(start.x, start.y),
        }
        append_elliptical_arc(&mut pb, self.center, self.radius_x, self.radius_y, self.start, sweep);
        if self.mode != ArcMode::Open {
            pb.close();
        }
        pb.finish()
    }
}

/// Cubic Bezier curve
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CubicBezier {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicBezier {
    pub const fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self { start, control1, control2, end }
    }

    /// Point on the curve at `t` in `[0, 1]`
    pub fn evaluate(&self, t: f32) -> Point {
        let mt = 1.0 - t;
        self.start * (mt * mt * mt)
            + self.control1 * (3.0 * mt * mt * t)
            + self.control2 * (3.0 * mt * t * t)
            + self.end * (t * t * t)
    }
}

impl ToPath for CubicBezier {
    fn to_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        pb.move_to(self.start.x, self.start.y);
        pb.cubic_to(
            self.control1.x, self.control1.y,
            self.control2.x, self.control2.y,
            self.end.x, self.end.y,
        );
        pb.finish()
    }
}

/// Quadratic Bezier curve
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticBezier {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadraticBezier {
    pub const fn new(start: Point, control: Point, end: Point) -> Self {
        Self { start, control, end }
    }
}

impl ToPath for QuadraticBezier {
    fn to_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        pb.move_to(self.start.x, self.start.y);
        pb.quad_to(self.control.x, self.control.y, self.end.x, self.end.y);
        pb.finish()
    }
}

/// Closed polygon
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Regular polygon with `sides` corners, the first one straight up
    pub fn regular(center: Point, radius: f32, sides: usize) -> Self {
        let points = (0..sides)
            .map(|i| {
                let angle = -FRAC_PI_2 + TAU * i as f32 / sides as f32;
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect();
        Self { points }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ToPath for Polygon {
    fn to_path(&self) -> Option<Path> {
        let (first, rest) = self.points.split_first()?;
        if rest.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        pb.finish()
    }
}

/// Append an elliptical arc as cubic segments of at most a quarter turn.
/// The builder must already be positioned at the arc's start point.
fn append_elliptical_arc(pb: &mut PathBuilder, center: Point, rx: f32, ry: f32, start: f32, sweep: f32) {
    let segments = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut a0 = start;
    for _ in 0..segments {
        let a1 = a0 + step;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();

        let p0 = Point::new(center.x + rx * c0, center.y + ry * s0);
        let p3 = Point::new(center.x + rx * c1, center.y + ry * s1);
        let ctrl1 = p0 + Point::new(-rx * s0, ry * c0) * k;
        let ctrl2 = p3 - Point::new(-rx * s1, ry * c1) * k;

        pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, p3.x, p3.y);
        a0 = a1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;
    use tiny_skia::PathSegment;

    fn close_to(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_rectangle_normalizes_negative_size() {
        let r = Rectangle::new(10.0, 10.0, -5.0, -4.0).normalized();
        assert_eq!(r, Rectangle::new(5.0, 6.0, 5.0, 4.0));

        let bounds = Rectangle::new(10.0, 10.0, -5.0, -4.0).to_path().unwrap().bounds();
        assert_eq!(bounds.left(), 5.0);
        assert_eq!(bounds.bottom(), 10.0);
    }

    #[test]
    fn test_ellipse_bounds_match_box() {
        let path = Ellipse::new(10.0, 20.0, 40.0, 20.0).to_path().unwrap();
        let bounds = path.bounds();
        assert!(close_to(bounds.left(), 10.0));
        assert!(close_to(bounds.right(), 50.0));
        assert!(close_to(bounds.top(), 20.0));
        assert!(close_to(bounds.bottom(), 40.0));
    }

    #[test]
    fn test_circle_is_centered() {
        let c = Ellipse::circle(Point::new(50.0, 50.0), 10.0);
        assert_eq!(c, Ellipse::new(40.0, 40.0, 20.0, 20.0));
    }

    #[test]
    fn test_pie_arc_starts_at_center() {
        let arc = Arc::new(Point::new(50.0, 50.0), 10.0, 10.0, 0.0, FRAC_PI_2).with_mode(ArcMode::Pie);
        let path = arc.to_path().unwrap();
        let segments: Vec<_> = path.segments().collect();

        assert!(matches!(segments[0], PathSegment::MoveTo(p) if p.x == 50.0 && p.y == 50.0));
        assert!(matches!(segments[1], PathSegment::LineTo(p) if p.x == 60.0 && p.y == 50.0));
        assert!(matches!(segments.last(), Some(PathSegment::Close)));
    }

    #[test]
    fn test_open_arc_is_not_closed() {
        let arc = Arc::new(Point::new(0.0, 0.0), 10.0, 10.0, 0.0, PI);
        let path = arc.to_path().unwrap();
        assert!(!path.segments().any(|s| matches!(s, PathSegment::Close)));
        // Half a turn takes two quarter segments
        assert_eq!(path.segments().filter(|s| matches!(s, PathSegment::CubicTo(..))).count(), 2);
    }

    #[test]
    fn test_arc_wraps_negative_sweep() {
        let arc = Arc::new(Point::ZERO, 1.0, 1.0, PI, FRAC_PI_2);
        assert!(close_to(arc.sweep(), 1.5 * PI));

        let empty = Arc::new(Point::ZERO, 1.0, 1.0, 1.0, 1.0);
        assert!(empty.to_path().is_none());
    }

    #[test]
    fn test_polygon_needs_two_points() {
        assert!(Polygon::new(vec![Point::new(1.0, 1.0)]).to_path().is_none());
        assert!(Polygon::default().to_path().is_none());

        let triangle: Polygon = [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let path = triangle.to_path().unwrap();
        assert!(matches!(path.segments().last(), Some(PathSegment::Close)));
    }

    #[test]
    fn test_regular_polygon_first_vertex_points_up() {
        let hex = Polygon::regular(Point::new(0.0, 0.0), 10.0, 6);
        assert_eq!(hex.points.len(), 6);
        assert!(close_to(hex.points[0].x, 0.0));
        assert!(close_to(hex.points[0].y, -10.0));
    }

    #[test]
    fn test_point_is_degenerate_path() {
        let path = Point::new(3.0, 4.0).to_path().unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_cubic_evaluate_endpoints() {
        let curve = CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(curve.evaluate(0.0), curve.start);
        assert_eq!(curve.evaluate(1.0), curve.end);
        assert!(close_to(curve.evaluate(0.5).y, 7.5));
    }
}
