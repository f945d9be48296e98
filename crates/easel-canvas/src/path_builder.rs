//! Shape builder
//!
//! Collects the vertices issued between `begin_shape` and `end_shape` and
//! turns them into a single path. Curve vertices are joined with Catmull-Rom
//! segments whose looseness is controlled by the curve tightness.

use tiny_skia::{Path, PathBuilder as SkPathBuilder};

use crate::geometry::Point;

/// How `end_shape` finishes the outline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeMode {
    /// Leave the outline open
    #[default]
    Open,
    /// Add a straight segment back to the first vertex
    Close,
}

/// Kind of vertex in an ongoing shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    Straight,
    Curve,
}

/// A vertex in an ongoing shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub point: Point,
    pub kind: VertexKind,
}

impl Vertex {
    pub const fn straight(point: Point) -> Self {
        Self { point, kind: VertexKind::Straight }
    }

    pub const fn curve(point: Point) -> Self {
        Self { point, kind: VertexKind::Curve }
    }
}

/// Ongoing shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    vertices: Vec<Vertex>,
    tightness: f32,
}

impl PathBuilder {
    pub fn new(tightness: f32) -> Self {
        Self {
            vertices: Vec::new(),
            tightness,
        }
    }

    /// Drop every vertex; the tightness is kept
    pub fn begin(&mut self) {
        self.vertices.clear();
    }

    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(Vertex::straight(point));
    }

    pub fn add_curve_vertex(&mut self, point: Point) {
        self.vertices.push(Vertex::curve(point));
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn tightness(&self) -> f32 {
        self.tightness
    }

    pub fn set_tightness(&mut self, tightness: f32) {
        self.tightness = tightness;
    }

    /// Build the path. Fewer than two vertices yields `None`.
    ///
    /// The vertices are left in place; callers reset with [`Self::begin`].
    pub fn end(&self, mode: ShapeMode) -> Option<Path> {
        let (first, _) = self.vertices.split_first()?;
        if self.vertices.len() < 2 {
            return None;
        }

        let mut pb = SkPathBuilder::new();
        pb.move_to(first.point.x, first.point.y);

        for i in 1..self.vertices.len() {
            let vertex = self.vertices[i];
            match vertex.kind {
                VertexKind::Straight => pb.line_to(vertex.point.x, vertex.point.y),
                VertexKind::Curve => {
                    let (c1, c2) = self.curve_controls(i);
                    pb.cubic_to(c1.x, c1.y, c2.x, c2.y, vertex.point.x, vertex.point.y);
                }
            }
        }

        if mode == ShapeMode::Close {
            pb.close();
        }
        pb.finish()
    }

    /// Control points of the segment ending at vertex `i`, neighbors clamped
    fn curve_controls(&self, i: usize) -> (Point, Point) {
        let last = self.vertices.len() - 1;
        let p0 = self.vertices[i.saturating_sub(2)].point;
        let p1 = self.vertices[i - 1].point;
        let p2 = self.vertices[i].point;
        let p3 = self.vertices[(i + 1).min(last)].point;

        let k = (1.0 - self.tightness) / 6.0;
        let c1 = p1 + (p2 - p0) * k;
        let c2 = p2 - (p3 - p1) * k;
        (c1, c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::PathSegment;

    fn segments(path: &Path) -> Vec<PathSegment> {
        path.segments().collect()
    }

    #[test]
    fn test_too_few_vertices() {
        let mut builder = PathBuilder::new(0.0);
        assert!(builder.end(ShapeMode::Close).is_none());

        builder.add_vertex(Point::new(1.0, 1.0));
        assert!(builder.end(ShapeMode::Open).is_none());
    }

    #[test]
    fn test_close_adds_closing_segment() {
        let mut builder = PathBuilder::new(0.0);
        builder.add_vertex(Point::new(0.0, 0.0));
        builder.add_vertex(Point::new(10.0, 0.0));
        builder.add_vertex(Point::new(10.0, 10.0));

        let open = builder.end(ShapeMode::Open).unwrap();
        let closed = builder.end(ShapeMode::Close).unwrap();

        assert!(!segments(&open).contains(&PathSegment::Close));
        assert_eq!(segments(&closed).last(), Some(&PathSegment::Close));
    }

    #[test]
    fn test_full_tightness_gives_straight_controls() {
        let mut builder = PathBuilder::new(1.0);
        builder.add_vertex(Point::new(0.0, 0.0));
        builder.add_curve_vertex(Point::new(10.0, 5.0));

        let path = builder.end(ShapeMode::Open).unwrap();
        match segments(&path)[1] {
            PathSegment::CubicTo(c1, c2, end) => {
                assert_eq!((c1.x, c1.y), (0.0, 0.0));
                assert_eq!((c2.x, c2.y), (10.0, 5.0));
                assert_eq!((end.x, end.y), (10.0, 5.0));
            }
            other => panic!("expected a cubic, got {:?}", other),
        }
    }

    #[test]
    fn test_catmull_rom_controls_use_neighbors() {
        let mut builder = PathBuilder::new(0.0);
        builder.add_curve_vertex(Point::new(0.0, 0.0));
        builder.add_curve_vertex(Point::new(6.0, 0.0));
        builder.add_curve_vertex(Point::new(12.0, 6.0));

        let path = builder.end(ShapeMode::Open).unwrap();
        // Segment 0 -> 6: p0 clamps to p1, p3 is the third vertex
        match segments(&path)[1] {
            PathSegment::CubicTo(c1, c2, _) => {
                assert_eq!((c1.x, c1.y), (1.0, 0.0));
                assert_eq!((c2.x, c2.y), (4.0, -1.0));
            }
            other => panic!("expected a cubic, got {:?}", other),
        }
    }

    #[test]
    fn test_begin_keeps_tightness() {
        let mut builder = PathBuilder::new(0.5);
        builder.add_vertex(Point::ZERO);
        builder.begin();
        assert!(builder.is_empty());
        assert_eq!(builder.tightness(), 0.5);
    }
}
