//! Command queue
//!
//! Everything a frame asks for, in the order it was asked. The queue is
//! drained by [`crate::Canvas::dispatch`].

use crate::color::Color;
use crate::compositing::BlendMode;
use crate::geometry::{Arc, CubicBezier, Ellipse, LineSegment, Point, Polygon, QuadraticBezier, Rectangle};
use crate::image::Image;
use crate::path_builder::ShapeMode;
use crate::style::{StrokeCap, StrokeJoin};

/// Recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Geometry
    Line(LineSegment),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Arc(Arc),
    Point(Point),
    CubicBezier(CubicBezier),
    QuadraticBezier(QuadraticBezier),
    Polygon(Polygon),

    // Shapes
    BeginShape,
    Vertex(Point),
    CurveVertex(Point),
    EndShape(ShapeMode),

    // Clipping
    Clip,
    EndClip,

    // Style
    BlendMode(BlendMode),
    Background(Color),
    Fill(Color),
    Stroke(Color),
    StrokeWeight(f32),
    StrokeCap(StrokeCap),
    StrokeJoin(StrokeJoin),
    CurveTightness(f32),

    /// `None` when the source had no surface to snapshot
    Image(Option<Image>),

    // Transform
    Translate(Point),
    Scale(Point),
    Rotate(f32),
    Push,
    Pop,

    // Text
    Text { content: String, origin: Point },
    TextSize(f32),
    TextFont(String),
}

impl Command {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Rectangle(_) => "rectangle",
            Self::Ellipse(_) => "ellipse",
            Self::Arc(_) => "arc",
            Self::Point(_) => "point",
            Self::CubicBezier(_) => "cubic-bezier",
            Self::QuadraticBezier(_) => "quadratic-bezier",
            Self::Polygon(_) => "polygon",
            Self::BeginShape => "begin-shape",
            Self::Vertex(_) => "vertex",
            Self::CurveVertex(_) => "curve-vertex",
            Self::EndShape(_) => "end-shape",
            Self::Clip => "clip",
            Self::EndClip => "end-clip",
            Self::BlendMode(_) => "blend-mode",
            Self::Background(_) => "background",
            Self::Fill(_) => "fill",
            Self::Stroke(_) => "stroke",
            Self::StrokeWeight(_) => "stroke-weight",
            Self::StrokeCap(_) => "stroke-cap",
            Self::StrokeJoin(_) => "stroke-join",
            Self::CurveTightness(_) => "curve-tightness",
            Self::Image(_) => "image",
            Self::Translate(_) => "translate",
            Self::Scale(_) => "scale",
            Self::Rotate(_) => "rotate",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Text { .. } => "text",
            Self::TextSize(_) => "text-size",
            Self::TextFont(_) => "text-font",
        }
    }

    /// Whether this command can put pixels on the surface
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            Self::Line(_)
                | Self::Rectangle(_)
                | Self::Ellipse(_)
                | Self::Arc(_)
                | Self::Point(_)
                | Self::CubicBezier(_)
                | Self::QuadraticBezier(_)
                | Self::Polygon(_)
                | Self::EndShape(_)
                | Self::Background(_)
                | Self::Image(_)
                | Self::Text { .. }
        )
    }
}

/// Ordered pending commands of one canvas
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Take every command out in insertion order, leaving the queue empty
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<'a> IntoIterator for &'a CommandQueue {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_preserves_order_and_empties() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Fill(Color::BLACK));
        queue.push(Command::Push);
        queue.push(Command::Pop);

        let taken = queue.take();
        assert!(queue.is_empty());
        assert_eq!(taken, vec![Command::Fill(Color::BLACK), Command::Push, Command::Pop]);
    }

    #[test]
    fn test_drawing_classification() {
        assert!(Command::Point(Point::ZERO).is_drawing());
        assert!(Command::EndShape(ShapeMode::Close).is_drawing());
        assert!(!Command::Vertex(Point::ZERO).is_drawing());
        assert!(!Command::Fill(Color::WHITE).is_drawing());
        assert_eq!(Command::Text { content: "hi".into(), origin: Point::ZERO }.name(), "text");
    }
}
