use crate::Point;
use strum_macros::{Display, EnumString};

/// The kind of shape.
///
/// Doubles as the wire tag for untyped documents, so the strum names are
/// lowercase (`"rect"`, `"circle"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Circle,
}

/// A shape with its kind-specific dimensions.
///
/// The payload lives on the variant itself, so a rect can never reach the
/// renderer carrying a circle's parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect { length: f32, width: f32 },
    Circle { radius: f32 },
}

impl Shape {
    pub fn rect(length: f32, width: f32) -> Self {
        Self::Rect { length, width }
    }

    pub fn circle(radius: f32) -> Self {
        Self::Circle { radius }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }
}

/// A single placed shape: one drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub position: Point,
    pub shape: Shape,
}

impl Primitive {
    pub fn new(position: Point, shape: Shape) -> Self {
        Self { position, shape }
    }
}
