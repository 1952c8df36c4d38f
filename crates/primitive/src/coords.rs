//! Typed position for drawing space.

use glam::Vec2;

/// Position in drawing space.
///
/// Drawing space is the shared coordinate system every primitive is placed
/// in. Coordinates are clamped to the drawing bounds at render time, not at
/// construction, so a point may hold out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub Vec2);

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        p.0
    }
}
