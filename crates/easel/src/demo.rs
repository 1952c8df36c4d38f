//! Built-in sample drawing.

use primitive::{Point, Primitive, Shape};
use scene::{Drawing, Group};

/// The demo drawing: two groups exercising both shape kinds, with a few
/// positions and dimensions that fall outside the drawing bounds.
pub fn drawing() -> Drawing {
    Drawing::new(vec![
        Group::new(vec![
            Primitive::new(Point::new(2.0, -8.0), Shape::circle(3.6)),
            Primitive::new(Point::new(3.0, 6.0), Shape::rect(2.0, 12.0)),
        ]),
        Group::new(vec![
            Primitive::new(Point::new(-16.0, -11.0), Shape::rect(4.0, 3.0)),
            Primitive::new(Point::new(8.0, -9.0), Shape::circle(15.0)),
            Primitive::new(Point::new(3.0, 19.0), Shape::rect(5.0, 6.0)),
        ]),
    ])
}
