use primitive::Primitive;

/// An ordered batch of primitives drawn together.
///
/// Rendering brackets each group's elements with start/end markers; the
/// elements keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub primitives: Vec<Primitive>,
}

impl Group {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// The full ordered sequence of groups making up one drawing.
///
/// Immutable once built; consumed by a single top-to-bottom traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    pub groups: Vec<Group>,
}

impl Drawing {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Total number of primitives across all groups.
    pub fn element_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive::{Point, Shape};

    #[test]
    fn element_count_sums_all_groups() {
        let drawing = Drawing::new(vec![
            Group::new(vec![Primitive::new(Point::new(0.0, 0.0), Shape::circle(1.0))]),
            Group::new(vec![
                Primitive::new(Point::new(1.0, 1.0), Shape::rect(2.0, 3.0)),
                Primitive::new(Point::new(2.0, 2.0), Shape::circle(4.0)),
            ]),
        ]);
        assert_eq!(drawing.element_count(), 3);
    }

    #[test]
    fn empty_group_counts_as_zero() {
        let drawing = Drawing::new(vec![Group::default()]);
        assert!(drawing.groups[0].is_empty());
        assert_eq!(drawing.element_count(), 0);
    }
}
