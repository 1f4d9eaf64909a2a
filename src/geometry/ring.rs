use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::math::polygon_2d::{is_counter_clockwise, rotate_to_canonical_start, signed_area};
use crate::math::Point2;

/// A closed polygon boundary stored without its repeated closing vertex.
///
/// Serializes as a closed coordinate list (`[[x, y], ...]` with the first
/// point repeated at the end).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Creates a ring from its vertices. A trailing copy of the first vertex
    /// is dropped, so open and closed input produce the same ring.
    #[must_use]
    pub fn new(mut points: Vec<Point2>) -> Self {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }

    /// Returns the distinct vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the vertices followed by the first vertex again.
    #[must_use]
    pub fn closed_points(&self) -> Vec<Point2> {
        let mut pts = self.points.clone();
        if let Some(&first) = self.points.first() {
            pts.push(first);
        }
        pts
    }

    /// Returns the number of distinct vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        is_counter_clockwise(&self.points)
    }

    /// Returns the ring with its vertex order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the ring wound counter-clockwise (`ccw == true`) or clockwise.
    #[must_use]
    pub fn with_winding(self, ccw: bool) -> Self {
        if self.is_counter_clockwise() == ccw {
            self
        } else {
            self.reversed()
        }
    }

    /// Counter-clockwise, starting at the leftmost-bottom vertex.
    ///
    /// Two rings tracing the same boundary have equal canonical forms up to
    /// floating-point noise, whatever their original start and direction.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let ccw = self.clone().with_winding(true);
        Self {
            points: rotate_to_canonical_start(&ccw.points),
        }
    }
}

impl Serialize for Ring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.closed_points().iter().map(|p| [p.x, p.y]))
    }
}

/// Writes the ring in WKT coordinate form: `(x y, x y, ...)`, closed.
impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, p) in self.closed_points().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", p.x, p.y)?;
        }
        f.write_str(")")
    }
}
