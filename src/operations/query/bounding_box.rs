use crate::geometry::Ring;
use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Computes the axis-aligned bounding box of a ring.
pub struct BoundingBox<'a> {
    ring: &'a Ring,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(ring: &'a Ring) -> Self {
        Self { ring }
    }

    /// Executes the query, returning `None` for an empty ring.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let (first, rest) = self.ring.points().split_first()?;
        let mut aabb = Aabb {
            min: *first,
            max: *first,
        };
        for p in rest {
            aabb.min.x = aabb.min.x.min(p.x);
            aabb.min.y = aabb.min.y.min(p.y);
            aabb.max.x = aabb.max.x.max(p.x);
            aabb.max.y = aabb.max.y.max(p.y);
        }
        Some(aabb)
    }
}
