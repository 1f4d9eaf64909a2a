use crate::geometry::{Hole, MergedRegion};

/// Collects the enclosed voids of a merged region.
///
/// Produces one [`Hole`] per interior ring, in region order and then ring
/// order within each region. Voids are not subdivided further, so every
/// hole's `interior` is empty. Islands inside a void are separate regions
/// and contribute only their own holes.
pub struct ExtractHoles<'a> {
    region: &'a MergedRegion,
}

impl<'a> ExtractHoles<'a> {
    /// Creates a new `ExtractHoles` query.
    #[must_use]
    pub fn new(region: &'a MergedRegion) -> Self {
        Self { region }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Hole> {
        self.region
            .regions()
            .iter()
            .flat_map(|region| region.interiors.iter().cloned().map(Hole::from_ring))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Region, Ring};
    use crate::math::Point2;

    fn square(x: f64, y: f64, size: f64) -> Ring {
        Ring::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    fn sample() -> MergedRegion {
        MergedRegion::new(vec![
            Region::new(
                square(0.0, 0.0, 10.0),
                vec![square(1.0, 1.0, 1.0), square(5.0, 5.0, 2.0)],
            ),
            Region::solid(square(20.0, 0.0, 3.0)),
            Region::new(square(30.0, 0.0, 10.0), vec![square(32.0, 2.0, 3.0)]),
        ])
    }

    #[test]
    fn empty_region_has_no_holes() {
        assert!(ExtractHoles::new(&MergedRegion::default()).execute().is_empty());
    }

    #[test]
    fn solid_region_has_no_holes() {
        let merged = MergedRegion::single(Region::solid(square(0.0, 0.0, 1.0)));
        assert!(ExtractHoles::new(&merged).execute().is_empty());
    }

    #[test]
    fn holes_keep_discovery_order() {
        let holes = ExtractHoles::new(&sample()).execute();
        let expected = [
            square(1.0, 1.0, 1.0),
            square(5.0, 5.0, 2.0),
            square(32.0, 2.0, 3.0),
        ];
        assert_eq!(holes.len(), expected.len());
        for (hole, ring) in holes.iter().zip(&expected) {
            assert_eq!(&hole.exterior, ring);
            assert!(hole.interior.is_empty());
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let merged = sample();
        let first = ExtractHoles::new(&merged).execute();
        let second = ExtractHoles::new(&merged).execute();
        assert_eq!(first, second);
    }
}
