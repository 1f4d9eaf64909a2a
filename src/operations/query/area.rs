use crate::geometry::{MergedRegion, Region};

/// Computes the enclosed area of a region: the exterior minus its holes.
///
/// Independent of ring winding.
pub struct Area<'a> {
    region: &'a Region,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(region: &'a Region) -> Self {
        Self { region }
    }

    /// Executes the query, returning the area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let holes: f64 = self
            .region
            .interiors
            .iter()
            .map(|ring| ring.signed_area().abs())
            .sum();
        self.region.exterior.signed_area().abs() - holes
    }

    /// Sums the area of every region in a merged region.
    #[must_use]
    pub fn of_merged(merged: &MergedRegion) -> f64 {
        merged
            .regions()
            .iter()
            .map(|region| Area::new(region).execute())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn square(x: f64, y: f64, size: f64) -> Ring {
        Ring::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    #[test]
    fn area_subtracts_holes() {
        let region = Region::new(
            square(0.0, 0.0, 10.0),
            vec![square(2.0, 2.0, 2.0), square(6.0, 6.0, 2.0).reversed()],
        );
        assert_abs_diff_eq!(Area::new(&region).execute(), 92.0);
    }

    #[test]
    fn merged_area_sums_regions() {
        let merged = MergedRegion::new(vec![
            Region::solid(square(0.0, 0.0, 1.0)),
            Region::solid(square(5.0, 5.0, 3.0).reversed()),
        ]);
        assert_abs_diff_eq!(Area::of_merged(&merged), 10.0);
        assert_abs_diff_eq!(Area::of_merged(&MergedRegion::default()), 0.0);
    }
}
