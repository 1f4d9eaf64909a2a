use std::fmt;

use serde::Serialize;

use super::Ring;

/// A simple polygon with zero or more hole rings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Region {
    pub exterior: Ring,
    pub interiors: Vec<Ring>,
}

impl Region {
    #[must_use]
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Creates a region without holes.
    #[must_use]
    pub fn solid(exterior: Ring) -> Self {
        Self::new(exterior, Vec::new())
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.interiors.len()
    }

    fn write_rings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.exterior)?;
        for ring in &self.interiors {
            write!(f, ", {ring}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("POLYGON ")?;
        self.write_rings(f)
    }
}

/// Shape of a [`MergedRegion`], mirroring the geometry type a polygon set
/// operation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Empty,
    Polygon,
    MultiPolygon,
}

/// The output of a polygon set operation: zero or more disjoint regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedRegion {
    regions: Vec<Region>,
}

impl MergedRegion {
    #[must_use]
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Wraps a single region.
    #[must_use]
    pub fn single(region: Region) -> Self {
        Self {
            regions: vec![region],
        }
    }

    #[must_use]
    pub fn kind(&self) -> RegionKind {
        match self.regions.len() {
            0 => RegionKind::Empty,
            1 => RegionKind::Polygon,
            _ => RegionKind::MultiPolygon,
        }
    }

    /// Returns the constituent regions in the order the operation produced them.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total number of hole rings across all regions.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.regions.iter().map(Region::hole_count).sum()
    }
}

/// Writes the region as WKT: `POLYGON EMPTY`, `POLYGON (...)` or
/// `MULTIPOLYGON ((...), ...)`.
impl fmt::Display for MergedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.regions.as_slice() {
            [] => f.write_str("POLYGON EMPTY"),
            [only] => fmt::Display::fmt(only, f),
            many => {
                f.write_str("MULTIPOLYGON (")?;
                for (i, region) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    region.write_rings(f)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square(x: f64, y: f64, size: f64) -> Ring {
        Ring::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    #[test]
    fn kind_follows_region_count() {
        assert_eq!(MergedRegion::default().kind(), RegionKind::Empty);
        let one = MergedRegion::single(Region::solid(square(0.0, 0.0, 1.0)));
        assert_eq!(one.kind(), RegionKind::Polygon);
        let two = MergedRegion::new(vec![
            Region::solid(square(0.0, 0.0, 1.0)),
            Region::solid(square(5.0, 5.0, 1.0)),
        ]);
        assert_eq!(two.kind(), RegionKind::MultiPolygon);
    }

    #[test]
    fn hole_count_spans_regions() {
        let merged = MergedRegion::new(vec![
            Region::new(square(0.0, 0.0, 10.0), vec![square(1.0, 1.0, 1.0)]),
            Region::solid(square(20.0, 0.0, 1.0)),
            Region::new(
                square(30.0, 0.0, 10.0),
                vec![square(31.0, 1.0, 1.0), square(35.0, 5.0, 1.0)],
            ),
        ]);
        assert_eq!(merged.hole_count(), 3);
    }

    #[test]
    fn wkt_display() {
        let region = Region::new(square(0.0, 0.0, 4.0), vec![square(1.0, 1.0, 1.0)]);
        assert_eq!(
            region.to_string(),
            "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 2, 1 1))"
        );
        assert_eq!(MergedRegion::default().to_string(), "POLYGON EMPTY");
        let multi = MergedRegion::new(vec![
            Region::solid(square(0.0, 0.0, 1.0)),
            Region::solid(square(2.0, 0.0, 1.0)),
        ]);
        assert_eq!(
            multi.to_string(),
            "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)), ((2 0, 3 0, 3 1, 2 1, 2 0)))"
        );
    }
}
