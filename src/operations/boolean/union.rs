use crate::error::Result;
use crate::geometry::{MergedRegion, Ring};

use super::PolygonSetOps;

/// Computes the union of a set of simple polygons.
pub struct Union<'a> {
    polygons: &'a [Ring],
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(polygons: &'a [Ring]) -> Self {
        Self { polygons }
    }

    /// Executes the union with the given polygon set backend.
    ///
    /// # Errors
    ///
    /// Propagates the backend's error unchanged.
    pub fn execute(&self, ops: &impl PolygonSetOps) -> Result<MergedRegion> {
        let merged = ops.union(self.polygons)?;
        tracing::debug!(
            inputs = self.polygons.len(),
            regions = merged.regions().len(),
            holes = merged.hole_count(),
            "union complete"
        );
        Ok(merged)
    }
}
