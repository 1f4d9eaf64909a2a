use crate::error::Result;
use crate::geometry::MergedRegion;

use super::PolygonSetOps;

/// Computes the boolean difference `subject - tool`.
pub struct Subtract<'a> {
    subject: &'a MergedRegion,
    tool: &'a MergedRegion,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation.
    #[must_use]
    pub fn new(subject: &'a MergedRegion, tool: &'a MergedRegion) -> Self {
        Self { subject, tool }
    }

    /// Executes the difference with the given polygon set backend.
    ///
    /// # Errors
    ///
    /// Propagates the backend's error unchanged.
    pub fn execute(&self, ops: &impl PolygonSetOps) -> Result<MergedRegion> {
        let result = ops.difference(self.subject, self.tool)?;
        tracing::debug!(
            regions = result.regions().len(),
            holes = result.hole_count(),
            "difference complete"
        );
        Ok(result)
    }
}
