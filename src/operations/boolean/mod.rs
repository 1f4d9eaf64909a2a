mod geo_ops;
mod subtract;
mod union;

pub use geo_ops::GeoBooleanOps;
pub use subtract::Subtract;
pub use union::Union;

use crate::error::Result;
use crate::geometry::{MergedRegion, Ring};

/// Polygon set operations over planar regions.
///
/// Implementations must return closed, simple rings with exteriors wound
/// counter-clockwise and hole rings wound clockwise, so that callers can tell
/// boundaries from holes without further classification. Numerical
/// robustness is the implementation's concern.
pub trait PolygonSetOps {
    /// Merges simple polygons into disjoint regions with holes.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the union cannot be computed.
    fn union(&self, polygons: &[Ring]) -> Result<MergedRegion>;

    /// Removes `tool` from `subject`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the difference cannot be computed.
    fn difference(&self, subject: &MergedRegion, tool: &MergedRegion) -> Result<MergedRegion>;
}
