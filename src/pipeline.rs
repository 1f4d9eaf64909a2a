//! End-to-end pipelines over explicit inputs.

use crate::config::BoxDifferenceSpec;
use crate::error::Result;
use crate::geometry::{Hole, LineSegment, MergedRegion, Region, Ring};
use crate::operations::boolean::{PolygonSetOps, Subtract, Union};
use crate::operations::creation::{MakeBox, MakeThickLine};
use crate::operations::query::ExtractHoles;

/// Builds the thick line rectangle of every segment, in input order.
///
/// # Errors
///
/// Returns `GeometryError::InvalidSegment` for the first segment that is
/// degenerate or has a non-positive thickness.
pub fn build_rectangles(segments: &[LineSegment]) -> Result<Vec<Ring>> {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            MakeThickLine::new(*segment).execute().inspect_err(|err| {
                tracing::warn!(index, %err, "rejected segment");
            })
        })
        .collect()
}

/// Finds the voids enclosed by a set of thick lines.
///
/// The segments are turned into rectangles, merged, and every hole ring of
/// the merged shape is returned in discovery order. No segments, or lines
/// that close no loop, give an empty list.
///
/// # Errors
///
/// Returns `GeometryError::InvalidSegment` for an invalid segment, or the
/// backend's error if the union fails.
pub fn find_enclosed_holes(
    segments: &[LineSegment],
    ops: &impl PolygonSetOps,
) -> Result<Vec<Hole>> {
    let rectangles = build_rectangles(segments)?;
    tracing::debug!(rectangles = rectangles.len(), "built thick line rectangles");

    let merged = Union::new(&rectangles).execute(ops)?;
    let holes = ExtractHoles::new(&merged).execute();
    tracing::info!(
        segments = segments.len(),
        kind = ?merged.kind(),
        holes = holes.len(),
        "enclosed holes extracted"
    );
    Ok(holes)
}

/// Removes every hole box from the outer box.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` for a box without area, or the
/// backend's error if the union or difference fails.
pub fn box_difference(spec: &BoxDifferenceSpec, ops: &impl PolygonSetOps) -> Result<MergedRegion> {
    let outer = MakeBox::new(spec.outer.min_corner(), spec.outer.max_corner()).execute()?;
    let cutters = spec
        .holes
        .iter()
        .map(|b| MakeBox::new(b.min_corner(), b.max_corner()).execute())
        .collect::<Result<Vec<_>>>()?;

    let subject = MergedRegion::single(Region::solid(outer));
    let tool = Union::new(&cutters).execute(ops)?;
    let result = Subtract::new(&subject, &tool).execute(ops)?;
    tracing::info!(
        cutters = cutters.len(),
        kind = ?result.kind(),
        holes = result.hole_count(),
        "box difference complete"
    );
    Ok(result)
}
