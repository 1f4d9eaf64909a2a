use crate::error::Result;
use crate::geometry::{LineSegment, Ring, SegmentOrientation};
use crate::math::Point2;

/// Builds the flat-capped rectangle covering a thick line segment.
///
/// The long sides run parallel to the segment at half the thickness on
/// either side; the short sides pass through the endpoints, perpendicular to
/// the segment. Caps are not extended past the endpoints and not rounded.
///
/// Axis-aligned segments use exact offsets along the other axis. Every other
/// segment goes through `atan2`/`sin`/`cos`, so a nearly vertical segment
/// yields slightly different coordinates than an exactly vertical one.
#[derive(Debug)]
pub struct MakeThickLine {
    segment: LineSegment,
}

impl MakeThickLine {
    /// Creates a new thick line operation.
    #[must_use]
    pub fn new(segment: LineSegment) -> Self {
        Self { segment }
    }

    /// Executes the operation, returning the four rectangle corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSegment` if the segment has zero length,
    /// non-finite coordinates, or a thickness that is not positive.
    pub fn execute(&self) -> Result<Ring> {
        self.segment.validate()?;

        let (x1, y1) = (self.segment.start.x, self.segment.start.y);
        let (x2, y2) = (self.segment.end.x, self.segment.end.y);
        let h = self.segment.half_thickness();

        let corners = match self.segment.orientation() {
            SegmentOrientation::Vertical => [
                Point2::new(x1 - h, y1),
                Point2::new(x1 + h, y1),
                Point2::new(x1 + h, y2),
                Point2::new(x1 - h, y2),
            ],
            SegmentOrientation::Horizontal => [
                Point2::new(x1, y1 - h),
                Point2::new(x2, y1 - h),
                Point2::new(x2, y1 + h),
                Point2::new(x1, y1 + h),
            ],
            SegmentOrientation::Diagonal => {
                let angle = (y2 - y1).atan2(x2 - x1);
                let dx = h * angle.sin();
                let dy = h * angle.cos();
                [
                    Point2::new(x1 - dx, y1 + dy),
                    Point2::new(x1 + dx, y1 - dy),
                    Point2::new(x2 + dx, y2 - dy),
                    Point2::new(x2 - dx, y2 + dy),
                ]
            }
        };

        tracing::trace!(
            orientation = ?self.segment.orientation(),
            thickness = self.segment.thickness,
            "built thick line rectangle"
        );

        Ok(Ring::new(corners.to_vec()))
    }
}
