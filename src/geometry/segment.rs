use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// Which rectangle formula applies to a segment.
///
/// Selected by exact floating-point comparison of the endpoint coordinates.
/// A segment that is only nearly axis-aligned is `Diagonal` and goes through
/// the trigonometric formula, whose rounding differs from the axis-aligned one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrientation {
    /// `start.x == end.x`.
    Vertical,
    /// `start.y == end.y` (and not vertical).
    Horizontal,
    /// Neither coordinate matches.
    Diagonal,
}

/// A centerline segment drawn with a given stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
}

impl LineSegment {
    /// Creates a new segment. Call [`LineSegment::validate`] before building
    /// geometry from untrusted input.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
        }
    }

    /// Returns the orientation tag used to pick the rectangle formula.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn orientation(&self) -> SegmentOrientation {
        if self.start.x == self.end.x {
            SegmentOrientation::Vertical
        } else if self.start.y == self.end.y {
            SegmentOrientation::Horizontal
        } else {
            SegmentOrientation::Diagonal
        }
    }

    /// Returns the distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns half the stroke thickness.
    #[must_use]
    pub fn half_thickness(&self) -> f64 {
        self.thickness / 2.0
    }

    /// Checks that the segment describes a non-degenerate stroke.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSegment` if a coordinate is not finite,
    /// the thickness is not a positive finite number, or the endpoints
    /// coincide.
    pub fn validate(&self) -> Result<()> {
        let coords = [self.start.x, self.start.y, self.end.x, self.end.y];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(invalid(format!(
                "non-finite endpoint ({}, {}) -> ({}, {})",
                self.start.x, self.start.y, self.end.x, self.end.y
            )));
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(invalid(format!(
                "thickness must be positive, got {}",
                self.thickness
            )));
        }
        if self.length() < TOLERANCE {
            return Err(invalid(format!(
                "zero-length segment at ({}, {})",
                self.start.x, self.start.y
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> crate::error::HollowError {
    GeometryError::InvalidSegment { reason }.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HollowError;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> LineSegment {
        LineSegment::new(Point2::new(x1, y1), Point2::new(x2, y2), t)
    }

    #[test]
    fn orientation_is_exact() {
        assert_eq!(seg(1.0, 0.0, 1.0, 7.0, 2.0).orientation(), SegmentOrientation::Vertical);
        assert_eq!(seg(2.0, 6.0, 6.0, 6.0, 2.0).orientation(), SegmentOrientation::Horizontal);
        assert_eq!(seg(0.0, 0.0, 3.0, 4.0, 1.0).orientation(), SegmentOrientation::Diagonal);
        assert_eq!(
            seg(1.0, 0.0, 1.0 + 1e-15, 7.0, 2.0).orientation(),
            SegmentOrientation::Diagonal
        );
    }

    #[test]
    fn length_and_half_thickness() {
        let s = seg(0.0, 0.0, 3.0, 4.0, 1.5);
        assert!((s.length() - 5.0).abs() < TOLERANCE);
        assert!((s.half_thickness() - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn validate_accepts_regular_segment() {
        assert!(seg(4.0, 3.0, 4.0, 4.0, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_length() {
        let err = seg(2.0, 2.0, 2.0, 2.0, 1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            HollowError::Geometry(GeometryError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_thickness() {
        assert!(seg(0.0, 0.0, 1.0, 0.0, 0.0).validate().is_err());
        assert!(seg(0.0, 0.0, 1.0, 0.0, -2.0).validate().is_err());
        assert!(seg(0.0, 0.0, 1.0, 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_endpoint() {
        assert!(seg(f64::INFINITY, 0.0, 1.0, 0.0, 1.0).validate().is_err());
    }
}
