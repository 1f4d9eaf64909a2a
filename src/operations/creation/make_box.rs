use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::math::{Point2, TOLERANCE};

/// Creates an axis-aligned box ring from two corner points.
#[derive(Debug)]
pub struct MakeBox {
    min_corner: Point2,
    max_corner: Point2,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point2, max_corner: Point2) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, returning a counter-clockwise ring starting at
    /// the minimum corner.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the box has no area or a
    /// corner is not finite.
    pub fn execute(&self) -> Result<Ring> {
        let (min, max) = (self.min_corner, self.max_corner);
        if ![min.x, min.y, max.x, max.y].iter().all(|c| c.is_finite()) {
            return Err(OperationError::InvalidInput("box corner is not finite".to_owned()).into());
        }
        if max.x - min.x < TOLERANCE || max.y - min.y < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "box ({}, {}) -> ({}, {}) has no area",
                min.x, min.y, max.x, max.y
            ))
            .into());
        }
        Ok(Ring::new(vec![
            min,
            Point2::new(max.x, min.y),
            max,
            Point2::new(min.x, max.y),
        ]))
    }
}
