use serde::Serialize;

use super::Ring;

/// An enclosed void found inside a merged region.
///
/// `exterior` is the boundary of the void. `interior` would hold nested
/// boundaries inside the void; extraction never subdivides voids, so it is
/// always empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hole {
    pub exterior: Ring,
    pub interior: Vec<Ring>,
}

impl Hole {
    /// Creates a hole bounded by `ring`, with no nested boundaries.
    #[must_use]
    pub fn from_ring(ring: Ring) -> Self {
        Self {
            exterior: ring,
            interior: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn serializes_as_exterior_interior_record() {
        let hole = Hole::from_ring(Ring::new(vec![
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 5.0),
            Point2::new(6.0, 5.0),
        ]));
        let json = serde_json::to_string(&hole).unwrap();
        assert_eq!(
            json,
            r#"{"exterior":[[2.0,2.0],[2.0,5.0],[6.0,5.0],[2.0,2.0]],"interior":[]}"#
        );
    }
}
