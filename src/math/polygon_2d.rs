use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The ring may be
/// open or closed; a repeated closing vertex contributes nothing.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    signed_area(points) > 0.0
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    let Some(best) = leftmost_bottom_index(points) else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

fn leftmost_bottom_index(points: &[Point2]) -> Option<usize> {
    let first = points.first()?;
    let mut best = 0;
    let mut b = first;
    for (i, pt) in points.iter().enumerate().skip(1) {
        if pt.x < b.x - TOLERANCE || ((pt.x - b.x).abs() < TOLERANCE && pt.y < b.y) {
            best = i;
            b = pt;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ccw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area(&square_ccw());
        assert!((area - 1.0).abs() < TOLERANCE);
        assert!(is_counter_clockwise(&square_ccw()));
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square_ccw();
        pts.reverse();
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
        assert!(!is_counter_clockwise(&pts));
    }

    #[test]
    fn signed_area_ignores_closing_vertex() {
        let mut pts = square_ccw();
        pts.push(pts[0]);
        assert!((signed_area(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let rotated = rotate_to_canonical_start(&pts);
        assert_eq!(rotated[0], Point2::new(0.0, 0.0));
        assert_eq!(rotated[1], Point2::new(1.0, 0.0));
        assert_eq!(rotated.len(), 4);
    }

    #[test]
    fn canonical_start_empty() {
        assert!(rotate_to_canonical_start(&[]).is_empty());
    }
}
