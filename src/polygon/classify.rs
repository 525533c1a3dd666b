//! Point-versus-edge classification.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Which side of a directed edge a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The point is to the left of the edge direction.
    Left,
    /// The point is to the right of the edge direction.
    Right,
    /// The point is exactly on the edge's line.
    On,
}

/// Classifies a point relative to the directed line through
/// `edge_start` → `edge_end`.
///
/// The sign of the 2D cross product of the edge direction with the
/// vector from `edge_start` to the point decides: positive is `Left`,
/// negative is `Right`, exactly zero is `On`.
///
/// The zero comparison is exact, with no tolerance. Coordinates that
/// arrive as small integers (pixel grids) classify reliably; points
/// computed through rounding float arithmetic rarely land exactly on
/// the line.
pub fn classify_point_to_edge<F: Float>(
    point: Point2<F>,
    edge_start: Point2<F>,
    edge_end: Point2<F>,
) -> Side {
    let edge = edge_end - edge_start;
    let to_point = point - edge_start;
    let cross = edge.cross(to_point);

    if cross > F::zero() {
        Side::Left
    } else if cross < F::zero() {
        Side::Right
    } else {
        Side::On
    }
}

/// Distance from a point to the closed segment `a`–`b`.
///
/// Projects onto the segment's line, clamps to the segment, and
/// measures. A degenerate segment (`a == b`) yields the distance
/// to `a`.
#[inline]
pub fn point_to_segment_distance<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    Segment2::new(a, b).distance_to_point(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_left_of_edge() {
        // Bottom edge of a square traversed left to right: interior is left
        let side = classify_point_to_edge(
            Point2::new(5.0, 5.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_eq!(side, Side::Left);
    }

    #[test]
    fn test_right_of_edge() {
        let side = classify_point_to_edge(
            Point2::new(5.0, -5.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn test_on_edge_line() {
        let side = classify_point_to_edge(
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_eq!(side, Side::On);
    }

    #[test]
    fn test_on_extends_beyond_segment() {
        // "On" means on the infinite line, not within the segment
        let side = classify_point_to_edge(
            Point2::new(25.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_eq!(side, Side::On);
    }

    #[test]
    fn test_swapping_edge_direction_flips_side() {
        let p = Point2::new(3.0, 7.0);
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 2.0);
        let forward = classify_point_to_edge(p, a, b);
        let backward = classify_point_to_edge(p, b, a);
        assert_eq!(forward, Side::Left);
        assert_eq!(backward, Side::Right);
    }

    #[test]
    fn test_distance_interior_projection() {
        let d = point_to_segment_distance(
            Point2::new(5.0, 4.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_distance_clamps_to_endpoint() {
        let d = point_to_segment_distance(
            Point2::new(13.0, 4.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_distance_degenerate_segment() {
        let a = Point2::new(2.0, 2.0);
        let p = Point2::new(5.0, 6.0);
        let d = point_to_segment_distance(p, a, a);
        assert_relative_eq!(d, p.distance(a), epsilon = 1e-10);
    }
}
