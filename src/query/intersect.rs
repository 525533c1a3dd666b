//! Bounded segment-segment intersection.

use super::EdgeRef;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Solves the intersection of two bounded segments.
///
/// The segments are parameterized as `s1.start + ua·d1` and
/// `s2.start + ub·d2`. With `denom = d1 × d2`:
/// - `|denom| < 1e-9` reports `None` — parallel or near-parallel
///   lines, including collinear overlap;
/// - `ua` or `ub` outside `[0, 1]` inclusive reports `None` — the
///   infinite lines cross outside at least one segment;
/// - otherwise the point at `ua` along the first segment.
pub fn segment_intersection<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> Option<Point2<F>> {
    let d1 = s1.direction();
    let d2 = s2.direction();

    let denom = d1.cross(d2);
    if denom.abs() < F::from(1e-9).unwrap() {
        return None;
    }

    // Cramer's rule on s1.start + ua*d1 = s2.start + ub*d2
    let w = s1.start - s2.start;
    let ua = d2.cross(w) / denom;
    let ub = d1.cross(w) / denom;

    if ua < F::zero() || ua > F::one() || ub < F::zero() || ub > F::one() {
        return None;
    }

    Some(s1.point_at(ua))
}

/// Intersects two located edges, either of which may be absent.
///
/// An unset operand (an edge not yet picked or drawn) short-circuits
/// to `None` without evaluating anything.
pub fn intersect<F: Float>(
    edge1: Option<&EdgeRef<F>>,
    edge2: Option<&EdgeRef<F>>,
) -> Option<Point2<F>> {
    let (e1, e2) = (edge1?, edge2?);
    segment_intersection(e1.segment, e2.segment)
}
