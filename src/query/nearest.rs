//! Nearest-edge search over a polygon collection.

use super::EdgeRef;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Finds the edge nearest to `point` across all completed polygons
/// with at least 2 vertices, if one lies within `max_distance`.
///
/// Every wrap-around edge of every eligible polygon is scanned and the
/// global minimum kept; `None` when no edge is close enough. Exact
/// distance ties go to the first edge encountered, in polygon order
/// then edge-index order.
pub fn find_nearest_edge<F: Float>(
    point: Point2<F>,
    polygons: &[Polygon<F>],
    max_distance: F,
) -> Option<EdgeRef<F>> {
    let mut min_distance = F::infinity();
    let mut nearest = None;

    for polygon in polygons {
        if !polygon.is_completed() || polygon.vertex_count() < 2 {
            continue;
        }

        for (index, segment) in polygon.edges() {
            let distance = segment.distance_to_point(point);
            if distance < min_distance && distance <= max_distance {
                min_distance = distance;
                nearest = Some(EdgeRef::bound(polygon.id(), index, segment));
            }
        }
    }

    nearest
}

/// Finds the globally closest edge to `point` with no distance cap.
///
/// Same scan as [`find_nearest_edge`] but always reports the closest
/// edge over completed polygons with at least 2 vertices; `None` only
/// when no such edge exists. Kept distinct from the capped search:
/// callers rely on it never filtering.
pub fn closest_edge<F: Float>(
    point: Point2<F>,
    polygons: &[Polygon<F>],
) -> Option<EdgeRef<F>> {
    let mut min_distance = F::infinity();
    let mut nearest = None;

    for polygon in polygons {
        if !polygon.is_completed() || polygon.vertex_count() < 2 {
            continue;
        }

        for (index, segment) in polygon.edges() {
            let distance = segment.distance_to_point(point);
            if distance < min_distance {
                min_distance = distance;
                nearest = Some(EdgeRef::bound(polygon.id(), index, segment));
            }
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::PolygonId;
    use crate::primitives::Point2;

    fn square(id: u32, x: f64, y: f64, size: f64) -> Polygon<f64> {
        Polygon::closed(
            PolygonId(id),
            vec![
                Point2::new(x, y),
                Point2::new(x + size, y),
                Point2::new(x + size, y + size),
                Point2::new(x, y + size),
            ],
        )
    }

    #[test]
    fn test_finds_bottom_edge() {
        let polygons = vec![square(1, 0.0, 0.0, 10.0)];
        let hit = find_nearest_edge(Point2::new(5.0, -2.0), &polygons, 5.0).unwrap();
        let src = hit.source.unwrap();
        assert_eq!(src.polygon, PolygonId(1));
        assert_eq!(src.index, 0);
        assert_eq!(hit.segment.start, Point2::new(0.0, 0.0));
        assert_eq!(hit.segment.end, Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_respects_max_distance() {
        let polygons = vec![square(1, 0.0, 0.0, 10.0)];
        assert!(find_nearest_edge(Point2::new(5.0, -20.0), &polygons, 5.0).is_none());
        assert!(find_nearest_edge(Point2::new(5.0, -20.0), &polygons, 25.0).is_some());
    }

    #[test]
    fn test_zero_cap_off_edge_is_none() {
        let polygons = vec![square(1, 0.0, 0.0, 10.0)];
        assert!(find_nearest_edge(Point2::new(5.0, -0.5), &polygons, 0.0).is_none());
    }

    #[test]
    fn test_skips_incomplete_polygons() {
        let mut open: Polygon<f64> = Polygon::new(PolygonId(1));
        open.push_vertex(Point2::new(0.0, 0.0));
        open.push_vertex(Point2::new(10.0, 0.0));
        open.push_vertex(Point2::new(10.0, 10.0));

        let polygons = vec![open];
        assert!(find_nearest_edge(Point2::new(5.0, 1.0), &polygons, 100.0).is_none());
        assert!(closest_edge(Point2::new(5.0, 1.0), &polygons).is_none());
    }

    #[test]
    fn test_two_vertex_completed_polygon_is_scanned() {
        let mut stub: Polygon<f64> = Polygon::new(PolygonId(9));
        stub.push_vertex(Point2::new(0.0, 0.0));
        stub.push_vertex(Point2::new(10.0, 0.0));
        stub.complete();

        let polygons = vec![stub];
        let hit = closest_edge(Point2::new(5.0, 3.0), &polygons).unwrap();
        assert_eq!(hit.source.unwrap().polygon, PolygonId(9));
    }

    #[test]
    fn test_picks_globally_nearest_across_polygons() {
        let polygons = vec![square(1, 0.0, 0.0, 10.0), square(2, 100.0, 0.0, 10.0)];

        let near_second = closest_edge(Point2::new(98.0, 5.0), &polygons).unwrap();
        assert_eq!(near_second.source.unwrap().polygon, PolygonId(2));

        let near_first = closest_edge(Point2::new(12.0, 5.0), &polygons).unwrap();
        assert_eq!(near_first.source.unwrap().polygon, PolygonId(1));
    }

    #[test]
    fn test_tie_breaks_to_first_in_iteration_order() {
        // Two identical squares stacked: every edge distance ties
        let polygons = vec![square(1, 0.0, 0.0, 10.0), square(2, 0.0, 0.0, 10.0)];
        let hit = closest_edge(Point2::new(5.0, -1.0), &polygons).unwrap();
        let src = hit.source.unwrap();
        assert_eq!(src.polygon, PolygonId(1));
        assert_eq!(src.index, 0);
    }

    #[test]
    fn test_uncapped_agrees_with_infinite_cap() {
        let polygons = vec![square(1, 0.0, 0.0, 10.0), square(2, 40.0, 40.0, 5.0)];
        let p = Point2::new(33.0, 21.0);
        let capped = find_nearest_edge(p, &polygons, f64::INFINITY).unwrap();
        let uncapped = closest_edge(p, &polygons).unwrap();
        assert_eq!(capped.source, uncapped.source);
        assert_eq!(capped.segment, uncapped.segment);
    }

    #[test]
    fn test_empty_collection() {
        let polygons: Vec<Polygon<f64>> = Vec::new();
        assert!(closest_edge(Point2::new(0.0, 0.0), &polygons).is_none());
        assert!(find_nearest_edge(Point2::new(0.0, 0.0), &polygons, 10.0).is_none());
    }
}
