//! Property tests for the geometric core.

use planigon::query::{closest_edge, find_nearest_edge, segment_intersection};
use planigon::{point_to_segment_distance, Point2, Polygon, PolygonId, Segment2};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

/// A completed convex polygon: regular n-gon with a random center,
/// radius, and phase.
fn convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
    (
        3usize..12,
        coord(),
        coord(),
        1.0..100.0f64,
        0.0..std::f64::consts::TAU,
    )
        .prop_map(|(n, cx, cy, radius, phase)| {
            let vertices = (0..n)
                .map(|i| {
                    let theta = phase + std::f64::consts::TAU * (i as f64) / (n as f64);
                    Point2::new(cx + radius * theta.cos(), cy + radius * theta.sin())
                })
                .collect();
            Polygon::closed(PolygonId(1), vertices)
        })
}

/// Independent containment oracle for convex polygons: the point is
/// inside iff it is on the same side of every directed edge.
fn convex_contains(polygon: &Polygon<f64>, p: Point2<f64>) -> bool {
    let n = polygon.vertices.len();
    let mut sign = 0.0f64;
    for i in 0..n {
        let a = polygon.vertices[i];
        let b = polygon.vertices[(i + 1) % n];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

proptest! {
    #[test]
    fn containment_agrees_with_convex_oracle(
        polygon in convex_polygon(),
        // Points well inside (toward the centroid) and well outside
        t in 0.0..0.5f64,
        vertex_pick in 0usize..12,
        outside_scale in 1.5..4.0f64,
    ) {
        let center = polygon.centroid();
        let v = polygon.vertices[vertex_pick % polygon.vertices.len()];

        let inside_point = center.lerp(v, t);
        prop_assert_eq!(polygon.contains(inside_point), true);
        prop_assert_eq!(convex_contains(&polygon, inside_point), true);

        let outside_point = Point2::new(
            center.x + (v.x - center.x) * outside_scale,
            center.y + (v.y - center.y) * outside_scale,
        );
        prop_assert_eq!(polygon.contains(outside_point), false);
        prop_assert_eq!(convex_contains(&polygon, outside_point), false);
    }

    #[test]
    fn degenerate_segment_distance_is_point_distance(
        px in coord(), py in coord(),
        ax in coord(), ay in coord(),
    ) {
        let p = Point2::new(px, py);
        let a = Point2::new(ax, ay);
        let d = point_to_segment_distance(p, a, a);
        prop_assert!((d - p.distance(a)).abs() < 1e-9);
    }

    #[test]
    fn intersection_is_symmetric(
        x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        x3 in coord(), y3 in coord(), x4 in coord(), y4 in coord(),
    ) {
        let s1 = Segment2::from_coords(x1, y1, x2, y2);
        let s2 = Segment2::from_coords(x3, y3, x4, y4);

        match (segment_intersection(s1, s2), segment_intersection(s2, s1)) {
            (Some(a), Some(b)) => {
                prop_assert!((a.x - b.x).abs() < 1e-6);
                prop_assert!((a.y - b.y).abs() < 1e-6);
            }
            (None, None) => {}
            (a, b) => prop_assert!(false, "asymmetric result: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn translate_round_trip_restores_vertices(
        polygon in convex_polygon(),
        dx in coord(), dy in coord(),
    ) {
        let mut moved = polygon.clone();
        moved.translate(dx, dy);
        moved.translate(-dx, -dy);
        for (v, o) in moved.vertices.iter().zip(&polygon.vertices) {
            prop_assert!((v.x - o.x).abs() < 1e-6);
            prop_assert!((v.y - o.y).abs() < 1e-6);
        }
    }

    #[test]
    fn full_turn_about_center_restores_vertices(polygon in convex_polygon()) {
        let mut turned = polygon.clone();
        turned.rotate_around_center(360.0);
        for (v, o) in turned.vertices.iter().zip(&polygon.vertices) {
            prop_assert!((v.x - o.x).abs() < 1e-6);
            prop_assert!((v.y - o.y).abs() < 1e-6);
        }
    }

    #[test]
    fn unit_scale_about_center_is_identity(polygon in convex_polygon()) {
        let mut scaled = polygon.clone();
        scaled.scale_around_center(1.0);
        for (v, o) in scaled.vertices.iter().zip(&polygon.vertices) {
            prop_assert!((v.x - o.x).abs() < 1e-9);
            prop_assert!((v.y - o.y).abs() < 1e-9);
        }
    }

    #[test]
    fn uncapped_scan_matches_infinite_cap(
        polygon in convex_polygon(),
        px in coord(), py in coord(),
    ) {
        let polygons = [polygon];
        let p = Point2::new(px, py);

        let capped = find_nearest_edge(p, &polygons, f64::INFINITY);
        let uncapped = closest_edge(p, &polygons);
        prop_assert_eq!(capped, uncapped);
    }

    #[test]
    fn zero_cap_rejects_off_edge_points(
        polygon in convex_polygon(),
        px in coord(), py in coord(),
    ) {
        let p = Point2::new(px, py);
        let on_some_edge = polygon
            .edges()
            .any(|(_, seg)| seg.distance_to_point(p) == 0.0);
        prop_assume!(!on_some_edge);

        let polygons = [polygon];
        prop_assert!(find_nearest_edge(p, &polygons, 0.0).is_none());
    }
}
