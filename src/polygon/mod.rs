//! Polygon entity and point classification.
//!
//! A [`Polygon`] owns an ordered vertex list, an opaque id, and a
//! `completed` flag. While incomplete it is an open polyline being
//! authored (vertices may be appended and popped, no edges). Once
//! completed it is a closed loop: edge `i` connects `vertices[i]` to
//! `vertices[(i + 1) % n]`, the vertex count is frozen, and only
//! vertex positions may change (through the transform methods).
//!
//! # Example
//!
//! ```
//! use planigon::polygon::{Polygon, PolygonId};
//! use planigon::primitives::Point2;
//!
//! let square = Polygon::closed(
//!     PolygonId(1),
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(10.0, 0.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(0.0, 10.0),
//!     ],
//! );
//!
//! assert!(square.contains(Point2::new(5.0, 5.0)));
//! assert!(!square.contains(Point2::new(15.0, 5.0)));
//! let c = square.centroid();
//! assert_eq!((c.x, c.y), (5.0, 5.0));
//! ```

mod classify;
mod core;

pub use classify::{classify_point_to_edge, point_to_segment_distance, Side};
pub use core::{point_in_polygon, vertex_centroid, Polygon, PolygonId};
