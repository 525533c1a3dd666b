//! planigon - planar polygon geometry for interactive editors.
//!
//! The numerical core of a polygon-drawing canvas, with the canvas cut
//! away: containment testing, point/edge classification, nearest-edge
//! search across a collection, bounded segment intersection, and
//! in-place affine transforms of vertex sets. A [`session::Workspace`]
//! layers an explicit editing state machine on top for callers that
//! drive the engine from pointer events.
//!
//! Everything is synchronous and allocation-light; degenerate input
//! yields `false`/`None`, never a panic or an error.
//!
//! # Example
//!
//! ```
//! use planigon::{Point2, Polygon, PolygonId, Segment2};
//! use planigon::query::{find_nearest_edge, segment_intersection};
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
//!
//! let nearest = find_nearest_edge(Point2::new(5.0, -1.0), std::slice::from_ref(&square), 5.0);
//! assert_eq!(nearest.unwrap().source.unwrap().index, 0);
//!
//! let crossing = segment_intersection(
//!     Segment2::from_coords(0.0, 0.0, 10.0, 10.0),
//!     Segment2::from_coords(0.0, 10.0, 10.0, 0.0),
//! );
//! assert_eq!(crossing, Some(Point2::new(5.0, 5.0)));
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod query;
pub mod session;

pub use error::SessionError;
pub use polygon::{
    classify_point_to_edge, point_in_polygon, point_to_segment_distance, vertex_centroid, Polygon,
    PolygonId, Side,
};
pub use primitives::{Affine2, Point2, Segment2, Vec2};
pub use query::{closest_edge, find_nearest_edge, intersect, EdgeRef, EdgeSource};
pub use session::{Mode, Workspace};
