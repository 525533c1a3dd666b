//! Edge queries across polygon collections.
//!
//! [`find_nearest_edge`] and [`closest_edge`] locate the edge nearest
//! to a probe point; [`intersect`] solves bounded segment-segment
//! intersection between two located edges.

mod edge_ref;
mod intersect;
mod nearest;

pub use edge_ref::{EdgeRef, EdgeSource};
pub use intersect::{intersect, segment_intersection};
pub use nearest::{closest_edge, find_nearest_edge};
