//! The polygon entity and its vertex-level operations.

use crate::primitives::{Affine2, Point2, Segment2};
use num_traits::Float;
use std::fmt;

/// Opaque identifier assigned to a polygon by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub u32);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An authored polygon: an ordered vertex list with an id and a
/// completion flag.
///
/// Incomplete polygons are open polylines with zero edges. A completed
/// polygon closes the loop from its last vertex back to its first, so
/// its edge count equals its vertex count.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    id: PolygonId,
    /// The vertices in authoring order.
    pub vertices: Vec<Point2<F>>,
    completed: bool,
}

impl<F: Float> Polygon<F> {
    /// Creates an empty, incomplete polygon.
    pub fn new(id: PolygonId) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            completed: false,
        }
    }

    /// Creates a completed polygon directly from a vertex list.
    pub fn closed(id: PolygonId, vertices: Vec<Point2<F>>) -> Self {
        Self {
            id,
            vertices,
            completed: true,
        }
    }

    /// Returns this polygon's identifier.
    #[inline]
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// Returns true once the polygon has been closed.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Closes the polygon. The vertex count is frozen from here on;
    /// positions remain mutable through the transform methods.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex to an incomplete polygon.
    pub fn push_vertex(&mut self, p: Point2<F>) {
        debug_assert!(!self.completed, "appending to a completed polygon");
        self.vertices.push(p);
    }

    /// Removes and returns the most recently added vertex of an
    /// incomplete polygon.
    pub fn pop_vertex(&mut self) -> Option<Point2<F>> {
        debug_assert!(!self.completed, "popping from a completed polygon");
        self.vertices.pop()
    }

    /// Returns the number of edges: the vertex count for a completed
    /// polygon with at least 2 vertices, zero otherwise.
    pub fn edge_count(&self) -> usize {
        if self.completed && self.vertices.len() >= 2 {
            self.vertices.len()
        } else {
            0
        }
    }

    /// Returns edge `i`, the segment from `vertices[i]` to
    /// `vertices[(i + 1) % n]`, or `None` when out of range.
    pub fn edge(&self, i: usize) -> Option<Segment2<F>> {
        if i >= self.edge_count() {
            return None;
        }
        let j = (i + 1) % self.vertices.len();
        Some(Segment2::new(self.vertices[i], self.vertices[j]))
    }

    /// Iterates over `(index, segment)` for every edge, wrap-around
    /// included. Empty for incomplete polygons.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Segment2<F>)> + '_ {
        let n = self.edge_count();
        (0..n).map(move |i| {
            let j = (i + 1) % self.vertices.len();
            (i, Segment2::new(self.vertices[i], self.vertices[j]))
        })
    }

    /// Tests whether a point lies inside the polygon.
    ///
    /// See [`point_in_polygon`]. Fails closed (`false`) with fewer
    /// than 3 vertices.
    pub fn contains(&self, p: Point2<F>) -> bool {
        point_in_polygon(&self.vertices, p)
    }

    /// Returns the arithmetic mean of the vertices, the pivot used by
    /// the center-relative transforms. `(0, 0)` when empty.
    ///
    /// This is the vertex centroid, not the area centroid.
    pub fn centroid(&self) -> Point2<F> {
        vertex_centroid(&self.vertices)
    }

    /// Moves every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: F, dy: F) {
        self.apply(Affine2::translation(dx, dy));
    }

    /// Rotates every vertex by `angle_deg` degrees around `pivot`.
    pub fn rotate_around(&mut self, pivot: Point2<F>, angle_deg: F) {
        self.apply(Affine2::rotation_around(angle_deg.to_radians(), pivot));
    }

    /// Rotates every vertex by `angle_deg` degrees around the vertex
    /// centroid.
    pub fn rotate_around_center(&mut self, angle_deg: F) {
        let center = self.centroid();
        self.rotate_around(center, angle_deg);
    }

    /// Scales every vertex's offset from `pivot` by `factor`.
    ///
    /// The factor is not validated: 0 collapses the polygon onto the
    /// pivot, negative values mirror through it.
    pub fn scale_around(&mut self, pivot: Point2<F>, factor: F) {
        self.apply(Affine2::scale_around(factor, pivot));
    }

    /// Scales every vertex's offset from the vertex centroid by
    /// `factor`.
    pub fn scale_around_center(&mut self, factor: F) {
        let center = self.centroid();
        self.scale_around(center, factor);
    }

    /// Applies a transform to every vertex in place. Vertex count and
    /// polygon identity are unaffected.
    fn apply(&mut self, m: Affine2<F>) {
        m.apply_points(&mut self.vertices);
    }
}

/// Returns the arithmetic mean of a vertex set, or the origin when
/// the set is empty.
pub fn vertex_centroid<F: Float>(vertices: &[Point2<F>]) -> Point2<F> {
    if vertices.is_empty() {
        return Point2::origin();
    }

    let mut sum_x = F::zero();
    let mut sum_y = F::zero();
    for v in vertices {
        sum_x = sum_x + v.x;
        sum_y = sum_y + v.y;
    }

    let n = F::from(vertices.len()).unwrap();
    Point2::new(sum_x / n, sum_y / n)
}

/// Tests whether a point lies inside a polygon using the even-odd
/// (ray casting) rule.
///
/// Fails closed (`false`) with fewer than 3 vertices. The horizontal
/// ray from the point toggles an inside flag at each edge crossing,
/// using strict inequalities; points exactly on the boundary may
/// report either way. That parity is implementation-defined, standard
/// ray-casting behavior.
pub fn point_in_polygon<F: Float>(vertices: &[Point2<F>], p: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > p.y) != (vj.y > p.y))
            && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
