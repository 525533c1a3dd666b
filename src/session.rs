//! Editing-session state machine.
//!
//! [`Workspace`] owns the polygon collection, the draft being
//! authored, the selection, and the probe results. The interaction
//! mode is a single [`Mode`] value; entering a mode implicitly leaves
//! the previous one and resets probe artifacts, so no combination of
//! stale mode flags can coexist.
//!
//! The caller (a UI layer) maps pointer events into workspace
//! coordinates and calls one operation per event; the workspace
//! returns plain data and the caller re-renders. All operations are
//! synchronous and assume exclusive single-writer access.

use crate::error::SessionError;
use crate::polygon::{classify_point_to_edge, Polygon, PolygonId, Side};
use crate::primitives::{Point2, Segment2};
use crate::query::{closest_edge, find_nearest_edge, intersect, segment_intersection, EdgeRef};
use num_traits::Float;
use tracing::debug;

/// Snap radius for picking an existing edge in intersect mode.
const EDGE_PICK_RADIUS: f64 = 10.0;

/// Hit radius for vertex and edge proximity during selection.
const SELECT_RADIUS: f64 = 8.0;

/// The interaction mode of the session.
///
/// Exactly one mode is active at a time; transitions go through
/// [`Workspace::set_mode`] or [`Workspace::toggle_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No draft and no tool armed; clicks do nothing.
    Idle,
    /// A draft polygon is being authored; clicks append vertices.
    Authoring,
    /// Clicks test which polygons contain the clicked point.
    PointProbe,
    /// Clicks report the nearest edge and the point's side of it.
    EdgeProbe,
    /// Clicks select the topmost polygon under the cursor.
    Selecting,
    /// Clicks pick or draw two edges and intersect them.
    EdgeIntersecting,
    /// The next click scales the selected polygon around that point.
    ScalingAtPoint,
    /// Clicks scale the selected polygon around its centroid.
    ScalingAtCenter,
}

/// Progress of the two-edge pick in [`Mode::EdgeIntersecting`].
///
/// Each pick either snaps to an existing edge near the click or draws
/// a freehand segment in two clicks (anchor, then finish).
#[derive(Debug, Clone, PartialEq)]
pub enum EdgePick<F> {
    /// No edge chosen yet.
    First,
    /// The first pick is a freehand draw anchored at a point.
    DrawingFirst {
        /// First click of the freehand segment.
        anchor: Point2<F>,
    },
    /// First edge chosen; waiting for the second.
    Second {
        /// The chosen first edge.
        first: EdgeRef<F>,
    },
    /// The second pick is a freehand draw anchored at a point.
    DrawingSecond {
        /// The chosen first edge.
        first: EdgeRef<F>,
        /// First click of the freehand segment.
        anchor: Point2<F>,
    },
    /// Both edges chosen. A further click re-picks the second edge.
    Complete {
        /// The chosen first edge.
        first: EdgeRef<F>,
        /// The chosen second edge.
        second: EdgeRef<F>,
    },
}

/// Result of an edge probe: the nearest edge and which side of it the
/// probe point falls on.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeProbe<F> {
    /// The nearest edge across the collection.
    pub edge: EdgeRef<F>,
    /// The probe point classified against that edge's line.
    pub side: Side,
}

/// The editing session: polygon collection, draft, selection, mode,
/// and probe results, bundled as one explicitly-passed value.
#[derive(Debug, Clone)]
pub struct Workspace<F> {
    polygons: Vec<Polygon<F>>,
    draft: Option<Polygon<F>>,
    next_id: u32,
    selected: Option<PolygonId>,
    mode: Mode,
    scale_factor: F,
    test_point: Option<Point2<F>>,
    containment_hits: Vec<PolygonId>,
    edge_report: Option<EdgeProbe<F>>,
    edge_pick: EdgePick<F>,
    intersection: Option<Point2<F>>,
}

impl<F: Float + std::fmt::Debug> Default for Workspace<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + std::fmt::Debug> Workspace<F> {
    /// Creates an empty workspace in [`Mode::Idle`].
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            draft: None,
            next_id: 1,
            selected: None,
            mode: Mode::Idle,
            scale_factor: F::from(1.2).unwrap(),
            test_point: None,
            containment_hits: Vec::new(),
            edge_report: None,
            edge_pick: EdgePick::First,
            intersection: None,
        }
    }

    /// The stored (completed) polygons, in creation order.
    pub fn polygons(&self) -> &[Polygon<F>] {
        &self.polygons
    }

    /// The polygon currently being authored, if any.
    pub fn draft(&self) -> Option<&Polygon<F>> {
        self.draft.as_ref()
    }

    /// The active interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The currently selected polygon's id, if any.
    pub fn selected(&self) -> Option<PolygonId> {
        self.selected
    }

    /// The last probe point, if a probe mode has been used.
    pub fn test_point(&self) -> Option<Point2<F>> {
        self.test_point
    }

    /// Polygons containing the last point probe.
    pub fn containment_hits(&self) -> &[PolygonId] {
        &self.containment_hits
    }

    /// The last edge-probe report.
    pub fn edge_report(&self) -> Option<&EdgeProbe<F>> {
        self.edge_report.as_ref()
    }

    /// Progress of the intersect-mode edge pick.
    pub fn edge_pick(&self) -> &EdgePick<F> {
        &self.edge_pick
    }

    /// The intersection of the two picked edges, when both are chosen
    /// and their segments cross.
    pub fn intersection(&self) -> Option<Point2<F>> {
        self.intersection
    }

    /// Sets the factor used by the click-driven scale modes.
    pub fn set_scale_factor(&mut self, factor: F) {
        self.scale_factor = factor;
    }

    /// Looks up the selected polygon in the collection, falling back
    /// to the draft.
    pub fn selected_polygon(&self) -> Option<&Polygon<F>> {
        let id = self.selected?;
        self.polygons
            .iter()
            .find(|p| p.id() == id)
            .or_else(|| self.draft.as_ref().filter(|d| d.id() == id))
    }

    fn selected_polygon_mut(&mut self) -> Result<&mut Polygon<F>, SessionError> {
        let id = self.selected.ok_or(SessionError::NoSelection)?;
        if let Some(i) = self.polygons.iter().position(|p| p.id() == id) {
            return Ok(&mut self.polygons[i]);
        }
        self.draft
            .as_mut()
            .filter(|d| d.id() == id)
            .ok_or(SessionError::NoSelection)
    }

    fn base_mode(&self) -> Mode {
        if self.draft.is_some() {
            Mode::Authoring
        } else {
            Mode::Idle
        }
    }

    fn reset_probes(&mut self) {
        self.test_point = None;
        self.containment_hits.clear();
        self.edge_report = None;
        self.edge_pick = EdgePick::First;
        self.intersection = None;
    }

    /// Switches to `mode`, leaving whatever mode was active and
    /// resetting probe artifacts. The selection survives transitions.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.reset_probes();
    }

    /// Toggles `mode`: arms it if inactive, otherwise drops back to
    /// authoring (when a draft exists) or idle.
    pub fn toggle_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            self.set_mode(self.base_mode());
        } else {
            self.set_mode(mode);
        }
    }

    /// Starts authoring a new polygon, storing the previous draft
    /// first if it has any vertices (it is marked completed as-is,
    /// even below 3 vertices, and becomes the selection).
    ///
    /// Returns the new draft's id.
    pub fn begin_polygon(&mut self) -> PolygonId {
        if let Some(mut old) = self.draft.take() {
            if !old.is_empty() {
                old.complete();
                let id = old.id();
                debug!("storing draft {} with {} vertices", id, old.vertex_count());
                self.polygons.push(old);
                self.selected = Some(id);
            }
        }

        let id = PolygonId(self.next_id);
        self.next_id += 1;
        self.draft = Some(Polygon::new(id));
        self.set_mode(Mode::Authoring);
        debug!("begin polygon {}", id);
        id
    }

    /// Appends a vertex to the draft.
    pub fn add_vertex(&mut self, p: Point2<F>) -> Result<(), SessionError> {
        let draft = self.draft.as_mut().ok_or(SessionError::NoActivePolygon)?;
        draft.push_vertex(p);
        Ok(())
    }

    /// Removes and returns the draft's most recent vertex. `None`
    /// when there is no draft or it is empty.
    pub fn pop_vertex(&mut self) -> Option<Point2<F>> {
        self.draft.as_mut()?.pop_vertex()
    }

    /// Closes the draft and moves it into the collection, selecting
    /// it. Requires at least 3 vertices.
    pub fn complete_polygon(&mut self) -> Result<PolygonId, SessionError> {
        let mut polygon = self.draft.take().ok_or(SessionError::NoActivePolygon)?;
        let count = polygon.vertex_count();
        if count < 3 {
            self.draft = Some(polygon);
            return Err(SessionError::TooFewVertices { count });
        }

        polygon.complete();
        let id = polygon.id();
        debug!("completed polygon {} with {} vertices", id, count);
        self.polygons.push(polygon);
        self.selected = Some(id);
        self.set_mode(Mode::Idle);
        Ok(id)
    }

    /// Bulk reset: destroys every polygon, the draft, the selection,
    /// all probe state, and the id counter.
    pub fn clear(&mut self) {
        debug!("clearing {} polygons", self.polygons.len());
        self.polygons.clear();
        self.draft = None;
        self.next_id = 1;
        self.selected = None;
        self.reset_probes();
        self.mode = Mode::Idle;
    }

    /// Routes a click to the operation the active mode calls for.
    pub fn handle_click(&mut self, p: Point2<F>) -> Result<(), SessionError> {
        match self.mode {
            Mode::Idle => Ok(()),
            Mode::Authoring => self.add_vertex(p),
            Mode::PointProbe => {
                self.probe_point(p);
                Ok(())
            }
            Mode::EdgeProbe => {
                self.probe_edge(p);
                Ok(())
            }
            Mode::Selecting => {
                self.select_at(p);
                Ok(())
            }
            Mode::EdgeIntersecting => {
                self.pick_intersect_edge(p);
                Ok(())
            }
            Mode::ScalingAtPoint => self.scale_at(p, self.scale_factor),
            Mode::ScalingAtCenter => self.scale_selected_around_center(self.scale_factor),
        }
    }

    /// Records `p` as the probe point and collects every completed
    /// polygon with at least 3 vertices that contains it.
    pub fn probe_point(&mut self, p: Point2<F>) -> &[PolygonId] {
        self.test_point = Some(p);
        self.containment_hits = self
            .polygons
            .iter()
            .filter(|poly| poly.is_completed() && poly.vertex_count() >= 3 && poly.contains(p))
            .map(|poly| poly.id())
            .collect();
        &self.containment_hits
    }

    /// Records `p` as the probe point and reports the globally
    /// nearest edge, with `p` classified against it. `None` when the
    /// collection has no edges.
    pub fn probe_edge(&mut self, p: Point2<F>) -> Option<&EdgeProbe<F>> {
        self.test_point = Some(p);
        self.edge_report = closest_edge(p, &self.polygons).map(|edge| {
            let side = classify_point_to_edge(p, edge.segment.start, edge.segment.end);
            EdgeProbe { edge, side }
        });
        self.edge_report.as_ref()
    }

    /// Selects the topmost polygon under `p`, checking most recently
    /// stored polygons first: containment, then vertex proximity,
    /// then edge proximity, then the draft's vertices. A miss clears
    /// the selection.
    pub fn select_at(&mut self, p: Point2<F>) -> Option<PolygonId> {
        let radius = F::from(SELECT_RADIUS).unwrap();

        let mut found = None;
        for polygon in self.polygons.iter().rev() {
            if polygon.is_completed() && polygon.vertex_count() >= 3 && polygon.contains(p) {
                found = Some(polygon.id());
                break;
            }
            if polygon.vertices.iter().any(|v| p.distance(*v) <= radius) {
                found = Some(polygon.id());
                break;
            }
            if polygon
                .edges()
                .any(|(_, seg)| seg.distance_to_point(p) <= radius)
            {
                found = Some(polygon.id());
                break;
            }
        }

        if found.is_none() {
            if let Some(draft) = &self.draft {
                if draft.vertices.iter().any(|v| p.distance(*v) <= radius) {
                    found = Some(draft.id());
                }
            }
        }

        debug!("select at {:?}: {:?}", (p.x, p.y), found);
        self.selected = found;
        found
    }

    /// Advances the intersect-mode pick with a click at `p`.
    ///
    /// A click near an existing edge (within the snap radius) picks
    /// it; a click in the open either anchors a freehand segment or
    /// finishes one. Once both edges are chosen the intersection is
    /// solved; later clicks re-pick the second edge.
    pub fn pick_intersect_edge(&mut self, p: Point2<F>) {
        let snap = F::from(EDGE_PICK_RADIUS).unwrap();
        let picked = find_nearest_edge(p, &self.polygons, snap);

        self.edge_pick = match std::mem::replace(&mut self.edge_pick, EdgePick::First) {
            EdgePick::First => match picked {
                Some(first) => EdgePick::Second { first },
                None => EdgePick::DrawingFirst { anchor: p },
            },
            EdgePick::DrawingFirst { anchor } => EdgePick::Second {
                first: EdgeRef::adhoc(Segment2::new(anchor, p)),
            },
            EdgePick::Second { first } | EdgePick::Complete { first, .. } => match picked {
                Some(second) => EdgePick::Complete { first, second },
                None => EdgePick::DrawingSecond { first, anchor: p },
            },
            EdgePick::DrawingSecond { first, anchor } => EdgePick::Complete {
                first,
                second: EdgeRef::adhoc(Segment2::new(anchor, p)),
            },
        };

        self.intersection = match &self.edge_pick {
            EdgePick::Complete { first, second } => intersect(Some(first), Some(second)),
            _ => None,
        };
    }

    /// Live intersection under the cursor while a freehand second
    /// edge is being drawn; the stored result once the pick is
    /// complete. Does not mutate the pick.
    pub fn intersection_preview(&self, cursor: Point2<F>) -> Option<Point2<F>> {
        match &self.edge_pick {
            EdgePick::DrawingSecond { first, anchor } => {
                segment_intersection(first.segment, Segment2::new(*anchor, cursor))
            }
            EdgePick::Complete { .. } => self.intersection,
            _ => None,
        }
    }

    /// Translates the selected polygon by `(dx, dy)`.
    pub fn translate_selected(&mut self, dx: F, dy: F) -> Result<(), SessionError> {
        self.selected_polygon_mut()?.translate(dx, dy);
        Ok(())
    }

    /// Rotates the selected polygon around `pivot` by `angle_deg`
    /// degrees.
    pub fn rotate_selected(&mut self, pivot: Point2<F>, angle_deg: F) -> Result<(), SessionError> {
        self.selected_polygon_mut()?.rotate_around(pivot, angle_deg);
        Ok(())
    }

    /// Rotates the selected polygon around its vertex centroid.
    pub fn rotate_selected_around_center(&mut self, angle_deg: F) -> Result<(), SessionError> {
        self.selected_polygon_mut()?.rotate_around_center(angle_deg);
        Ok(())
    }

    /// Scales the selected polygon around `pivot` by `factor`.
    pub fn scale_selected(&mut self, pivot: Point2<F>, factor: F) -> Result<(), SessionError> {
        self.selected_polygon_mut()?.scale_around(pivot, factor);
        Ok(())
    }

    /// Scales the selected polygon around its vertex centroid.
    pub fn scale_selected_around_center(&mut self, factor: F) -> Result<(), SessionError> {
        self.selected_polygon_mut()?.scale_around_center(factor);
        Ok(())
    }

    /// Scales the selected polygon around the clicked point, then
    /// drops out of [`Mode::ScalingAtPoint`].
    pub fn scale_at(&mut self, p: Point2<F>, factor: F) -> Result<(), SessionError> {
        self.scale_selected(p, factor)?;
        self.set_mode(self.base_mode());
        Ok(())
    }
}
