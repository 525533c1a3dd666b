//! Error types for editing-session operations.

use thiserror::Error;

/// Errors reported by the editing session.
///
/// The geometric core itself never errors: degenerate input yields
/// `false` or `None`. Only session operations with a real precondition
/// (an active draft, a selection) fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Completing a polygon requires at least 3 vertices.
    #[error("polygon needs at least 3 vertices to complete, has {count}")]
    TooFewVertices {
        /// Vertices in the draft when completion was attempted.
        count: usize,
    },

    /// No polygon is currently being authored.
    #[error("no polygon is being authored")]
    NoActivePolygon,

    /// A transform was requested with no polygon selected.
    #[error("no polygon is selected")]
    NoSelection,
}
