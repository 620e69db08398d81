//! Error type used by the crate.

use thiserror::Error;

use crate::geometry_type::SegmentType;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The number of control points does not fit the geometry kind.
    #[error("{kind} requires {expected} control points, got {actual}")]
    ControlPointCount {
        /// Geometry kind that was being constructed.
        kind: &'static str,
        /// Human readable description of the accepted counts.
        expected: &'static str,
        /// Number of points that were supplied.
        actual: usize,
    },
    /// An opaque segment was requested for a segment type that has a dedicated representation.
    #[error("segment type {0:?} must be constructed through its own variant")]
    NotOpaque(SegmentType),
}
