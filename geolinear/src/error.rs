//! Error types used by the crate.

use geolinear_types::{PatchType, SegmentType};
use thiserror::Error;

/// Linearization error.
///
/// Every variant is final for the call that produced it: nothing in the crate retries or falls back after an error.
#[derive(Debug, Error, PartialEq)]
pub enum LinearizationError {
    /// There is no linearization algorithm for the segment type.
    #[error("linearization of curve segment type {0:?} is not implemented")]
    UnsupportedSegmentType(SegmentType),
    /// Three points that must define a circle lie on a straight line.
    #[error("the points are collinear, no circle passes through them")]
    Collinear,
    /// Cubic spline control points are not strictly monotonic on the x axis.
    #[error("cubic spline control points must be strictly ascending or descending on the x axis")]
    InvalidControlPointOrdering,
    /// The criterion cannot be applied to the segment type.
    #[error("{criterion} criterion is not supported for {segment:?} segments")]
    UnsupportedCriterionForSegment {
        /// Short name of the criterion.
        criterion: &'static str,
        /// Segment type.
        segment: SegmentType,
    },
    /// The segment has a coordinate dimension the algorithm cannot handle.
    #[error("expected coordinate dimension {expected}, got {actual}")]
    DimensionMismatch {
        /// Supported dimension.
        expected: usize,
        /// Dimension of the input.
        actual: usize,
    },
    /// The spline equation system has no unique solution.
    #[error("the spline equation system is singular")]
    SingularSystem,
    /// The allowed error is larger than the diameter of the arc circle, so no point count can be derived from it.
    #[error("maximum error {error} exceeds the diameter of an arc with radius {radius}")]
    ErrorBoundExceedsDiameter {
        /// Requested maximum error.
        error: f64,
        /// Radius of the arc.
        radius: f64,
    },
    /// The allowed error is so small compared to the arc radius that the point count cannot be represented.
    #[error("maximum error {error} is too small for an arc with radius {radius}, set a maximum number of points")]
    ErrorBoundTooSmall {
        /// Requested maximum error.
        error: f64,
        /// Radius of the arc.
        radius: f64,
    },
    /// The segment has a number of control points its linearization cannot use.
    #[error("{segment:?} segment cannot be linearized with {actual} control points")]
    ControlPointCount {
        /// Segment type.
        segment: SegmentType,
        /// Number of control points of the segment.
        actual: usize,
    },
    /// The criterion parameters are out of range.
    #[error("invalid linearization criterion: {0}")]
    InvalidCriterion(String),
    /// A surface contains a patch that is not planar.
    #[error("linearization of non-planar {0:?} patches is not implemented")]
    NonPlanarPatch(PatchType),
}
