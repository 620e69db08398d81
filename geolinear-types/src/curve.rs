//! Curves and rings.
//!
//! A [`Curve`] is one of:
//! * a [`LineString`] - a curve that consists of straight segments only;
//! * a [`SegmentedCurve`] - a sequence of arbitrary [`CurveSegment`]s;
//! * a [`Ring`] - a closed curve, either a [`LinearRing`] or a [`CompositeRing`] made of member curves.
//!
//! The distinction between rings and other curves is significant: rings bound surfaces, so linearizing a ring must
//! produce a ring again.

use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::curve_segment::CurveSegment;
use crate::geometry_type::CurveType;
use crate::points::Points;

/// Curve geometry. See module level documentation for details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// Linear curve.
    LineString(LineString),
    /// Curve made of segments.
    Segmented(SegmentedCurve),
    /// Closed curve.
    Ring(Ring),
}

impl Curve {
    /// Kind of the curve.
    pub fn curve_type(&self) -> CurveType {
        match self {
            Curve::LineString(_) => CurveType::LineString,
            Curve::Segmented(_) => CurveType::Curve,
            Curve::Ring(ring) => ring.curve_type(),
        }
    }

    /// Identifier of the curve.
    pub fn id(&self) -> Option<&str> {
        match self {
            Curve::LineString(v) => v.id(),
            Curve::Segmented(v) => v.id(),
            Curve::Ring(v) => v.id(),
        }
    }

    /// Coordinate system of the curve.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            Curve::LineString(v) => v.crs(),
            Curve::Segmented(v) => v.crs(),
            Curve::Ring(v) => v.crs(),
        }
    }
}

/// Curve consisting of straight segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    id: Option<String>,
    crs: Option<Crs>,
    points: Points,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(id: Option<String>, crs: Option<Crs>, points: impl Into<Points>) -> Self {
        Self {
            id,
            crs,
            points: points.into(),
        }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Vertices.
    pub fn points(&self) -> &Points {
        &self.points
    }
}

/// Curve consisting of a sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentedCurve {
    id: Option<String>,
    crs: Option<Crs>,
    segments: Vec<CurveSegment>,
}

impl SegmentedCurve {
    /// Creates a new curve.
    pub fn new(id: Option<String>, crs: Option<Crs>, segments: Vec<CurveSegment>) -> Self {
        Self { id, crs, segments }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Segments in curve order.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Returns true if every segment is a [`CurveSegment::LineString`].
    pub fn is_linear(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, CurveSegment::LineString(_)))
    }
}

/// Closed curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ring {
    /// Ring of straight segments.
    Linear(LinearRing),
    /// Ring assembled from member curves.
    Composite(CompositeRing),
}

impl Ring {
    /// Kind of the ring.
    pub fn curve_type(&self) -> CurveType {
        match self {
            Ring::Linear(_) => CurveType::LinearRing,
            Ring::Composite(_) => CurveType::Ring,
        }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        match self {
            Ring::Linear(v) => v.id(),
            Ring::Composite(v) => v.id(),
        }
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            Ring::Linear(v) => v.crs(),
            Ring::Composite(v) => v.crs(),
        }
    }
}

/// Ring consisting of straight segments. The first and the last points are the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRing {
    id: Option<String>,
    crs: Option<Crs>,
    points: Points,
}

impl LinearRing {
    /// Creates a new linear ring.
    pub fn new(id: Option<String>, crs: Option<Crs>, points: impl Into<Points>) -> Self {
        Self {
            id,
            crs,
            points: points.into(),
        }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Vertices, including the closing point.
    pub fn points(&self) -> &Points {
        &self.points
    }
}

/// Ring made of member curves, where each member starts at the end of the previous one and the last member ends at
/// the start of the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeRing {
    id: Option<String>,
    crs: Option<Crs>,
    members: Vec<Curve>,
}

impl CompositeRing {
    /// Creates a new ring.
    pub fn new(id: Option<String>, crs: Option<Crs>, members: Vec<Curve>) -> Self {
        Self { id, crs, members }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Member curves in ring order.
    pub fn members(&self) -> &[Curve] {
        &self.members
    }
}

impl From<LineString> for Curve {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<SegmentedCurve> for Curve {
    fn from(value: SegmentedCurve) -> Self {
        Self::Segmented(value)
    }
}

impl From<Ring> for Curve {
    fn from(value: Ring) -> Self {
        Self::Ring(value)
    }
}

impl From<LinearRing> for Ring {
    fn from(value: LinearRing) -> Self {
        Self::Linear(value)
    }
}

impl From<CompositeRing> for Ring {
    fn from(value: CompositeRing) -> Self {
        Self::Composite(value)
    }
}
