//! Curve segments: the building blocks of [`SegmentedCurve`](crate::SegmentedCurve)s.
//!
//! A segment is either linear ([`LineStringSegment`]) or one of the curved kinds that have to be linearized before
//! they can be drawn with straight lines. Segment kinds that have no linearization algorithm in this workspace are
//! represented by [`OpaqueSegment`], which keeps only the kind and the control points.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry_type::SegmentType;
use crate::point::Point;
use crate::points::Points;

/// A segment of a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveSegment {
    /// Straight line segments.
    LineString(LineStringSegment),
    /// Circular arc.
    Arc(Arc),
    /// Full circle.
    Circle(Circle),
    /// Connected circular arcs.
    ArcString(ArcString),
    /// Cubic spline.
    CubicSpline(CubicSpline),
    /// Geodesic string.
    GeodesicString(GeodesicString),
    /// Any other segment kind.
    Opaque(OpaqueSegment),
}

impl CurveSegment {
    /// Kind of the segment.
    pub fn segment_type(&self) -> SegmentType {
        match self {
            CurveSegment::LineString(_) => SegmentType::LineStringSegment,
            CurveSegment::Arc(_) => SegmentType::Arc,
            CurveSegment::Circle(_) => SegmentType::Circle,
            CurveSegment::ArcString(_) => SegmentType::ArcString,
            CurveSegment::CubicSpline(_) => SegmentType::CubicSpline,
            CurveSegment::GeodesicString(_) => SegmentType::GeodesicString,
            CurveSegment::Opaque(v) => v.segment_type(),
        }
    }

    /// Control points of the segment in their defining order.
    pub fn control_points(&self) -> &[Point] {
        match self {
            CurveSegment::LineString(v) => v.points(),
            CurveSegment::Arc(v) => v.points(),
            CurveSegment::Circle(v) => v.points(),
            CurveSegment::ArcString(v) => v.control_points(),
            CurveSegment::CubicSpline(v) => v.control_points(),
            CurveSegment::GeodesicString(v) => v.control_points(),
            CurveSegment::Opaque(v) => v.control_points(),
        }
    }
}

/// Linear segment: a polyline through its points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineStringSegment {
    points: Points,
}

impl LineStringSegment {
    /// Creates a new segment.
    pub fn new(points: impl Into<Points>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Vertices of the polyline.
    pub fn points(&self) -> &Points {
        &self.points
    }

    /// Consumes the segment and returns its vertices.
    pub fn into_points(self) -> Points {
        self.points
    }
}

/// Circular arc from `p0` through `p1` to `p2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    points: [Point; 3],
}

impl Arc {
    /// Creates a new arc. The points are not checked for collinearity: collinear arcs are linearized into a straight
    /// line.
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Start point.
    pub fn p0(&self) -> &Point {
        &self.points[0]
    }

    /// Intermediate point.
    pub fn p1(&self) -> &Point {
        &self.points[1]
    }

    /// End point.
    pub fn p2(&self) -> &Point {
        &self.points[2]
    }

    /// All three control points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Full circle through three points.
///
/// The circle starts and ends at `p0` and passes through `p1` and `p2` in that order, which also defines its
/// orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    points: [Point; 3],
}

impl Circle {
    /// Creates a new circle.
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Start (and end) point.
    pub fn p0(&self) -> &Point {
        &self.points[0]
    }

    /// Second point.
    pub fn p1(&self) -> &Point {
        &self.points[1]
    }

    /// Third point.
    pub fn p2(&self) -> &Point {
        &self.points[2]
    }

    /// All three control points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Sequence of arcs where each arc starts at the end point of the previous one.
///
/// Control points `p0, p1, p2, p3, p4` describe the arcs `(p0, p1, p2)` and `(p2, p3, p4)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcStringRaw")]
pub struct ArcString {
    control_points: Points,
}

impl ArcString {
    /// Creates a new arc string. The number of control points must be odd and at least 3.
    pub fn new(control_points: impl Into<Points>) -> Result<Self, GeometryError> {
        let control_points = control_points.into();
        let count = control_points.len();
        if count < 3 || count % 2 == 0 {
            return Err(GeometryError::ControlPointCount {
                kind: "arc string",
                expected: "an odd number of at least 3",
                actual: count,
            });
        }

        Ok(Self { control_points })
    }

    /// Control points.
    pub fn control_points(&self) -> &Points {
        &self.control_points
    }

    /// Number of arcs in the string.
    pub fn num_arcs(&self) -> usize {
        (self.control_points.len() - 1) / 2
    }
}

/// Cubic spline through the control points with given tangent directions at the start and the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CubicSplineRaw")]
pub struct CubicSpline {
    control_points: Points,
    vector_at_start: Vector2<f64>,
    vector_at_end: Vector2<f64>,
}

impl CubicSpline {
    /// Creates a new spline. At least 2 control points are required.
    pub fn new(
        control_points: impl Into<Points>,
        vector_at_start: Vector2<f64>,
        vector_at_end: Vector2<f64>,
    ) -> Result<Self, GeometryError> {
        let control_points = control_points.into();
        if control_points.len() < 2 {
            return Err(GeometryError::ControlPointCount {
                kind: "cubic spline",
                expected: "at least 2",
                actual: control_points.len(),
            });
        }

        Ok(Self {
            control_points,
            vector_at_start,
            vector_at_end,
        })
    }

    /// Control points.
    pub fn control_points(&self) -> &Points {
        &self.control_points
    }

    /// Tangent direction at the first control point.
    pub fn vector_at_start(&self) -> Vector2<f64> {
        self.vector_at_start
    }

    /// Tangent direction at the last control point.
    pub fn vector_at_end(&self) -> Vector2<f64> {
        self.vector_at_end
    }

    /// The largest coordinate dimension among the control points.
    pub fn coordinate_dimension(&self) -> usize {
        self.control_points
            .iter()
            .map(Point::dimension)
            .max()
            .unwrap_or(2)
    }
}

/// Sequence of geodesics between the control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeodesicStringRaw")]
pub struct GeodesicString {
    control_points: Points,
}

impl GeodesicString {
    /// Creates a new geodesic string. At least 2 control points are required.
    pub fn new(control_points: impl Into<Points>) -> Result<Self, GeometryError> {
        let control_points = control_points.into();
        if control_points.len() < 2 {
            return Err(GeometryError::ControlPointCount {
                kind: "geodesic string",
                expected: "at least 2",
                actual: control_points.len(),
            });
        }

        Ok(Self { control_points })
    }

    /// Control points.
    pub fn control_points(&self) -> &Points {
        &self.control_points
    }
}

#[derive(Deserialize)]
struct ArcStringRaw {
    control_points: Points,
}

impl TryFrom<ArcStringRaw> for ArcString {
    type Error = GeometryError;

    fn try_from(raw: ArcStringRaw) -> Result<Self, Self::Error> {
        Self::new(raw.control_points)
    }
}

#[derive(Deserialize)]
struct CubicSplineRaw {
    control_points: Points,
    vector_at_start: Vector2<f64>,
    vector_at_end: Vector2<f64>,
}

impl TryFrom<CubicSplineRaw> for CubicSpline {
    type Error = GeometryError;

    fn try_from(raw: CubicSplineRaw) -> Result<Self, Self::Error> {
        Self::new(raw.control_points, raw.vector_at_start, raw.vector_at_end)
    }
}

#[derive(Deserialize)]
struct GeodesicStringRaw {
    control_points: Points,
}

impl TryFrom<GeodesicStringRaw> for GeodesicString {
    type Error = GeometryError;

    fn try_from(raw: GeodesicStringRaw) -> Result<Self, Self::Error> {
        Self::new(raw.control_points)
    }
}

/// Segment of a kind that is described only by its type and control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueSegment {
    segment_type: SegmentType,
    control_points: Points,
}

impl OpaqueSegment {
    /// Creates a new segment. Fails for the segment types that have their own [`CurveSegment`] variant.
    pub fn new(
        segment_type: SegmentType,
        control_points: impl Into<Points>,
    ) -> Result<Self, GeometryError> {
        match segment_type {
            SegmentType::Arc
            | SegmentType::ArcString
            | SegmentType::Circle
            | SegmentType::CubicSpline
            | SegmentType::GeodesicString
            | SegmentType::LineStringSegment => Err(GeometryError::NotOpaque(segment_type)),
            SegmentType::ArcByBulge
            | SegmentType::ArcByCenterPoint
            | SegmentType::ArcStringByBulge
            | SegmentType::Bezier
            | SegmentType::BSpline
            | SegmentType::CircleByCenterPoint
            | SegmentType::Clothoid
            | SegmentType::Geodesic
            | SegmentType::OffsetCurve => Ok(Self {
                segment_type,
                control_points: control_points.into(),
            }),
        }
    }

    /// Kind of the segment.
    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    /// Control points.
    pub fn control_points(&self) -> &Points {
        &self.control_points
    }
}
