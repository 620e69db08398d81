//! Kind discriminants of the geometry model.
//!
//! The geometry enums ([`CurveSegment`](crate::CurveSegment), [`Curve`](crate::Curve),
//! [`Surface`](crate::Surface), [`Geometry`](crate::Geometry)) report their kind with these types, which are used in
//! log messages and errors.
use serde::{Deserialize, Serialize};

/// Kind of a curve segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentType {
    /// Circular arc through three points.
    Arc,
    /// Circular arc given by two points and a bulge.
    ArcByBulge,
    /// Circular arc given by a center point, radius and angles.
    ArcByCenterPoint,
    /// Sequence of circular arcs through shared points.
    ArcString,
    /// Sequence of circular arcs given by bulges.
    ArcStringByBulge,
    /// Bezier curve.
    Bezier,
    /// B-spline curve.
    BSpline,
    /// Full circle through three points.
    Circle,
    /// Full circle given by a center point and radius.
    CircleByCenterPoint,
    /// Clothoid (Euler spiral).
    Clothoid,
    /// Cubic spline through control points with start and end tangents.
    CubicSpline,
    /// Geodesic between two points.
    Geodesic,
    /// Sequence of geodesics.
    GeodesicString,
    /// Straight line segments.
    LineStringSegment,
    /// Curve at a constant distance from a base curve.
    OffsetCurve,
}

/// Kind of a curve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveType {
    /// Curve consisting of straight segments only.
    LineString,
    /// Curve consisting of arbitrary segments.
    Curve,
    /// Closed curve consisting of straight segments only.
    LinearRing,
    /// Closed curve made of member curves.
    Ring,
}

/// Kind of a surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    /// Single planar patch.
    Polygon,
    /// Planar patches sharing their boundaries.
    PolyhedralSurface,
    /// Generic patch container.
    Surface,
    /// Triangular patches.
    TriangulatedSurface,
    /// Triangulated irregular network.
    Tin,
    /// Surfaces joined along their boundaries.
    CompositeSurface,
}

/// Kind of a surface patch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatchType {
    /// Planar patch bounded by rings.
    Polygon,
    /// Gridded conical patch.
    Cone,
    /// Gridded cylindrical patch.
    Cylinder,
    /// Gridded spherical patch.
    Sphere,
}

/// Kind of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// Single point.
    Point,
    /// Curve or ring.
    Curve,
    /// Surface.
    Surface,
    /// Solid.
    Solid,
    /// Collection of points.
    MultiPoint,
    /// Collection of curves.
    MultiCurve,
    /// Collection of line strings.
    MultiLineString,
    /// Collection of surfaces.
    MultiSurface,
    /// Collection of polygons.
    MultiPolygon,
    /// Collection of solids.
    MultiSolid,
    /// Collection of arbitrary geometries.
    MultiGeometry,
}
