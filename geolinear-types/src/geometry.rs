use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::curve::Curve;
use crate::geometry_type::GeometryType;
use crate::multi::{
    MultiCurve, MultiGeometry, MultiLineString, MultiPoint, MultiPolygon, MultiSolid, MultiSurface,
};
use crate::point::Point;
use crate::solid::Solid;
use crate::surface::Surface;

/// Any geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Point.
    Point(Point),
    /// Curve or ring.
    Curve(Curve),
    /// Surface.
    Surface(Surface),
    /// Solid.
    Solid(Solid),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Set of curves.
    MultiCurve(MultiCurve),
    /// Set of line strings.
    MultiLineString(MultiLineString),
    /// Set of surfaces.
    MultiSurface(MultiSurface),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Set of solids.
    MultiSolid(MultiSolid),
    /// Set of arbitrary geometries.
    MultiGeometry(MultiGeometry),
}

impl Geometry {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Curve(_) => GeometryType::Curve,
            Geometry::Surface(_) => GeometryType::Surface,
            Geometry::Solid(_) => GeometryType::Solid,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiCurve(_) => GeometryType::MultiCurve,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiSurface(_) => GeometryType::MultiSurface,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::MultiSolid(_) => GeometryType::MultiSolid,
            Geometry::MultiGeometry(_) => GeometryType::MultiGeometry,
        }
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            Geometry::Point(v) => v.crs(),
            Geometry::Curve(v) => v.crs(),
            Geometry::Surface(v) => v.crs(),
            Geometry::Solid(v) => v.crs(),
            Geometry::MultiPoint(v) => v.crs(),
            Geometry::MultiCurve(v) => v.crs(),
            Geometry::MultiLineString(v) => v.crs(),
            Geometry::MultiSurface(v) => v.crs(),
            Geometry::MultiPolygon(v) => v.crs(),
            Geometry::MultiSolid(v) => v.crs(),
            Geometry::MultiGeometry(v) => v.crs(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        Self::Curve(value)
    }
}

impl From<Surface> for Geometry {
    fn from(value: Surface) -> Self {
        Self::Surface(value)
    }
}

impl From<Solid> for Geometry {
    fn from(value: Solid) -> Self {
        Self::Solid(value)
    }
}

impl From<MultiCurve> for Geometry {
    fn from(value: MultiCurve) -> Self {
        Self::MultiCurve(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<MultiSurface> for Geometry {
    fn from(value: MultiSurface) -> Self {
        Self::MultiSurface(value)
    }
}

impl From<MultiGeometry> for Geometry {
    fn from(value: MultiGeometry) -> Self {
        Self::MultiGeometry(value)
    }
}
