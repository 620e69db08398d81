//! Construction of output geometries.
//!
//! Linearization never builds points, segments, curves or surfaces directly. It asks a [`GeometryFactory`] to do
//! it, so an application can decide how the outputs are assembled, e.g. to assign identifiers or to count
//! allocations. All the methods have default implementations, and [`DefaultGeometryFactory`] uses exactly these.

use crate::crs::Crs;
use crate::curve::{CompositeRing, Curve, Ring, SegmentedCurve};
use crate::curve_segment::{CurveSegment, LineStringSegment};
use crate::multi::Multi;
use crate::point::{Point, PrecisionModel};
use crate::points::Points;
use crate::surface::{PatchedSurface, Polygon, PolygonPatch, SurfacePatch};

/// Builder of geometries. See module documentation for details.
pub trait GeometryFactory {
    /// Creates a 2d point.
    fn create_point(&self, coords: [f64; 2], crs: Option<Crs>, precision: PrecisionModel) -> Point {
        Point::new(coords[0], coords[1])
            .with_crs(crs)
            .with_precision(precision)
    }

    /// Creates a linear segment.
    fn create_line_string_segment(&self, points: Points) -> LineStringSegment {
        LineStringSegment::new(points)
    }

    /// Creates a curve from segments.
    fn create_curve(
        &self,
        id: Option<String>,
        crs: Option<Crs>,
        segments: Vec<CurveSegment>,
    ) -> SegmentedCurve {
        SegmentedCurve::new(id, crs, segments)
    }

    /// Creates a ring from member curves.
    fn create_ring(&self, id: Option<String>, crs: Option<Crs>, members: Vec<Curve>) -> Ring {
        Ring::Composite(CompositeRing::new(id, crs, members))
    }

    /// Creates a polygon.
    fn create_polygon(
        &self,
        id: Option<String>,
        crs: Option<Crs>,
        exterior: Ring,
        interiors: Vec<Ring>,
    ) -> Polygon {
        Polygon::new(id, crs, exterior, interiors)
    }

    /// Creates a planar surface patch.
    fn create_polygon_patch(&self, exterior: Ring, interiors: Vec<Ring>) -> PolygonPatch {
        PolygonPatch::new(exterior, interiors)
    }

    /// Creates a polyhedral surface.
    fn create_polyhedral_surface(
        &self,
        id: Option<String>,
        crs: Option<Crs>,
        patches: Vec<PolygonPatch>,
    ) -> PatchedSurface {
        PatchedSurface::new(
            id,
            crs,
            patches.into_iter().map(SurfacePatch::Polygon).collect(),
        )
    }

    /// Creates a generic surface.
    fn create_surface(
        &self,
        id: Option<String>,
        crs: Option<Crs>,
        patches: Vec<SurfacePatch>,
    ) -> PatchedSurface {
        PatchedSurface::new(id, crs, patches)
    }

    /// Creates a set of geometries of one kind.
    fn create_multi<T>(&self, id: Option<String>, crs: Option<Crs>, members: Vec<T>) -> Multi<T> {
        Multi::new(id, crs, members)
    }
}

/// Factory that uses the default constructors of all geometry types.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DefaultGeometryFactory;

impl GeometryFactory for DefaultGeometryFactory {}
