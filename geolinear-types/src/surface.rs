use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::curve::Ring;
use crate::geometry_type::{PatchType, SurfaceType};
use crate::points::Points;

/// Surface geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Single planar patch.
    Polygon(Polygon),
    /// Planar patches.
    PolyhedralSurface(PatchedSurface),
    /// Generic collection of patches.
    Surface(PatchedSurface),
    /// Triangle patches.
    TriangulatedSurface(PatchedSurface),
    /// Triangulated irregular network.
    Tin(PatchedSurface),
    /// Surfaces joined along their boundaries.
    CompositeSurface(CompositeSurface),
}

impl Surface {
    /// Kind of the surface.
    pub fn surface_type(&self) -> SurfaceType {
        match self {
            Surface::Polygon(_) => SurfaceType::Polygon,
            Surface::PolyhedralSurface(_) => SurfaceType::PolyhedralSurface,
            Surface::Surface(_) => SurfaceType::Surface,
            Surface::TriangulatedSurface(_) => SurfaceType::TriangulatedSurface,
            Surface::Tin(_) => SurfaceType::Tin,
            Surface::CompositeSurface(_) => SurfaceType::CompositeSurface,
        }
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            Surface::Polygon(v) => v.crs(),
            Surface::PolyhedralSurface(v)
            | Surface::Surface(v)
            | Surface::TriangulatedSurface(v)
            | Surface::Tin(v) => v.crs(),
            Surface::CompositeSurface(v) => v.crs(),
        }
    }
}

/// Polygon. Polygon consists of one exterior ring and zero or more interior rings (holes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    id: Option<String>,
    crs: Option<Crs>,
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(id: Option<String>, crs: Option<Crs>, exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            id,
            crs,
            exterior,
            interiors,
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

    /// Exterior boundary.
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// Holes.
    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }
}

/// Container of surface patches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchedSurface {
    id: Option<String>,
    crs: Option<Crs>,
    patches: Vec<SurfacePatch>,
}

impl PatchedSurface {
    /// Creates a new surface.
    pub fn new(id: Option<String>, crs: Option<Crs>, patches: Vec<SurfacePatch>) -> Self {
        Self { id, crs, patches }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Patches.
    pub fn patches(&self) -> &[SurfacePatch] {
        &self.patches
    }
}

/// Surfaces joined along their boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeSurface {
    id: Option<String>,
    crs: Option<Crs>,
    members: Vec<Surface>,
}

impl CompositeSurface {
    /// Creates a new composite surface.
    pub fn new(id: Option<String>, crs: Option<Crs>, members: Vec<Surface>) -> Self {
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

    /// Member surfaces.
    pub fn members(&self) -> &[Surface] {
        &self.members
    }
}

/// A single patch of a [`PatchedSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfacePatch {
    /// Planar patch.
    Polygon(PolygonPatch),
    /// Conical patch.
    Cone(GriddedPatch),
    /// Cylindrical patch.
    Cylinder(GriddedPatch),
    /// Spherical patch.
    Sphere(GriddedPatch),
}

impl SurfacePatch {
    /// Kind of the patch.
    pub fn patch_type(&self) -> PatchType {
        match self {
            SurfacePatch::Polygon(_) => PatchType::Polygon,
            SurfacePatch::Cone(_) => PatchType::Cone,
            SurfacePatch::Cylinder(_) => PatchType::Cylinder,
            SurfacePatch::Sphere(_) => PatchType::Sphere,
        }
    }
}

/// Planar patch bounded by one exterior and zero or more interior rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPatch {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl PolygonPatch {
    /// Creates a new patch.
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior boundary.
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// Holes.
    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }
}

/// Patch given by a grid of points, row by row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GriddedPatch {
    rows: Vec<Points>,
}

impl GriddedPatch {
    /// Creates a new patch.
    pub fn new(rows: Vec<Points>) -> Self {
        Self { rows }
    }

    /// Rows of the grid.
    pub fn rows(&self) -> &[Points] {
        &self.rows
    }
}

impl From<Polygon> for Surface {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}
