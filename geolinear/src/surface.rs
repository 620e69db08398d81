//! Linearization of surface boundaries.

use std::borrow::Cow;

use geolinear_types::{
    DefaultGeometryFactory, GeometryFactory, PatchedSurface, Polygon, PolygonPatch, Ring, Surface, SurfacePatch,
};

use crate::criterion::LinearizationCriterion;
use crate::curve::CurveLinearizer;
use crate::error::LinearizationError;

/// Linearizes the boundary rings of polygons and planar surface patches.
///
/// Only planar patches are supported. Triangulated surfaces, TINs and composite surfaces are returned unchanged with a
/// warning in the log.
#[derive(Debug, Clone, Default)]
pub struct SurfaceLinearizer<F = DefaultGeometryFactory> {
    curves: CurveLinearizer<F>,
}

impl SurfaceLinearizer {
    /// Creates a linearizer that uses [`DefaultGeometryFactory`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: GeometryFactory> SurfaceLinearizer<F> {
    /// Creates a linearizer that builds the output with the given factory.
    pub fn with_factory(factory: F) -> Self {
        Self {
            curves: CurveLinearizer::with_factory(factory),
        }
    }

    /// Linearizer used for the boundary rings.
    pub fn curves(&self) -> &CurveLinearizer<F> {
        &self.curves
    }

    /// Linearizes a surface. The result is a surface of the same type.
    pub fn linearize<'a>(
        &self,
        surface: &'a Surface,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, Surface>, LinearizationError> {
        criterion.validate()?;

        let linearized = match surface {
            Surface::Polygon(polygon) => match self.linearize_polygon(polygon, criterion)? {
                Cow::Borrowed(_) => None,
                Cow::Owned(polygon) => Some(Surface::Polygon(polygon)),
            },
            Surface::PolyhedralSurface(surface) => self
                .linearize_patches(surface, criterion)?
                .map(|patches| {
                    Surface::PolyhedralSurface(self.factory().create_polyhedral_surface(
                        surface.id().map(str::to_owned),
                        surface.crs().cloned(),
                        patches,
                    ))
                }),
            Surface::Surface(surface) => {
                self.linearize_patches(surface, criterion)?
                    .map(|patches| {
                        Surface::Surface(self.factory().create_surface(
                            surface.id().map(str::to_owned),
                            surface.crs().cloned(),
                            patches.into_iter().map(SurfacePatch::Polygon).collect(),
                        ))
                    })
            }
            Surface::TriangulatedSurface(_) | Surface::Tin(_) | Surface::CompositeSurface(_) => {
                log::warn!(
                    "Linearization of {:?} is not implemented, the surface is left unchanged",
                    surface.surface_type()
                );
                None
            }
        };

        Ok(match linearized {
            Some(surface) => Cow::Owned(surface),
            None => Cow::Borrowed(surface),
        })
    }

    /// Linearizes the exterior and all interior rings of a polygon.
    pub fn linearize_polygon<'a>(
        &self,
        polygon: &'a Polygon,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, Polygon>, LinearizationError> {
        Ok(
            match self.linearize_rings(polygon.exterior(), polygon.interiors(), criterion)? {
                None => Cow::Borrowed(polygon),
                Some((exterior, interiors)) => Cow::Owned(self.factory().create_polygon(
                    polygon.id().map(str::to_owned),
                    polygon.crs().cloned(),
                    exterior,
                    interiors,
                )),
            },
        )
    }

    /// Linearizes the boundary rings of a planar patch.
    ///
    /// Fails with [`LinearizationError::NonPlanarPatch`] for cones, cylinders and spheres.
    pub fn linearize_patch<'a>(
        &self,
        patch: &'a SurfacePatch,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, PolygonPatch>, LinearizationError> {
        let SurfacePatch::Polygon(polygon) = patch else {
            return Err(LinearizationError::NonPlanarPatch(patch.patch_type()));
        };

        Ok(
            match self.linearize_rings(polygon.exterior(), polygon.interiors(), criterion)? {
                None => Cow::Borrowed(polygon),
                Some((exterior, interiors)) => {
                    Cow::Owned(self.factory().create_polygon_patch(exterior, interiors))
                }
            },
        )
    }

    fn factory(&self) -> &F {
        self.curves.factory()
    }

    /// Returns `None` if every patch is already linear.
    fn linearize_patches(
        &self,
        surface: &PatchedSurface,
        criterion: LinearizationCriterion,
    ) -> Result<Option<Vec<PolygonPatch>>, LinearizationError> {
        let patches = surface
            .patches()
            .iter()
            .map(|patch| self.linearize_patch(patch, criterion))
            .collect::<Result<Vec<_>, _>>()?;

        if patches.iter().all(|patch| matches!(patch, Cow::Borrowed(_))) {
            return Ok(None);
        }

        Ok(Some(patches.into_iter().map(Cow::into_owned).collect()))
    }

    /// Returns `None` if all the rings are already linear.
    fn linearize_rings(
        &self,
        exterior: &Ring,
        interiors: &[Ring],
        criterion: LinearizationCriterion,
    ) -> Result<Option<(Ring, Vec<Ring>)>, LinearizationError> {
        let linear_exterior = self.curves.linearize_ring(exterior, criterion)?;
        let linear_interiors = interiors
            .iter()
            .map(|ring| self.curves.linearize_ring(ring, criterion))
            .collect::<Result<Vec<_>, _>>()?;

        let unchanged = matches!(linear_exterior, Cow::Borrowed(_))
            && linear_interiors
                .iter()
                .all(|ring| matches!(ring, Cow::Borrowed(_)));
        if unchanged {
            return Ok(None);
        }

        Ok(Some((
            linear_exterior.into_owned(),
            linear_interiors.into_iter().map(Cow::into_owned).collect(),
        )))
    }
}
