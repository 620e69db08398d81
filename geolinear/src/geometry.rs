//! Linearization of arbitrary geometries.

use std::borrow::Cow;

use geolinear_types::{DefaultGeometryFactory, Geometry, GeometryFactory, Multi};

use crate::criterion::LinearizationCriterion;
use crate::curve::CurveLinearizer;
use crate::error::LinearizationError;
use crate::surface::SurfaceLinearizer;

/// Entry point for linearizing any [`Geometry`].
///
/// Curves go to [`CurveLinearizer`] and surfaces to [`SurfaceLinearizer`]. Aggregates are linearized member by member.
/// Points, multi points and multi line strings are always linear. Solids are not supported and are returned unchanged
/// with a warning in the log.
#[derive(Debug, Clone, Default)]
pub struct GeometryLinearizer<F = DefaultGeometryFactory> {
    surfaces: SurfaceLinearizer<F>,
}

impl GeometryLinearizer {
    /// Creates a linearizer that uses [`DefaultGeometryFactory`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: GeometryFactory> GeometryLinearizer<F> {
    /// Creates a linearizer that builds the output with the given factory.
    pub fn with_factory(factory: F) -> Self {
        Self {
            surfaces: SurfaceLinearizer::with_factory(factory),
        }
    }

    /// Linearizer used for curves.
    pub fn curves(&self) -> &CurveLinearizer<F> {
        self.surfaces.curves()
    }

    /// Linearizer used for surfaces.
    pub fn surfaces(&self) -> &SurfaceLinearizer<F> {
        &self.surfaces
    }

    /// Linearizes a geometry. The result has the same geometry type as the input.
    pub fn linearize<'a>(
        &self,
        geometry: &'a Geometry,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, Geometry>, LinearizationError> {
        criterion.validate()?;

        let linearized = match geometry {
            Geometry::Point(_) | Geometry::MultiPoint(_) | Geometry::MultiLineString(_) => None,
            Geometry::Curve(curve) => owned(self.curves().linearize(curve, criterion)?).map(Geometry::Curve),
            Geometry::Surface(surface) => {
                owned(self.surfaces.linearize(surface, criterion)?).map(Geometry::Surface)
            }
            Geometry::Solid(_) | Geometry::MultiSolid(_) => {
                log::warn!(
                    "Linearization of {:?} is not implemented, the geometry is left unchanged",
                    geometry.geometry_type()
                );
                None
            }
            Geometry::MultiCurve(multi) => self
                .linearize_members(multi, |curve| self.curves().linearize(curve, criterion))?
                .map(Geometry::MultiCurve),
            Geometry::MultiSurface(multi) => self
                .linearize_members(multi, |surface| self.surfaces.linearize(surface, criterion))?
                .map(Geometry::MultiSurface),
            Geometry::MultiPolygon(multi) => self
                .linearize_members(multi, |polygon| {
                    self.surfaces.linearize_polygon(polygon, criterion)
                })?
                .map(Geometry::MultiPolygon),
            Geometry::MultiGeometry(multi) => self
                .linearize_members(multi, |member| self.linearize(member, criterion))?
                .map(Geometry::MultiGeometry),
        };

        Ok(match linearized {
            Some(geometry) => Cow::Owned(geometry),
            None => Cow::Borrowed(geometry),
        })
    }

    /// Returns `None` if every member is already linear.
    fn linearize_members<'a, T: Clone>(
        &self,
        multi: &'a Multi<T>,
        linearize: impl Fn(&'a T) -> Result<Cow<'a, T>, LinearizationError>,
    ) -> Result<Option<Multi<T>>, LinearizationError> {
        let members = multi
            .members()
            .iter()
            .map(linearize)
            .collect::<Result<Vec<_>, _>>()?;

        if members.iter().all(|member| matches!(member, Cow::Borrowed(_))) {
            return Ok(None);
        }

        Ok(Some(self.curves().factory().create_multi(
            multi.id().map(str::to_owned),
            multi.crs().cloned(),
            members.into_iter().map(Cow::into_owned).collect(),
        )))
    }
}

fn owned<T: Clone>(value: Cow<'_, T>) -> Option<T> {
    match value {
        Cow::Borrowed(_) => None,
        Cow::Owned(value) => Some(value),
    }
}
