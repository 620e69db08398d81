use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::curve::{Curve, LineString};
use crate::geometry::Geometry;
use crate::point::Point;
use crate::solid::Solid;
use crate::surface::{Polygon, Surface};

/// A set of geometries of the same kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multi<T> {
    id: Option<String>,
    crs: Option<Crs>,
    members: Vec<T>,
}

impl<T> Multi<T> {
    /// Creates a new collection.
    pub fn new(id: Option<String>, crs: Option<Crs>, members: Vec<T>) -> Self {
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

    /// Members in their original order.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T> Default for Multi<T> {
    fn default() -> Self {
        Self {
            id: None,
            crs: None,
            members: vec![],
        }
    }
}

impl<T> From<Vec<T>> for Multi<T> {
    fn from(value: Vec<T>) -> Self {
        Self::new(None, None, value)
    }
}

/// A set of points.
pub type MultiPoint = Multi<Point>;
/// A set of curves.
pub type MultiCurve = Multi<Curve>;
/// A set of line strings.
pub type MultiLineString = Multi<LineString>;
/// A set of surfaces.
pub type MultiSurface = Multi<Surface>;
/// A set of polygons.
pub type MultiPolygon = Multi<Polygon>;
/// A set of solids.
pub type MultiSolid = Multi<Solid>;
/// A set of arbitrary geometries.
pub type MultiGeometry = Multi<Geometry>;
