use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::crs::Crs;

/// Numeric precision tag of a point.
///
/// The tag is metadata only: it is not applied to any computation, but every point derived from a tagged point keeps
/// the same tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PrecisionModel {
    /// Double precision floating point coordinates.
    #[default]
    Floating,
    /// Single precision floating point coordinates.
    FloatingSingle,
    /// Coordinates are rounded to a grid of `1 / scale`.
    Fixed {
        /// Grid scale factor.
        scale: f64,
    },
}

/// A point with 2 or 3 coordinates.
///
/// Linearization is always done in the `x`/`y` plane. A `z` value, if present, is kept on the control points that
/// end up in the output, but all the computed points are two dimensional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    crs: Option<Crs>,
    precision: PrecisionModel,
}

impl Point {
    /// Creates a 2d point without coordinate system.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            crs: None,
            precision: PrecisionModel::Floating,
        }
    }

    /// Creates a 3d point without coordinate system. `z` may be `NaN`.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            crs: None,
            precision: PrecisionModel::Floating,
        }
    }

    /// Sets the coordinate system of the point.
    pub fn with_crs(mut self, crs: Option<Crs>) -> Self {
        self.crs = crs;
        self
    }

    /// Sets the precision tag of the point.
    pub fn with_precision(mut self, precision: PrecisionModel) -> Self {
        self.precision = precision;
        self
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate, if the point is three dimensional.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Coordinate dimension: 2 or 3.
    pub fn dimension(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Coordinate system of the point.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Precision tag of the point.
    pub fn precision(&self) -> PrecisionModel {
        self.precision
    }

    /// Planar coordinates as a vector.
    pub fn vec2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Squared planar distance to `other`.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        (self.vec2() - other.vec2()).norm_squared()
    }

    /// Planar distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Returns true if both points have exactly the same planar coordinates.
    pub fn equal_2d(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}
