//! Orientation and collinearity of point triplets.
//!
//! Every collinearity decision in the crate goes through [`Orientation::triplet`], so all the algorithms agree on
//! which triplets are degenerate. The test moves the points close to the origin first (see [`Shift`]) and then
//! compares the signed area of the triangle with [`COLLINEARITY_EPSILON`].

use geolinear_types::Point;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::LinearizationError;

/// Triplets with an absolute signed area below this value are collinear.
pub const COLLINEARITY_EPSILON: f64 = 1e-6;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points `p0 -> p1 -> p2`.
    pub fn triplet(p0: &Point, p1: &Point, p2: &Point) -> Self {
        Self::triplet_vec(&p0.vec2(), &p1.vec2(), &p2.vec2())
    }

    pub(crate) fn triplet_vec(p0: &Vector2<f64>, p1: &Vector2<f64>, p2: &Vector2<f64>) -> Self {
        let shift = Shift::of(p0, p1, p2);
        let area = signed_area(&shift.down(p0), &shift.down(p1), &shift.down(p2));

        if area.abs() < COLLINEARITY_EPSILON {
            Self::Collinear
        } else if area < 0.0 {
            Self::Clockwise
        } else {
            Self::Counterclockwise
        }
    }
}

/// Returns true if the three points lie on one straight line.
pub fn are_collinear(p0: &Point, p1: &Point, p2: &Point) -> bool {
    Orientation::triplet(p0, p1, p2) == Orientation::Collinear
}

/// Returns true if `p0 -> p1 -> p2` turns clockwise, and false if it turns counterclockwise.
///
/// Fails with [`LinearizationError::Collinear`] if the points are collinear.
pub fn is_clockwise(p0: &Point, p1: &Point, p2: &Point) -> Result<bool, LinearizationError> {
    is_clockwise_vec(&p0.vec2(), &p1.vec2(), &p2.vec2())
}

pub(crate) fn is_clockwise_vec(
    p0: &Vector2<f64>,
    p1: &Vector2<f64>,
    p2: &Vector2<f64>,
) -> Result<bool, LinearizationError> {
    match Orientation::triplet_vec(p0, p1, p2) {
        Orientation::Clockwise => Ok(true),
        Orientation::Counterclockwise => Ok(false),
        Orientation::Collinear => Err(LinearizationError::Collinear),
    }
}

/// Shoelace area of the triangle, computed from the mean `y` of every edge.
fn signed_area(p0: &Vector2<f64>, p1: &Vector2<f64>, p2: &Vector2<f64>) -> f64 {
    (p2.x - p0.x) * ((p2.y + p0.y) / 2.0)
        + (p1.x - p2.x) * ((p1.y + p2.y) / 2.0)
        + (p0.x - p1.x) * ((p0.y + p1.y) / 2.0)
}

/// Translation of a point triplet towards the origin.
///
/// Each axis is shifted independently by the middle of the range the three points span on it. Computations on the
/// shifted points lose less precision with large coordinates (e.g. projected coordinates in meters). Every algorithm
/// computes its own shift from its own input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Shift(Vector2<f64>);

impl Shift {
    pub(crate) fn of(p0: &Vector2<f64>, p1: &Vector2<f64>, p2: &Vector2<f64>) -> Self {
        let min = p0.inf(p1).inf(p2);
        let max = p0.sup(p1).sup(p2);
        Self((min + max) / 2.0)
    }

    pub(crate) fn down(&self, p: &Vector2<f64>) -> Vector2<f64> {
        p - self.0
    }

    pub(crate) fn up(&self, p: &Vector2<f64>) -> Vector2<f64> {
        p + self.0
    }
}
