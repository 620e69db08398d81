//! Linearization criteria: how many points an approximation of a curved segment gets.

use serde::{Deserialize, Serialize};

use crate::error::LinearizationError;

/// Policy that determines the number of points used to approximate a curved element.
///
/// The criterion can be loaded from configuration:
///
/// ```json
/// {"type": "max_error", "max_error": 0.05, "max_num_points": 500}
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinearizationCriterion {
    /// Every arc element is approximated by exactly `num_points` points.
    NumPoints {
        /// Number of points including both end points.
        num_points: usize,
    },
    /// Every arc element gets the smallest number of points for which the polyline does not deviate from the arc by
    /// more than `max_error`.
    MaxError {
        /// Maximum allowed distance between the polyline and the arc.
        max_error: f64,
        /// If positive, the number of points never exceeds this value, even if `max_error` cannot be held.
        #[serde(default)]
        max_num_points: usize,
    },
}

impl LinearizationCriterion {
    /// Creates a [`LinearizationCriterion::NumPoints`] criterion.
    pub fn num_points(num_points: usize) -> Self {
        Self::NumPoints { num_points }
    }

    /// Creates a [`LinearizationCriterion::MaxError`] criterion. Use `0` for `max_num_points` to leave the number of
    /// points unbounded.
    pub fn max_error(max_error: f64, max_num_points: usize) -> Self {
        Self::MaxError {
            max_error,
            max_num_points,
        }
    }

    /// Short name used in error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::NumPoints { .. } => "num_points",
            Self::MaxError { .. } => "max_error",
        }
    }

    /// Checks that the parameters can produce a polyline.
    pub(crate) fn validate(&self) -> Result<(), LinearizationError> {
        match *self {
            Self::NumPoints { num_points } if num_points < 2 => {
                Err(LinearizationError::InvalidCriterion(format!(
                    "at least 2 points are required, got {num_points}"
                )))
            }
            Self::MaxError { max_error, .. } if !(max_error.is_finite() && max_error > 0.0) => {
                Err(LinearizationError::InvalidCriterion(format!(
                    "maximum error must be a positive number, got {max_error}"
                )))
            }
            Self::MaxError { max_num_points, .. } if max_num_points == 1 => {
                Err(LinearizationError::InvalidCriterion(
                    "maximum number of points must be 0 or at least 2".into(),
                ))
            }
            _ => Ok(()),
        }
    }
}
