//! Circular arc geometry: circle center, sweep and sampling of points on the arc.

use std::f64::consts::TAU;

use geolinear_types::{GeometryFactory, Point, Points};
use nalgebra::{Vector2, Vector3};

use crate::error::LinearizationError;
use crate::orient::{is_clockwise_vec, Orientation, Shift};

/// Start and end angles closer than this describe a full circle.
const FULL_CIRCLE_EPSILON: f64 = 1e-10;

/// Center of the circle through three points.
///
/// Uses the barycentric circumcenter formula on the shifted points, with each point weighted by the squared length of
/// the opposite edge and the dot product of the adjacent edges.
pub(crate) fn circle_center(
    p0: &Vector2<f64>,
    p1: &Vector2<f64>,
    p2: &Vector2<f64>,
) -> Result<Vector2<f64>, LinearizationError> {
    let shift = Shift::of(p0, p1, p2);
    let (s0, s1, s2) = (shift.down(p0), shift.down(p1), shift.down(p2));

    if Orientation::triplet_vec(&s0, &s1, &s2) == Orientation::Collinear {
        return Err(LinearizationError::Collinear);
    }

    let a = Vector3::new(s0.x, s0.y, 0.0);
    let b = Vector3::new(s1.x, s1.y, 0.0);
    let c = Vector3::new(s2.x, s2.y, 0.0);

    let ab = a - b;
    let ac = a - c;
    let bc = b - c;
    let ba = b - a;
    let ca = c - a;
    let cb = c - b;

    let cross_sq = 2.0 * ab.cross(&bc).norm_squared();

    let center = a * (bc.norm_squared() * ab.dot(&ac) / cross_sq)
        + b * (ac.norm_squared() * ba.dot(&bc) / cross_sq)
        + c * (ab.norm_squared() * ca.dot(&cb) / cross_sq);

    Ok(shift.up(&Vector2::new(center.x, center.y)))
}

/// Angle between two consecutive points when `num_points` points are spread over the sweep from `start_angle` to
/// `end_angle`. Negative for clockwise traversal.
///
/// Equal angles mean a full circle.
pub(crate) fn angle_step(start_angle: f64, end_angle: f64, num_points: usize, clockwise: bool) -> f64 {
    let is_circle = (start_angle - end_angle).abs() < FULL_CIRCLE_EPSILON;
    let mut sweep = if is_circle {
        TAU
    } else {
        start_angle - end_angle
    };
    let intervals = (num_points - 1) as f64;

    if clockwise {
        if !is_circle && sweep < 0.0 {
            sweep += TAU;
        }
        -sweep / intervals
    } else {
        if !is_circle {
            sweep = if sweep < 0.0 { -sweep } else { TAU - sweep };
        }
        sweep / intervals
    }
}

/// Circle of an arc in shifted coordinates.
struct ArcCircle {
    shift: Shift,
    center: Vector2<f64>,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    clockwise: bool,
}

impl ArcCircle {
    fn new(p0: &Point, p1: &Point, p2: &Point, is_circle: bool) -> Result<Self, LinearizationError> {
        let (p0, p1, p2) = (p0.vec2(), p1.vec2(), p2.vec2());
        let shift = Shift::of(&p0, &p1, &p2);
        let (s0, s1, s2) = (shift.down(&p0), shift.down(&p1), shift.down(&p2));

        let center = circle_center(&s0, &s1, &s2)?;
        let d = s0 - center;
        let e = s2 - center;

        let start_angle = d.y.atan2(d.x);
        let end_angle = if is_circle {
            start_angle
        } else {
            e.y.atan2(e.x)
        };

        Ok(Self {
            shift,
            center,
            radius: d.norm(),
            start_angle,
            end_angle,
            clockwise: is_clockwise_vec(&s0, &s1, &s2)?,
        })
    }
}

/// Samples `num_points` points on the arc from `p0` through `p1` to `p2`, or on the full circle through the three
/// points if `is_circle` is set.
///
/// The first point is `p0` itself and the last is `p2` (`p0` for circles), so the end points are exact. The
/// intermediate points get the coordinate system and precision of `p0`.
pub(crate) fn interpolate(
    p0: &Point,
    p1: &Point,
    p2: &Point,
    num_points: usize,
    is_circle: bool,
    factory: &impl GeometryFactory,
) -> Result<Points, LinearizationError> {
    let arc = ArcCircle::new(p0, p1, p2, is_circle)?;
    let step = angle_step(arc.start_angle, arc.end_angle, num_points, arc.clockwise);

    let mut points = Vec::with_capacity(num_points);
    points.push(p0.clone());

    for i in 1..num_points.saturating_sub(1) {
        let angle = arc.start_angle + i as f64 * step;
        let on_circle = arc.center + Vector2::new(angle.cos(), angle.sin()) * arc.radius;
        let position = arc.shift.up(&on_circle);
        points.push(factory.create_point(
            [position.x, position.y],
            p0.crs().cloned(),
            p0.precision(),
        ));
    }

    points.push(if is_circle { p0.clone() } else { p2.clone() });

    Ok(points.into())
}

/// Smallest number of points for which no chord between consecutive points is farther than `error` from the arc.
///
/// A chord spanning the angle `2 * acos(1 - error / radius)` has a sagitta of exactly `error`. The sweep is divided
/// into chords of at most that angle, plus the two end points. A positive `max_num_points` caps the result.
pub(crate) fn calc_num_points(
    p0: &Point,
    p1: &Point,
    p2: &Point,
    is_circle: bool,
    error: f64,
    max_num_points: usize,
) -> Result<usize, LinearizationError> {
    let ArcCircle {
        radius,
        mut start_angle,
        mut end_angle,
        clockwise,
        ..
    } = ArcCircle::new(p0, p1, p2, is_circle)?;

    if error > 2.0 * radius {
        return Err(LinearizationError::ErrorBoundExceedsDiameter { error, radius });
    }

    let step = 2.0 * (1.0 - error / radius).acos();

    let sweep = if is_circle {
        TAU
    } else if clockwise {
        if start_angle < end_angle {
            start_angle += TAU;
        }
        start_angle - end_angle
    } else {
        if end_angle < start_angle {
            end_angle += TAU;
        }
        end_angle - start_angle
    };

    // step underflows to zero when error is negligible compared to the radius
    let count = (sweep / step).ceil() + 2.0;

    if max_num_points > 0 && (count.is_nan() || count > max_num_points as f64) {
        return Ok(max_num_points);
    }

    if !count.is_finite() || count >= usize::MAX as f64 {
        return Err(LinearizationError::ErrorBoundTooSmall { error, radius });
    }

    Ok(count as usize)
}
