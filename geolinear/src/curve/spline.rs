//! Cubic spline interpolation of a function `y(x)` through the control points.

use geolinear_types::{CubicSpline, GeometryFactory, Points, SegmentType};
use nalgebra::{DMatrix, DVector, Vector2};

use crate::error::LinearizationError;

/// Per-interval cubic polynomials `a + b*t + c*t^2 + d*t^3`, where `t` is the distance from the interval start.
#[derive(Debug)]
struct Coefficients {
    xs: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl Coefficients {
    /// Solves the spline for control points ordered by ascending `x`.
    ///
    /// Tangents are given as angles of the direction vectors at the two ends.
    fn solve(
        xs: Vec<f64>,
        ys: Vec<f64>,
        start_tangent: f64,
        end_tangent: f64,
    ) -> Result<Self, LinearizationError> {
        let n = xs.len() - 1;
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut matrix = DMatrix::<f64>::zeros(n + 1, n + 1);
        let mut rhs = DVector::<f64>::zeros(n + 1);

        matrix[(0, 0)] = 2.0 * h[0];
        matrix[(0, 1)] = h[0];
        rhs[0] = 3.0 * (ys[1] - ys[0]) / h[0] - 3.0 * start_tangent;

        for i in 1..n {
            matrix[(i, i - 1)] = h[i - 1];
            matrix[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            matrix[(i, i + 1)] = h[i];
            rhs[i] = 3.0 * (ys[i + 1] - ys[i]) / h[i] - 3.0 * (ys[i] - ys[i - 1]) / h[i - 1];
        }

        matrix[(n, n - 1)] = h[n - 1];
        matrix[(n, n)] = 2.0 * h[n - 1];
        rhs[n] = 3.0 * end_tangent - 3.0 * (ys[n] - ys[n - 1]) / h[n - 1];

        let c = matrix
            .lu()
            .solve(&rhs)
            .filter(|solution| solution.iter().all(|v| v.is_finite()))
            .ok_or(LinearizationError::SingularSystem)?;
        let c: Vec<f64> = c.iter().copied().collect();

        let mut b = Vec::with_capacity(n);
        let mut d = Vec::with_capacity(n);
        for i in 0..n {
            b.push((ys[i + 1] - ys[i]) / h[i] - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0);
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
        }

        Ok(Self {
            xs,
            a: ys,
            b,
            c,
            d,
        })
    }

    fn evaluate(&self, interval: usize, x: f64) -> f64 {
        let t = x - self.xs[interval];
        self.a[interval] + t * (self.b[interval] + t * (self.c[interval] + t * self.d[interval]))
    }

    /// Evaluates the spline at `num_points` uniformly spaced values of `x` between the first and the last control
    /// point.
    fn sample(&self, num_points: usize) -> Vec<(f64, f64)> {
        let intervals = self.xs.len() - 1;
        let x0 = self.xs[0];
        let spacing = (self.xs[intervals] - x0) / (num_points - 1) as f64;

        let mut interval = 0;
        (0..num_points)
            .map(|i| {
                let x = x0 + i as f64 * spacing;
                while interval + 1 < intervals && x > self.xs[interval + 1] {
                    interval += 1;
                }
                (x, self.evaluate(interval, x))
            })
            .collect()
    }
}

fn tangent_angle(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Samples `num_points` points of the spline.
///
/// The control points must be strictly ascending or strictly descending on the `x` axis. Descending splines are solved
/// in reversed order, and the output is reversed back, so the polyline always runs from the first control point to the
/// last one. All the output points get the coordinate system and precision of the first control point.
pub(crate) fn interpolate(
    spline: &CubicSpline,
    num_points: usize,
    factory: &impl GeometryFactory,
) -> Result<Points, LinearizationError> {
    let dimension = spline.coordinate_dimension();
    if dimension != 2 {
        return Err(LinearizationError::DimensionMismatch {
            expected: 2,
            actual: dimension,
        });
    }

    let control_points = spline.control_points();
    let Some(first) = control_points.first().filter(|_| control_points.len() >= 2) else {
        return Err(LinearizationError::ControlPointCount {
            segment: SegmentType::CubicSpline,
            actual: control_points.len(),
        });
    };

    let ascending = control_points
        .windows(2)
        .all(|pair| pair[0].x() < pair[1].x());
    let descending = control_points
        .windows(2)
        .all(|pair| pair[0].x() > pair[1].x());

    let (start_tangent, end_tangent) = if ascending {
        (
            tangent_angle(spline.vector_at_start()),
            tangent_angle(spline.vector_at_end()),
        )
    } else if descending {
        (
            tangent_angle(-spline.vector_at_end()),
            tangent_angle(-spline.vector_at_start()),
        )
    } else {
        return Err(LinearizationError::InvalidControlPointOrdering);
    };

    let (mut xs, mut ys): (Vec<f64>, Vec<f64>) =
        control_points.iter().map(|p| (p.x(), p.y())).unzip();
    if descending {
        xs.reverse();
        ys.reverse();
    }

    let coefficients = Coefficients::solve(xs, ys, start_tangent, end_tangent)?;
    let mut samples = coefficients.sample(num_points);
    if descending {
        samples.reverse();
    }

    Ok(samples
        .into_iter()
        .map(|(x, y)| factory.create_point([x, y], first.crs().cloned(), first.precision()))
        .collect())
}
