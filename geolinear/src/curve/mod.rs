//! Linearization of curve segments, curves and rings.

use std::borrow::Cow;

use geolinear_types::{
    Arc, ArcString, Circle, CubicSpline, Curve, CurveSegment, DefaultGeometryFactory, GeodesicString,
    GeometryFactory, LineStringSegment, Point, Points, Ring, SegmentType,
};

use crate::criterion::LinearizationCriterion;
use crate::error::LinearizationError;
use crate::orient::are_collinear;

mod arc;
mod spline;

/// Converts curved segments into sequences of straight segments.
///
/// All the output geometries are assembled by the factory `F`. Inputs that are already linear are returned as
/// [`Cow::Borrowed`] without any copying.
#[derive(Debug, Clone, Default)]
pub struct CurveLinearizer<F = DefaultGeometryFactory> {
    factory: F,
}

impl CurveLinearizer {
    /// Creates a linearizer that uses [`DefaultGeometryFactory`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: GeometryFactory> CurveLinearizer<F> {
    /// Creates a linearizer that builds the output with the given factory.
    pub fn with_factory(factory: F) -> Self {
        Self { factory }
    }

    /// Factory used to build the output geometries.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Linearizes a curve.
    ///
    /// * A [`Curve::LineString`] is returned as is.
    /// * A [`Curve::Segmented`] curve gets every segment linearized independently. The linear segments are not merged.
    /// * A [`Curve::Ring`] is linearized with [`CurveLinearizer::linearize_ring`] and stays a ring.
    pub fn linearize<'a>(
        &self,
        curve: &'a Curve,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, Curve>, LinearizationError> {
        criterion.validate()?;

        match curve {
            Curve::LineString(_) => Ok(Cow::Borrowed(curve)),
            Curve::Segmented(segmented) => {
                if segmented.is_linear() {
                    return Ok(Cow::Borrowed(curve));
                }

                let segments = segmented
                    .segments()
                    .iter()
                    .map(|segment| {
                        self.linearize_segment(segment, criterion)
                            .map(|linear| CurveSegment::LineString(linear.into_owned()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Cow::Owned(Curve::Segmented(self.factory.create_curve(
                    segmented.id().map(str::to_owned),
                    segmented.crs().cloned(),
                    segments,
                ))))
            }
            Curve::Ring(ring) => Ok(match self.linearize_ring(ring, criterion)? {
                Cow::Borrowed(_) => Cow::Borrowed(curve),
                Cow::Owned(ring) => Cow::Owned(Curve::Ring(ring)),
            }),
        }
    }

    /// Linearizes a ring.
    ///
    /// A linear ring is returned as is. Every member of a composite ring is linearized with
    /// [`CurveLinearizer::linearize`], and the result is a ring with the same identifier, coordinate system and number
    /// of members.
    pub fn linearize_ring<'a>(
        &self,
        ring: &'a Ring,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, Ring>, LinearizationError> {
        criterion.validate()?;

        let composite = match ring {
            Ring::Linear(_) => return Ok(Cow::Borrowed(ring)),
            Ring::Composite(composite) => composite,
        };

        let members = composite
            .members()
            .iter()
            .map(|member| self.linearize(member, criterion))
            .collect::<Result<Vec<_>, _>>()?;

        if members.iter().all(|member| matches!(member, Cow::Borrowed(_))) {
            return Ok(Cow::Borrowed(ring));
        }

        Ok(Cow::Owned(self.factory.create_ring(
            composite.id().map(str::to_owned),
            composite.crs().cloned(),
            members.into_iter().map(Cow::into_owned).collect(),
        )))
    }

    /// Linearizes a single curve segment.
    ///
    /// Fails with [`LinearizationError::UnsupportedSegmentType`] for the segment types that have no linearization
    /// algorithm.
    pub fn linearize_segment<'a>(
        &self,
        segment: &'a CurveSegment,
        criterion: LinearizationCriterion,
    ) -> Result<Cow<'a, LineStringSegment>, LinearizationError> {
        let linear = match segment {
            CurveSegment::LineString(linear) => {
                criterion.validate()?;
                return Ok(Cow::Borrowed(linear));
            }
            CurveSegment::Arc(arc) => self.linearize_arc(arc, criterion)?,
            CurveSegment::Circle(circle) => self.linearize_circle(circle, criterion)?,
            CurveSegment::ArcString(arc_string) => self.linearize_arc_string(arc_string, criterion)?,
            CurveSegment::CubicSpline(spline) => self.linearize_cubic_spline(spline, criterion)?,
            CurveSegment::GeodesicString(geodesic) => {
                self.linearize_geodesic_string(geodesic, criterion)?
            }
            CurveSegment::Opaque(opaque) => {
                return Err(LinearizationError::UnsupportedSegmentType(
                    opaque.segment_type(),
                ))
            }
        };

        Ok(Cow::Owned(linear))
    }

    /// Linearizes an arc.
    ///
    /// The first output point is `p0` and the last one is `p2`. If the control points are collinear, the result is
    /// the straight segment `(p0, p2)` regardless of the criterion.
    pub fn linearize_arc(
        &self,
        arc: &Arc,
        criterion: LinearizationCriterion,
    ) -> Result<LineStringSegment, LinearizationError> {
        criterion.validate()?;
        let points = self.arc_points(arc.p0(), arc.p1(), arc.p2(), false, criterion)?;
        Ok(self.factory.create_line_string_segment(points))
    }

    /// Linearizes a full circle through the three control points.
    ///
    /// The output starts and ends at `p0`. If the control points are collinear, the result is `(p0, p1, p0)`.
    pub fn linearize_circle(
        &self,
        circle: &Circle,
        criterion: LinearizationCriterion,
    ) -> Result<LineStringSegment, LinearizationError> {
        criterion.validate()?;
        let points = self.arc_points(circle.p0(), circle.p1(), circle.p2(), true, criterion)?;
        Ok(self.factory.create_line_string_segment(points))
    }

    /// Linearizes a sequence of arcs.
    ///
    /// Control points `(0, 1, 2)`, `(2, 3, 4)` and so on make up the arcs, and each arc is linearized as with
    /// [`CurveLinearizer::linearize_arc`]. The point shared by two neighbouring arcs appears in the output once.
    pub fn linearize_arc_string(
        &self,
        arc_string: &ArcString,
        criterion: LinearizationCriterion,
    ) -> Result<LineStringSegment, LinearizationError> {
        criterion.validate()?;

        let control_points = arc_string.control_points();
        let count = control_points.len();
        let Some(first) = control_points.first().filter(|_| count >= 3 && count % 2 == 1) else {
            return Err(LinearizationError::ControlPointCount {
                segment: SegmentType::ArcString,
                actual: count,
            });
        };

        let mut points = Vec::with_capacity(count);
        points.push(first.clone());

        for triple in control_points.windows(3).step_by(2) {
            let (a, b, c) = (&triple[0], &triple[1], &triple[2]);
            if are_collinear(a, b, c) {
                points.extend([b.clone(), c.clone()]);
            } else {
                let element = self.arc_points(a, b, c, false, criterion)?;
                points.extend(element.into_iter().skip(1));
            }
        }

        Ok(self.factory.create_line_string_segment(points.into()))
    }

    /// Linearizes a cubic spline in the `x`/`y` plane.
    ///
    /// The control points must be strictly monotonic on the `x` axis. The spline is sampled at uniform `x` intervals,
    /// so only [`LinearizationCriterion::NumPoints`] and [`LinearizationCriterion::MaxError`] with a positive
    /// `max_num_points` can be used. In the latter case the spline gets exactly `max_num_points` points.
    pub fn linearize_cubic_spline(
        &self,
        spline: &CubicSpline,
        criterion: LinearizationCriterion,
    ) -> Result<LineStringSegment, LinearizationError> {
        criterion.validate()?;

        let num_points = match criterion {
            LinearizationCriterion::NumPoints { num_points } => num_points,
            LinearizationCriterion::MaxError { max_num_points, .. } if max_num_points > 0 => {
                max_num_points
            }
            LinearizationCriterion::MaxError { .. } => {
                return Err(LinearizationError::UnsupportedCriterionForSegment {
                    criterion: criterion.name(),
                    segment: SegmentType::CubicSpline,
                })
            }
        };

        let points = spline::interpolate(spline, num_points, &self.factory)?;
        Ok(self.factory.create_line_string_segment(points))
    }

    /// Converts a geodesic string into a linear segment with the same control points.
    pub fn linearize_geodesic_string(
        &self,
        geodesic: &GeodesicString,
        criterion: LinearizationCriterion,
    ) -> Result<LineStringSegment, LinearizationError> {
        criterion.validate()?;

        let control_points = geodesic.control_points();
        if control_points.len() < 2 {
            return Err(LinearizationError::ControlPointCount {
                segment: SegmentType::GeodesicString,
                actual: control_points.len(),
            });
        }

        Ok(self.factory.create_line_string_segment(control_points.clone()))
    }

    /// Center of the circle that passes through the three points.
    ///
    /// The center gets the coordinate system and precision of `p0`. Fails with [`LinearizationError::Collinear`] if
    /// the points are collinear.
    pub fn calc_circle_center(
        &self,
        p0: &Point,
        p1: &Point,
        p2: &Point,
    ) -> Result<Point, LinearizationError> {
        let center = arc::circle_center(&p0.vec2(), &p1.vec2(), &p2.vec2())?;
        Ok(self
            .factory
            .create_point([center.x, center.y], p0.crs().cloned(), p0.precision()))
    }

    fn arc_points(
        &self,
        p0: &Point,
        p1: &Point,
        p2: &Point,
        is_circle: bool,
        criterion: LinearizationCriterion,
    ) -> Result<Points, LinearizationError> {
        if are_collinear(p0, p1, p2) {
            let points = if is_circle {
                vec![p0.clone(), p1.clone(), p0.clone()]
            } else {
                vec![p0.clone(), p2.clone()]
            };
            return Ok(points.into());
        }

        let num_points = self.num_points_for_arc(p0, p1, p2, is_circle, criterion)?;
        arc::interpolate(p0, p1, p2, num_points, is_circle, &self.factory)
    }

    fn num_points_for_arc(
        &self,
        p0: &Point,
        p1: &Point,
        p2: &Point,
        is_circle: bool,
        criterion: LinearizationCriterion,
    ) -> Result<usize, LinearizationError> {
        match criterion {
            LinearizationCriterion::NumPoints { num_points } => Ok(num_points),
            LinearizationCriterion::MaxError {
                max_error,
                max_num_points,
            } => {
                let num_points =
                    arc::calc_num_points(p0, p1, p2, is_circle, max_error, max_num_points)?;
                log::debug!("Using {num_points} points for arc linearization");
                Ok(num_points)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geolinear_types::{
        CompositeRing, Crs, LineString, LinearRing, OpaqueSegment, PrecisionModel, Segment, SegmentedCurve,
    };
    use nalgebra::Vector2;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Parses `"x y, x y, ..."` coordinate lists.
    fn coords(list: &str) -> Vec<(f64, f64)> {
        list.split(',')
            .map(|pair| {
                let mut values = pair.split_whitespace().map(|v| v.parse::<f64>().unwrap());
                (values.next().unwrap(), values.next().unwrap())
            })
            .collect()
    }

    fn assert_points(actual: &Points, expected: &str) {
        let expected = coords(expected);
        assert_eq!(actual.len(), expected.len());
        for (point, (x, y)) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(point.x(), x, epsilon = 1e-9);
            assert_abs_diff_eq!(point.y(), y, epsilon = 1e-9);
        }
    }

    fn arc(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> Arc {
        Arc::new(p(p0.0, p0.1), p(p1.0, p1.1), p(p2.0, p2.1))
    }

    fn circle(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> Circle {
        Circle::new(p(p0.0, p0.1), p(p1.0, p1.1), p(p2.0, p2.1))
    }

    fn fifteen() -> LinearizationCriterion {
        LinearizationCriterion::num_points(15)
    }

    #[test]
    fn arc_over_two_quadrants() {
        let linearizer = CurveLinearizer::new();
        let (p0, p1, p2) = ((-1.7, 2.5), (-3.0, 0.5), (-2.3, -2.5));

        let line = linearizer.linearize_arc(&arc(p0, p1, p2), fifteen()).unwrap();
        assert_points(
            line.points(),
            "-1.7 2.5, -2.006268887232975 2.240298830592298, -2.280689527287858 1.9471458995298252, \
             -2.5196312406291193 1.6244197210066154, -2.719932746135047 1.2763900734610205, \
             -2.8789439859352446 0.9076615089371216, -2.994561186588522 0.5231124332760927, \
             -3.0652546927297304 0.127830563127568, -3.0900892049368194 -0.272954386293051, \
             -3.0687361540641627 -0.6739398921371922, -3.001478048325461 -1.069820778125759, \
             -2.8892047356128234 -1.4553594038575817, -2.7334016305028315 -1.8254549605949406, \
             -2.536130061710344 -2.1752109567191, -2.3 -2.5",
        );

        let reversed = linearizer.linearize_arc(&arc(p2, p1, p0), fifteen()).unwrap();
        assert_points(
            reversed.points(),
            "-2.3 -2.5, -2.5361300617103426 -2.1752109567191003, -2.7334016305028297 -1.8254549605949428, \
             -2.8892047356128225 -1.4553594038575826, -3.0014780483254597 -1.0698207781257598, \
             -3.068736154064162 -0.6739398921371934, -3.0900892049368185 -0.2729543862930522, \
             -3.06525469272973 0.1278305631275666, -2.9945611865885216 0.5231124332760911, \
             -2.878943985935244 0.9076615089371203, -2.7199327461350467 1.276390073461019, \
             -2.519631240629119 1.6244197210066136, -2.280689527287859 1.9471458995298225, \
             -2.0062688872329755 2.240298830592297, -1.7 2.5",
        );
    }

    #[test]
    fn arc_below_axis() {
        let line = CurveLinearizer::new()
            .linearize_arc(&arc((2.3, -2.5), (1.0, -3.5), (-2.3, -2.5)), fifteen())
            .unwrap();
        assert_points(
            line.points(),
            "2.3 -2.5, 2.056305411080411 -2.7960391691981443, 1.774800678026383 -3.0563876426647565, \
             1.4606619456235812 -3.2762582845717096, 1.1196654135971806 -3.451608241840547, \
             0.7580811272214822 -3.5792132817660605, 0.3825576873857044 -3.6567270773260736, \
             0.0000000000000004 -3.682724350073748, -0.3825576873857036 -3.6567270773260736, \
             -0.7580811272214821 -3.5792132817660605, -1.1196654135971804 -3.4516082418405465, \
             -1.460661945623581 -3.276258284571709, -1.774800678026382 -3.0563876426647565, \
             -2.0563054110804115 -2.796039169198144, -2.3 -2.5",
        );
    }

    #[test]
    fn arc_over_four_quadrants() {
        let line = CurveLinearizer::new()
            .linearize_arc(&arc((1.7, 2.5), (3.0, 0.5), (-2.3, 2.5)), fifteen())
            .unwrap();
        assert_points(
            line.points(),
            "1.7 2.5, 2.527698122123212 1.62577746297488, 2.9962725289439467 0.5168197311917764, \
             3.046213267629344 -0.6860331892554772, 2.671177757448691 -1.8300164022933552, \
             1.9187963111049964 -2.7698415907229377, 0.8846229830504084 -3.386148943550589, \
             -0.3 -3.600666107520471, -1.4846229830504085 -3.386148943550589, \
             -2.5187963111049965 -2.7698415907229386, -3.271177757448691 -1.8300164022933556, \
             -3.646213267629344 -0.6860331892554776, -3.5962725289439472 0.5168197311917756, \
             -3.1276981221232143 1.6257774629748782, -2.3 2.5",
        );
    }

    #[test]
    fn full_circle() {
        let linearizer = CurveLinearizer::new();
        let (p0, p1, p2) = ((-1.7, 2.5), (-3.0, 0.5), (-2.3, -2.5));

        let line = linearizer
            .linearize_circle(&circle(p0, p1, p2), fifteen())
            .unwrap();
        assert_points(
            line.points(),
            "-1.7 2.5, -2.7016581805723767 1.3123248162113277, -3.088808067948505 -0.1923367462669825, \
             -2.7847698788517685 -1.715968011523047, -1.8497621054164624 -2.95679512136171, \
             -0.4689745042892608 -3.6690570489335883, 1.0841110058779768 -3.711681584163785, \
             2.50188679245283 -3.0762264150943404, 3.5035449730252055 -1.8885512313056685, \
             3.8906948604013345 -0.3838896688273583, 3.5866566713045978 1.1397415964287063, \
             2.651648897869292 2.3805687062673697, 1.2708612967420905 3.092830633839248, \
             -0.2822242134251467 3.1354551690694445, -1.7 2.5",
        );
        assert_eq!(line.points()[0], line.points()[14]);

        let reversed = linearizer
            .linearize_circle(&circle(p2, p1, p0), fifteen())
            .unwrap();
        assert_points(
            reversed.points(),
            "-2.3 -2.5, -2.992224229754389 -1.109058926972116, -3.0123899967132983 0.4444805140263982, \
             -2.3565032234136143 1.8529207837948918, -1.1544703292307315 2.8373030135193718, \
             0.3556313291764255 3.2026582299471267, 1.8747075981788668 2.8766233516769613, \
             3.1018867924528286 1.9237735849056588, 3.794111022207218 0.5328325118777754, \
             3.814276789166127 -1.0207069291207391, 3.1583900158664444 -2.4291471988892326, \
             1.9563571216835611 -3.413529428613713, 0.4462554632764042 -3.778884645041468, \
             -1.0728208057260369 -3.452849766771303, -2.3 -2.5",
        );
    }

    #[test]
    fn uniform_spacing() {
        let p0 = p(0.5, 0.5);
        let p2 = p(-2.0, -0.6);
        let line = CurveLinearizer::new()
            .linearize_arc(&Arc::new(p0.clone(), p(-0.5, -0.2), p2.clone()), fifteen())
            .unwrap();
        let points = line.points();

        assert_eq!(points.len(), 15);
        for segment in points.iter_segments() {
            assert_abs_diff_eq!(segment.length(), 0.199115, epsilon = 1e-6);
        }
        assert_eq!(points[0], p0);
        assert_eq!(points[14], p2);
    }

    #[test]
    fn end_points_are_exact() {
        let crs = Some(Crs::new("EPSG:25833"));
        let p0 = Point::new_3d(384776.006, 5740367.157, 12.5).with_crs(crs.clone());
        let p1 = p(384774.079, 5740367.526);
        let p2 = Point::new_3d(384772.318, 5740368.390, f64::NAN);
        let linearizer = CurveLinearizer::new();

        for criterion in [
            LinearizationCriterion::num_points(7),
            LinearizationCriterion::max_error(0.0001, 0),
        ] {
            let line = linearizer
                .linearize_arc(&Arc::new(p0.clone(), p1.clone(), p2.clone()), criterion)
                .unwrap();
            let points = line.points();
            assert_eq!(points[0], p0);
            assert!(points[points.len() - 1].equal_2d(&p2));
            assert!(points[points.len() - 1].z().is_some_and(f64::is_nan));

            let circle = linearizer
                .linearize_circle(&Circle::new(p0.clone(), p1.clone(), p2.clone()), criterion)
                .unwrap();
            let points = circle.points();
            assert_eq!(points[0], p0);
            assert_eq!(points[points.len() - 1], p0);
        }
    }

    #[test]
    fn computed_points_keep_tags() {
        let crs = Some(Crs::new("EPSG:4326"));
        let precision = PrecisionModel::Fixed { scale: 100.0 };
        let p0 = p(1.0, 0.0).with_crs(crs.clone()).with_precision(precision);

        let line = CurveLinearizer::new()
            .linearize_arc(
                &Arc::new(p0, p(0.0, 1.0), p(-1.0, 0.0)),
                LinearizationCriterion::num_points(9),
            )
            .unwrap();

        for point in &line.points()[..8] {
            assert_eq!(point.crs(), crs.as_ref());
            assert_eq!(point.precision(), precision);
        }
    }

    #[test]
    fn semicircle_direction() {
        let linearizer = CurveLinearizer::new();
        let (a, b, c) = (p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0));
        assert!(!crate::orient::is_clockwise(&a, &b, &c).unwrap());

        let line = linearizer
            .linearize_arc(&Arc::new(a, b, c), LinearizationCriterion::num_points(5))
            .unwrap();
        let angles: Vec<f64> = line
            .points()
            .iter()
            .map(|point| point.y().atan2(point.x()).to_degrees())
            .collect();

        for (angle, expected) in angles.iter().zip([0.0, 45.0, 90.0, 135.0, 180.0]) {
            assert_abs_diff_eq!(*angle, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn collinear_control_points() {
        let linearizer = CurveLinearizer::new();
        let (a, b, c) = (p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0));

        for criterion in [
            fifteen(),
            LinearizationCriterion::max_error(0.01, 0),
        ] {
            let line = linearizer
                .linearize_arc(&Arc::new(a.clone(), b.clone(), c.clone()), criterion)
                .unwrap();
            assert_eq!(&line.points()[..], &[a.clone(), c.clone()]);

            let line = linearizer
                .linearize_circle(&Circle::new(a.clone(), b.clone(), c.clone()), criterion)
                .unwrap();
            assert_eq!(&line.points()[..], &[a.clone(), b.clone(), a.clone()]);
        }
    }

    #[test]
    fn point_count_follows_criterion() {
        let linearizer = CurveLinearizer::new();
        let semicircle = arc((1.0, 0.0), (0.0, 1.0), (-1.0, 0.0));

        for n in [2, 3, 10, 101] {
            let line = linearizer
                .linearize_arc(&semicircle, LinearizationCriterion::num_points(n))
                .unwrap();
            assert_eq!(line.points().len(), n);
        }

        let line = linearizer
            .linearize_arc(&semicircle, LinearizationCriterion::max_error(0.01, 0))
            .unwrap();
        assert_eq!(line.points().len(), 14);

        let line = linearizer
            .linearize_arc(&semicircle, LinearizationCriterion::max_error(0.01, 8))
            .unwrap();
        assert_eq!(line.points().len(), 8);

        let line = linearizer
            .linearize_arc(&semicircle, LinearizationCriterion::max_error(0.01, 200))
            .unwrap();
        assert_eq!(line.points().len(), 14);

        let line = linearizer
            .linearize_circle(
                &circle((0.0, 2.0), (2.0, 0.0), (-2.0, 0.0)),
                LinearizationCriterion::max_error(0.001, 1000),
            )
            .unwrap();
        assert_eq!(line.points().len(), 102);
    }

    #[test]
    fn points_lie_on_circle() {
        init_logger();
        let linearizer = CurveLinearizer::new();
        let cases = [
            ((0.0, 2.0), (2.0, 0.0), (-2.0, 0.0)),
            ((8.0, -1.0), (3.0, 1.6), (-110.0, 16.77777)),
        ];

        for (a, b, c) in cases {
            let center = linearizer
                .calc_circle_center(&p(a.0, a.1), &p(b.0, b.1), &p(c.0, c.1))
                .unwrap();
            let radius = center.distance(&p(a.0, a.1));
            assert_abs_diff_eq!(center.distance(&p(b.0, b.1)), radius, epsilon = 1e-9);
            assert_abs_diff_eq!(center.distance(&p(c.0, c.1)), radius, epsilon = 1e-9);

            for n in [10, 1000] {
                let line = linearizer
                    .linearize_circle(&circle(a, b, c), LinearizationCriterion::num_points(n))
                    .unwrap();
                for point in line.points() {
                    assert_abs_diff_eq!(center.distance(point), radius, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn error_bound_holds() {
        init_logger();
        let linearizer = CurveLinearizer::new();
        let cases = [
            (arc((0.0, 2.0), (2.0, 0.0), (-2.0, 0.0)), 0.001),
            (arc((8.0, -1.0), (3.0, 1.6), (-110.0, 16.77777)), 0.0001),
            (arc((0.5, 0.5), (-0.5, -0.2), (-2.0, -0.6)), 0.05),
            (arc((-2.0, 0.0), (0.0, -2.0), (2.0, 0.0)), 0.3),
        ];

        for (arc, max_error) in cases {
            let center = linearizer
                .calc_circle_center(arc.p0(), arc.p1(), arc.p2())
                .unwrap();
            let radius = center.distance(arc.p0());

            let line = linearizer
                .linearize_arc(&arc, LinearizationCriterion::max_error(max_error, 0))
                .unwrap();
            let points = line.points();

            // sample the true arc between every pair of consecutive points
            for Segment(start, end) in points.iter_segments() {
                let a0 = (start.y() - center.y()).atan2(start.x() - center.x());
                let mut a1 = (end.y() - center.y()).atan2(end.x() - center.x());
                if (a1 - a0).abs() > std::f64::consts::PI {
                    a1 += if a1 < a0 {
                        std::f64::consts::TAU
                    } else {
                        -std::f64::consts::TAU
                    };
                }
                for k in 0..=20 {
                    let angle = a0 + (a1 - a0) * k as f64 / 20.0;
                    let on_arc = p(
                        center.x() + radius * angle.cos(),
                        center.y() + radius * angle.sin(),
                    );
                    let deviation = Segment(start, end).distance_to_point_sq(&on_arc).sqrt();
                    assert!(
                        deviation <= max_error + 1e-9,
                        "deviation {deviation} exceeds {max_error}"
                    );
                }
            }
        }
    }

    #[test]
    fn error_bound_larger_than_arc() {
        assert_matches!(
            CurveLinearizer::new().linearize_arc(
                &arc((1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)),
                LinearizationCriterion::max_error(5.0, 0)
            ),
            Err(LinearizationError::ErrorBoundExceedsDiameter { .. })
        );
    }

    #[test]
    fn negligible_error_bound() {
        let linearizer = CurveLinearizer::new();
        let semicircle = arc((1.0, 0.0), (0.0, 1.0), (-1.0, 0.0));

        let line = linearizer
            .linearize_arc(&semicircle, LinearizationCriterion::max_error(1e-20, 100))
            .unwrap();
        assert_eq!(line.points().len(), 100);
        assert_eq!(line.points()[99], p(-1.0, 0.0));

        assert_matches!(
            linearizer.linearize_arc(&semicircle, LinearizationCriterion::max_error(1e-20, 0)),
            Err(LinearizationError::ErrorBoundTooSmall { .. })
        );
    }

    #[test]
    fn coarse_error_bound() {
        let linearizer = CurveLinearizer::new();
        let semicircle = arc((1.0, 0.0), (0.0, 1.0), (-1.0, 0.0));
        let full = circle((1.0, 0.0), (0.0, 1.0), (-1.0, 0.0));

        for max_error in [1.0, 1.5, 2.0] {
            let criterion = LinearizationCriterion::max_error(max_error, 0);
            for line in [
                linearizer.linearize_arc(&semicircle, criterion).unwrap(),
                linearizer.linearize_circle(&full, criterion).unwrap(),
            ] {
                assert!(line.points().len() >= 3);
                assert!(line
                    .points()
                    .iter()
                    .all(|point| point.x().is_finite() && point.y().is_finite()));
            }
        }
    }

    #[test]
    fn invalid_criterion() {
        let linearizer = CurveLinearizer::new();
        let semicircle = arc((1.0, 0.0), (0.0, 1.0), (-1.0, 0.0));

        assert_matches!(
            linearizer.linearize_arc(&semicircle, LinearizationCriterion::num_points(1)),
            Err(LinearizationError::InvalidCriterion(_))
        );
        assert_matches!(
            linearizer.linearize_arc(&semicircle, LinearizationCriterion::max_error(-1.0, 0)),
            Err(LinearizationError::InvalidCriterion(_))
        );
    }

    #[test]
    fn arc_string_shares_boundary_points() {
        let control_points = vec![
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(2.0, 0.0),
            p(3.0, -1.0),
            p(4.0, 0.0),
        ];
        let arc_string = ArcString::new(control_points.clone()).unwrap();

        let line = CurveLinearizer::new()
            .linearize_arc_string(&arc_string, LinearizationCriterion::num_points(6))
            .unwrap();
        let points = line.points();

        assert_eq!(points.len(), 11);
        assert_eq!(points[0], control_points[0]);
        assert_eq!(points[5], control_points[2]);
        assert_eq!(points[10], control_points[4]);
        assert_eq!(
            points.iter().filter(|point| **point == control_points[2]).count(),
            1
        );
    }

    #[test]
    fn arc_string_with_straight_element() {
        let control_points = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 1.0),
            p(4.0, 0.0),
        ];
        let arc_string = ArcString::new(control_points.clone()).unwrap();

        let line = CurveLinearizer::new()
            .linearize_arc_string(&arc_string, LinearizationCriterion::num_points(5))
            .unwrap();
        let points = line.points();

        assert_eq!(points.len(), 7);
        assert_eq!(&points[..3], &control_points[..3]);
        assert_eq!(points[6], control_points[4]);
    }

    #[test]
    fn cubic_spline_criteria() {
        let linearizer = CurveLinearizer::new();
        let spline = CubicSpline::new(
            vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)],
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 0.0),
        )
        .unwrap();

        let line = linearizer
            .linearize_cubic_spline(&spline, LinearizationCriterion::num_points(11))
            .unwrap();
        assert_eq!(line.points().len(), 11);

        let line = linearizer
            .linearize_cubic_spline(&spline, LinearizationCriterion::max_error(0.1, 21))
            .unwrap();
        assert_eq!(line.points().len(), 21);

        assert_matches!(
            linearizer.linearize_cubic_spline(&spline, LinearizationCriterion::max_error(0.1, 0)),
            Err(LinearizationError::UnsupportedCriterionForSegment {
                criterion: "max_error",
                segment: SegmentType::CubicSpline
            })
        );
    }

    #[test]
    fn geodesic_string_keeps_control_points() {
        let control_points = vec![p(10.0, 50.0), p(11.0, 51.0), p(12.5, 50.5)];
        let geodesic = GeodesicString::new(control_points.clone()).unwrap();

        let line = CurveLinearizer::new()
            .linearize_geodesic_string(&geodesic, fifteen())
            .unwrap();
        assert_eq!(&line.points()[..], control_points.as_slice());
    }

    fn segment_json(kind: &str, count: usize) -> String {
        let points: Vec<Point> = (0..count).map(|i| p(i as f64, (i % 2) as f64)).collect();
        let body = match kind {
            "CubicSpline" => serde_json::json!({
                "control_points": points,
                "vector_at_start": Vector2::new(1.0, 0.0),
                "vector_at_end": Vector2::new(1.0, 0.0),
            }),
            _ => serde_json::json!({ "control_points": points }),
        };

        let mut segment = serde_json::Map::new();
        segment.insert(kind.to_owned(), body);
        serde_json::Value::Object(segment).to_string()
    }

    #[test]
    fn malformed_segments_from_json() {
        let malformed = [
            ("ArcString", 0),
            ("ArcString", 1),
            ("ArcString", 4),
            ("CubicSpline", 1),
            ("GeodesicString", 0),
        ];
        for (kind, count) in malformed {
            let json = segment_json(kind, count);
            assert!(serde_json::from_str::<CurveSegment>(&json).is_err(), "{json}");
        }

        let linearizer = CurveLinearizer::new();
        let valid = [("ArcString", 5, 29), ("CubicSpline", 2, 15), ("GeodesicString", 2, 2)];
        for (kind, count, expected) in valid {
            let segment: CurveSegment = serde_json::from_str(&segment_json(kind, count)).unwrap();
            let line = linearizer.linearize_segment(&segment, fifteen()).unwrap();
            assert_eq!(line.points().len(), expected, "{kind}");
        }
    }

    #[test]
    fn linear_segment_is_borrowed() {
        let segment = CurveSegment::LineString(LineStringSegment::new(vec![
            p(0.0, 0.0),
            p(1.0, 1.0),
        ]));
        let result = CurveLinearizer::new()
            .linearize_segment(&segment, fifteen())
            .unwrap();

        let CurveSegment::LineString(original) = &segment else {
            unreachable!()
        };
        assert_matches!(result, Cow::Borrowed(linear) if std::ptr::eq(linear, original));
    }

    #[test]
    fn unsupported_segment() {
        let segment = CurveSegment::Opaque(
            OpaqueSegment::new(SegmentType::Clothoid, vec![p(0.0, 0.0), p(1.0, 1.0)]).unwrap(),
        );
        assert_matches!(
            CurveLinearizer::new().linearize_segment(&segment, fifteen()),
            Err(LinearizationError::UnsupportedSegmentType(SegmentType::Clothoid))
        );
    }

    fn boundary_curve() -> SegmentedCurve {
        SegmentedCurve::new(
            Some("c1".into()),
            Some(Crs::new("EPSG:25832")),
            vec![
                CurveSegment::Arc(arc(
                    (384776.006, 5740367.157),
                    (384774.079, 5740367.526),
                    (384772.318, 5740368.390),
                )),
                CurveSegment::Arc(arc(
                    (384772.318, 5740368.390),
                    (384770.240, 5740370.494),
                    (384769.157, 5740373.245),
                )),
                CurveSegment::Arc(arc(
                    (384769.157, 5740373.245),
                    (384769.672, 5740377.484),
                    (384772.453, 5740380.726),
                )),
                CurveSegment::Arc(arc(
                    (384772.453, 5740380.726),
                    (384780.502, 5740380.644),
                    (384783.672, 5740373.244),
                )),
                CurveSegment::LineString(LineStringSegment::new(vec![
                    p(384783.672, 5740373.244),
                    p(384776.006, 5740367.157),
                ])),
            ],
        )
    }

    #[test]
    fn segmented_curve() {
        init_logger();
        let curve = Curve::Segmented(boundary_curve());
        let criterion = LinearizationCriterion::max_error(0.0001, 150);

        let result = CurveLinearizer::new().linearize(&curve, criterion).unwrap();
        let Cow::Owned(Curve::Segmented(linear)) = result else {
            panic!("expected a new segmented curve");
        };

        assert!(linear.is_linear());
        assert_eq!(linear.id(), Some("c1"));
        assert_eq!(linear.crs().map(Crs::id), Some("EPSG:25832"));
        assert_eq!(linear.segments().len(), 5);
        assert_eq!(
            linear.segments()[4].control_points(),
            boundary_curve().segments()[4].control_points()
        );
        for segment in &linear.segments()[..4] {
            let count = segment.control_points().len();
            assert!(count > 2 && count <= 150, "unexpected point count {count}");
        }
    }

    #[test]
    fn linear_curves_are_borrowed() {
        let linearizer = CurveLinearizer::new();

        let line_string = Curve::LineString(LineString::new(None, None, vec![p(0.0, 0.0), p(1.0, 0.0)]));
        assert_matches!(linearizer.linearize(&line_string, fifteen()), Ok(Cow::Borrowed(_)));

        let segmented = Curve::Segmented(SegmentedCurve::new(
            None,
            None,
            vec![CurveSegment::LineString(LineStringSegment::new(vec![
                p(0.0, 0.0),
                p(1.0, 0.0),
            ]))],
        ));
        assert_matches!(linearizer.linearize(&segmented, fifteen()), Ok(Cow::Borrowed(_)));

        let ring = Ring::Linear(LinearRing::new(
            None,
            None,
            vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)],
        ));
        assert_matches!(linearizer.linearize_ring(&ring, fifteen()), Ok(Cow::Borrowed(_)));
    }

    #[test]
    fn ring_stays_ring() {
        let ring = Ring::Composite(CompositeRing::new(
            Some("r1".into()),
            Some(Crs::new("EPSG:25832")),
            vec![
                Curve::Segmented(boundary_curve()),
                Curve::LineString(LineString::new(
                    None,
                    None,
                    vec![p(384776.006, 5740367.157), p(384776.006, 5740367.157)],
                )),
            ],
        ));
        let curve = Curve::Ring(ring);

        let result = CurveLinearizer::new()
            .linearize(&curve, LinearizationCriterion::num_points(10))
            .unwrap();
        let Curve::Ring(Ring::Composite(linear)) = result.as_ref() else {
            panic!("expected a composite ring");
        };

        assert_eq!(linear.id(), Some("r1"));
        assert_eq!(linear.crs().map(Crs::id), Some("EPSG:25832"));
        assert_eq!(linear.members().len(), 2);
        assert_matches!(&linear.members()[0], Curve::Segmented(c) if c.is_linear());
        assert_matches!(&linear.members()[1], Curve::LineString(_));
    }
}
