use crate::point::Point;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a>(pub &'a Point, pub &'a Point);

impl Segment<'_> {
    /// Shortest euclidian distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the smaller one
    ///   of the distances between the point and the segment's endpoints
    pub fn distance_to_point_sq(&self, point: &Point) -> f64 {
        if self.0.equal_2d(self.1) {
            return self.0.distance_sq(point);
        }

        let ds = self.1.vec2() - self.0.vec2();
        let dp = point.vec2() - self.0.vec2();
        let ds_len = ds.norm_squared();

        let r = dp.dot(&ds) / ds_len;
        if r <= 0.0 {
            self.0.distance_sq(point)
        } else if r >= 1.0 {
            self.1.distance_sq(point)
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.0.distance(self.1)
    }
}
