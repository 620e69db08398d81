//! Ordered point sequences.
//!
//! [`Points`] is the vertex list of every linear output: a polyline is exactly the order of its points. The sequence
//! is immutable once built; algorithms that need a different order or different points create a new sequence.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::segment::Segment;

/// Immutable ordered list of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Points(Vec<Point>);

impl Points {
    /// Creates a new sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Point at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.0.get(index)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Iterates over the straight segments between consecutive points.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.0.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
    }

    /// Returns true if the first and the last points have the same planar coordinates.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => self.0.len() > 1 && first.equal_2d(last),
            _ => false,
        }
    }

    /// Consumes the sequence and returns the underlying vector.
    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl std::ops::Deref for Points {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Point>> for Points {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Points {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sequence() {
        let open: Points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)].into();
        assert!(!open.is_closed());

        let closed: Points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]
        .into();
        assert!(closed.is_closed());
        assert_eq!(closed.iter_segments().count(), 2);

        assert!(!Points::new(vec![Point::new(0.0, 0.0)]).is_closed());
        assert!(!Points::default().is_closed());
    }
}
