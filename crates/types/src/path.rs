//! Polyline paths made of straight segments, and their affine transforms.
//!
//! The free functions work on plain point slices and never mutate their input;
//! [`Path`] adds the "at least two points" guarantee and closure detection on
//! top of them.

use crate::error::GeometryError;
use crate::geometry::{Angle, Point, Rotation, Vector};
use crate::number::Surd;
use itertools::Itertools;

/// Segment vectors between consecutive points.
pub fn points_to_segments(points: &[Point]) -> Vec<Vector> {
    points.iter().tuple_windows().map(|(p0, p1)| p1 - p0).collect()
}

/// Prefix sums of `segments` starting at `initial_point`.
///
/// The result has one more point than there are segments, and inverts
/// [`points_to_segments`] for any point sequence starting at `initial_point`.
pub fn segments_to_points(segments: &[Vector], initial_point: &Point) -> Vec<Point> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(initial_point.clone());
    for segment in segments {
        let next = &points[points.len() - 1] + segment;
        points.push(next);
    }
    points
}

pub fn scale(points: &[Point], factors: (&Surd, &Surd)) -> Vec<Point> {
    let (sx, sy) = factors;
    points.iter().map(|p| p.scaled(sx, sy)).collect()
}

pub fn shift(points: &[Point], offset: &Vector) -> Vec<Point> {
    points.iter().map(|p| p + offset).collect()
}

pub fn rotate(points: &[Point], theta: Angle) -> Vec<Point> {
    let rotation = Rotation::new(theta);
    points.iter().map(|p| rotation.apply(p)).collect()
}

/// Replace every segment by the segments `rule` maps it to, in order.
pub fn refined_segments<F>(segments: &[Vector], rule: F) -> Vec<Vector>
where
    F: Fn(&Vector) -> Vec<Vector>,
{
    segments.iter().flat_map(rule).collect()
}

/// An ordered sequence of at least two points joined by straight segments.
///
/// A path is closed when its last point is exactly its first point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    pub fn from_segments(segments: &[Vector], initial_point: &Point) -> Result<Self, GeometryError> {
        Self::new(segments_to_points(segments, initial_point))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Point {
        &self.points[0]
    }

    pub fn last(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// The points without the closing repeat of the first one.
    pub fn distinct_points(&self) -> &[Point] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    pub fn segments(&self) -> Vec<Vector> {
        points_to_segments(&self.points)
    }

    pub fn scaled(&self, sx: &Surd, sy: &Surd) -> Path {
        Path {
            points: scale(&self.points, (sx, sy)),
        }
    }

    pub fn shifted(&self, offset: &Vector) -> Path {
        Path {
            points: shift(&self.points, offset),
        }
    }

    pub fn rotated(&self, theta: Angle) -> Path {
        Path {
            points: rotate(&self.points, theta),
        }
    }
}
