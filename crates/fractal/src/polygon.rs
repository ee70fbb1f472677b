use crate::FractalError;
use std::iter::successors;
use tilebg_types::{Angle, Path, Point, Rotation};

/// A closed regular `n`-gon inscribed in the unit circle.
///
/// Starts at `(0, 1)` and walks clockwise, so the result has `n + 1` points
/// with the last one equal to the first. Only `n` whose turn `2π/n` is a
/// multiple of π/6 (3, 4, 6 and 12) can be built exactly.
pub fn regular_polygon(n: usize) -> Result<Path, FractalError> {
    if n < 3 {
        return Err(FractalError::DegeneratePolygon(n));
    }
    let sides = i64::try_from(n).unwrap_or(i64::MAX);
    let rotation = Rotation::new(Angle::from_pi_ratio(-2, sides)?);
    let points: Vec<Point> = successors(Some(Point::from_integers(0, 1)), |p| Some(rotation.apply(p)))
        .take(n + 1)
        .collect();
    let polygon = Path::new(points)?;
    if !polygon.is_closed() {
        return Err(FractalError::OpenCurve { iterations: 0 });
    }
    Ok(polygon)
}
