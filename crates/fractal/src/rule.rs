use crate::FractalError;
use crate::repeat::repeated;
use tilebg_types::{Path, Vector, refined_segments};

/// A substitution replacing one segment by a fixed sequence of segments
/// whose sum is the original segment.
pub trait RefinementRule {
    fn refine(&self, segment: &Vector) -> Vec<Vector>;
}

impl<F> RefinementRule for F
where
    F: Fn(&Vector) -> Vec<Vector>,
{
    fn refine(&self, segment: &Vector) -> Vec<Vector> {
        self(segment)
    }
}

/// Applies `rule` to every segment of the closed `seed`, `iterations` times,
/// and reassembles the curve from the seed's first point.
pub fn generate_island<R>(seed: &Path, rule: &R, iterations: usize) -> Result<Path, FractalError>
where
    R: RefinementRule + ?Sized,
{
    if !seed.is_closed() {
        return Err(FractalError::OpenSeed);
    }
    let segments = repeated(
        |segments: Vec<Vector>| refined_segments(&segments, |v| rule.refine(v)),
        iterations,
        seed.segments(),
    );
    log::debug!(
        "Refined {} seed segments into {} after {} iteration(s)",
        seed.len() - 1,
        segments.len(),
        iterations
    );
    let island = Path::from_segments(&segments, seed.first())?;
    if !island.is_closed() {
        return Err(FractalError::OpenCurve { iterations });
    }
    Ok(island)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::regular_polygon;
    use tilebg_types::{Point, Surd};

    fn halve(v: &Vector) -> Vec<Vector> {
        let half = v * &Surd::ratio(1, 2);
        vec![half.clone(), half]
    }

    #[test]
    fn test_zero_iterations_returns_seed() {
        let seed = regular_polygon(4).unwrap();
        assert_eq!(generate_island(&seed, &halve, 0).unwrap(), seed);
    }

    #[test]
    fn test_segment_count_grows_per_iteration() {
        let seed = regular_polygon(3).unwrap();
        let island = generate_island(&seed, &halve, 3).unwrap();
        assert_eq!(island.len(), 3 * 8 + 1);
        assert_eq!(island.first(), seed.first());
    }

    #[test]
    fn test_rule_that_breaks_closure_is_reported() {
        let seed = regular_polygon(4).unwrap();
        let drift = |v: &Vector| vec![v.clone(), Point::from_integers(1, 0)];
        assert_eq!(
            generate_island(&seed, &drift, 1),
            Err(FractalError::OpenCurve { iterations: 1 })
        );
    }

    #[test]
    fn test_open_seed_is_rejected() {
        let seed = Path::new(vec![Point::origin(), Point::from_integers(1, 0)]).unwrap();
        assert_eq!(generate_island(&seed, &halve, 1), Err(FractalError::OpenSeed));
    }
}
