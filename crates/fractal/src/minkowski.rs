//! Minkowski island ("quadratic Koch" sausage) on a square seed.

use crate::FractalError;
use crate::polygon::regular_polygon;
use crate::rule::{RefinementRule, generate_island};
use tilebg_types::{Path, Point, Surd, Vector};

/// `v/4 · [1, i, 1, -i, -i, 1, i, 1]`
#[derive(Debug, Clone, Copy, Default)]
pub struct MinkowskiRule;

impl RefinementRule for MinkowskiRule {
    fn refine(&self, segment: &Vector) -> Vec<Vector> {
        let quarter = segment * &Surd::ratio(1, 4);
        let left = quarter.complex_mul(&Point::from_integers(0, 1));
        let right = -&left;
        vec![
            quarter.clone(),
            left.clone(),
            quarter.clone(),
            right.clone(),
            right,
            quarter.clone(),
            left,
            quarter,
        ]
    }
}

/// Minkowski island grown from the clockwise unit diamond.
pub fn minkowski_island(iterations: usize) -> Result<Path, FractalError> {
    generate_island(&regular_polygon(4)?, &MinkowskiRule, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_shape() {
        let pieces = MinkowskiRule.refine(&Point::from_integers(4, 0));
        assert_eq!(
            pieces,
            vec![
                Point::from_integers(1, 0),
                Point::from_integers(0, 1),
                Point::from_integers(1, 0),
                Point::from_integers(0, -1),
                Point::from_integers(0, -1),
                Point::from_integers(1, 0),
                Point::from_integers(0, 1),
                Point::from_integers(1, 0),
            ]
        );
    }

    #[test]
    fn test_island_is_closed_with_rational_coordinates() {
        let island = minkowski_island(4).unwrap();
        assert!(island.is_closed());
        assert_eq!(island.len(), 4 * 8usize.pow(4) + 1);
        assert!(island.points().iter().all(|p| p.x.is_rational() && p.y.is_rational()));
    }
}
