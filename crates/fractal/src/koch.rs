//! Koch snowflake: every segment gains an outward equilateral bump.

use crate::FractalError;
use crate::polygon::regular_polygon;
use crate::rule::{RefinementRule, generate_island};
use tilebg_types::{Angle, Path, Rotation, Surd, Vector};

/// `v/3 · [1, e^{iπ/3}, e^{-iπ/3}, 1]`
#[derive(Debug, Clone)]
pub struct KochRule {
    outward: Rotation,
    inward: Rotation,
}

impl Default for KochRule {
    fn default() -> Self {
        Self {
            outward: Rotation::new(Angle::from_steps(2)),
            inward: Rotation::new(Angle::from_steps(-2)),
        }
    }
}

impl RefinementRule for KochRule {
    fn refine(&self, segment: &Vector) -> Vec<Vector> {
        let third = segment * &Surd::ratio(1, 3);
        vec![
            third.clone(),
            self.outward.apply(&third),
            self.inward.apply(&third),
            third,
        ]
    }
}

/// Koch island grown from the clockwise unit triangle.
pub fn koch_island(iterations: usize) -> Result<Path, FractalError> {
    generate_island(&regular_polygon(3)?, &KochRule::default(), iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilebg_types::Point;

    #[test]
    fn test_rule_sums_to_segment() {
        let v = Point::new(Surd::integer(3), Surd::sqrt3());
        let pieces = KochRule::default().refine(&v);
        assert_eq!(pieces.len(), 4);
        let sum = pieces.iter().fold(Point::origin(), |acc, p| &acc + p);
        assert_eq!(sum, v);
    }

    #[test]
    fn test_island_shape() {
        let island = koch_island(3).unwrap();
        assert!(island.is_closed());
        assert_eq!(island.len(), 3 * 4usize.pow(3) + 1);
        let expected = Surd::integer(3) * Surd::ratio(1, 729);
        assert!(island.segments().iter().all(|s| s.squared_length() == expected));
    }

    #[test]
    fn test_first_bump_points_outward() {
        // Clockwise traversal: the bump apex must lie farther from the centre
        // than the edge it grows from.
        let island = koch_island(1).unwrap();
        let apex = &island.points()[2];
        assert_eq!(apex.squared_length(), Surd::one());
        let edge_mid_sq = Surd::ratio(1, 4);
        assert!((apex.squared_length() - edge_mid_sq).is_positive());
    }
}
