//! Gosper island: the boundary of the flowsnake tiling, grown from a hexagon.
//!
//! Each level replaces a segment `v` by three segments of length `|v|/√7`,
//! the middle one turned by 60°. Seven islands of one level cover an island
//! of the next level, and islands built on the same hexagonal lattice share
//! their boundaries exactly.

use crate::FractalError;
use crate::polygon::regular_polygon;
use crate::rule::{RefinementRule, generate_island};
use tilebg_types::{Angle, Path, Point, Rotation, Surd, Vector};

/// `a · [1, e^{iπ/3}, 1]` with `a = v / (2 + e^{iπ/3})`.
#[derive(Debug, Clone)]
pub struct GosperRule {
    /// `1 / (2 + e^{iπ/3}) = (5 - i√3) / 14`
    shrink: Point,
    turn: Rotation,
}

impl Default for GosperRule {
    fn default() -> Self {
        Self {
            shrink: Point::new(Surd::ratio(5, 14), -(Surd::sqrt3() * Surd::ratio(1, 14))),
            turn: Rotation::new(Angle::from_steps(2)),
        }
    }
}

impl RefinementRule for GosperRule {
    fn refine(&self, segment: &Vector) -> Vec<Vector> {
        let a = segment.complex_mul(&self.shrink);
        vec![a.clone(), self.turn.apply(&a), a]
    }
}

/// Gosper island grown from the clockwise unit hexagon.
pub fn gosper_island(iterations: usize) -> Result<Path, FractalError> {
    generate_island(&regular_polygon(6)?, &GosperRule::default(), iterations)
}
