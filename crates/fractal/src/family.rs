use crate::FractalError;
use crate::gosper::GosperRule;
use crate::koch::KochRule;
use crate::minkowski::MinkowskiRule;
use crate::polygon::regular_polygon;
use crate::rule::{RefinementRule, generate_island};
use std::fmt;
use std::str::FromStr;
use tilebg_types::{Path, Vector};

/// The island families a pattern can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalFamily {
    /// Plain hexagon; refinement leaves it unchanged.
    Hexagon,
    Gosper,
    Koch,
    Minkowski,
}

fn unrefined(segment: &Vector) -> Vec<Vector> {
    vec![segment.clone()]
}

impl FractalFamily {
    pub const ALL: [FractalFamily; 4] = [
        FractalFamily::Hexagon,
        FractalFamily::Gosper,
        FractalFamily::Koch,
        FractalFamily::Minkowski,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FractalFamily::Hexagon => "hexagon",
            FractalFamily::Gosper => "gosper",
            FractalFamily::Koch => "koch",
            FractalFamily::Minkowski => "minkowski",
        }
    }

    /// Number of sides of the seed polygon.
    pub fn seed_sides(self) -> usize {
        match self {
            FractalFamily::Hexagon | FractalFamily::Gosper => 6,
            FractalFamily::Koch => 3,
            FractalFamily::Minkowski => 4,
        }
    }

    pub fn seed(self) -> Result<Path, FractalError> {
        regular_polygon(self.seed_sides())
    }

    pub fn rule(self) -> Box<dyn RefinementRule> {
        match self {
            FractalFamily::Hexagon => Box::new(unrefined),
            FractalFamily::Gosper => Box::new(GosperRule::default()),
            FractalFamily::Koch => Box::new(KochRule::default()),
            FractalFamily::Minkowski => Box::new(MinkowskiRule),
        }
    }

    /// The island of this family after `iterations` refinements.
    pub fn island(self, iterations: usize) -> Result<Path, FractalError> {
        generate_island(&self.seed()?, self.rule().as_ref(), iterations)
    }
}

impl fmt::Display for FractalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FractalFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown fractal family: '{}'", s))
    }
}
