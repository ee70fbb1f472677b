//! Fractal island generators.
//!
//! Each family pairs a closed seed polygon with a [`RefinementRule`]; an island
//! of a given order is the seed with the rule applied that many times. All
//! arithmetic is exact, so the generated curve closes on its first point
//! exactly and neighbouring islands share boundary points exactly.

use thiserror::Error;
use tilebg_types::GeometryError;

pub mod family;
pub mod gosper;
pub mod koch;
pub mod minkowski;
pub mod polygon;
pub mod repeat;
pub mod rule;

pub use family::FractalFamily;
pub use gosper::{GosperRule, gosper_island};
pub use koch::{KochRule, koch_island};
pub use minkowski::{MinkowskiRule, minkowski_island};
pub use polygon::regular_polygon;
pub use repeat::repeated;
pub use rule::{RefinementRule, generate_island};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractalError {
    #[error("A regular polygon needs at least 3 sides, got {0}")]
    DegeneratePolygon(usize),
    #[error("Island seed must be a closed path")]
    OpenSeed,
    #[error("Curve did not close after {iterations} refinement(s)")]
    OpenCurve { iterations: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
