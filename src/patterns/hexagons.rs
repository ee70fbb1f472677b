use super::{FILL_COUNT, Pattern, hexagonal_cell};
use crate::error::TilebgError;
use rand::RngCore;
use tilebg_fractal::FractalFamily;
use tilebg_layout::{GridSpec, OddRowShift, PlacedPath, RandomFill, generate_grid};

const RESOLUTION: (u32, u32) = (1920, 1080);
const CELL: (u32, u32) = (32, 36);

/// Plain hexagons in a honeycomb.
pub struct Hexagons;

impl Pattern for Hexagons {
    fn name(&self) -> &'static str {
        "hexagons"
    }

    fn title(&self) -> &'static str {
        "Randomly colored hexagons"
    }

    fn resolution(&self) -> (u32, u32) {
        RESOLUTION
    }

    fn paths(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacedPath>, TilebgError> {
        let (width, height) = CELL;
        let (sx, sy) = hexagonal_cell(width, height);
        let motif = FractalFamily::Hexagon.island(0)?.scaled(&sx, &sy);
        let grid = GridSpec::new((width, 3 * height / 4), RESOLUTION)?;
        let offsets = OddRowShift::new(width / 2)?;
        let style = RandomFill::new(FILL_COUNT, 1)?;
        Ok(generate_grid(&[motif], &grid, &offsets, &style, rng)?)
    }
}
