use super::{FILL_COUNT, Pattern, hexagonal_cell};
use crate::error::TilebgError;
use rand::RngCore;
use tilebg_fractal::FractalFamily;
use tilebg_layout::{GridSpec, OddRowShift, PlacedPath, RandomFill, generate_grid};

const RESOLUTION: (u32, u32) = (1920, 1200);
const CELL: (u32, u32) = (30, 32);
const ITERATIONS: usize = 2;

/// Second order Gosper islands. They tile the plane like the hexagons they
/// grow from, so the grid is the honeycomb one.
pub struct GosperFlakes2;

impl Pattern for GosperFlakes2 {
    fn name(&self) -> &'static str {
        "gosperflakes2"
    }

    fn title(&self) -> &'static str {
        "Randomly colored Gosper islands"
    }

    fn resolution(&self) -> (u32, u32) {
        RESOLUTION
    }

    fn paths(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacedPath>, TilebgError> {
        let (width, height) = CELL;
        let (sx, sy) = hexagonal_cell(width, height);
        let motif = FractalFamily::Gosper.island(ITERATIONS)?.scaled(&sx, &sy);
        let grid = GridSpec::new((width, 3 * height / 4), RESOLUTION)?;
        let offsets = OddRowShift::new(width / 2)?;
        let style = RandomFill::new(FILL_COUNT, 1)?;
        Ok(generate_grid(&[motif], &grid, &offsets, &style, rng)?)
    }
}
