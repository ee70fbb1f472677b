use super::{FILL_COUNT, Pattern};
use crate::error::TilebgError;
use rand::RngCore;
use tilebg_fractal::FractalFamily;
use tilebg_layout::{GridSpec, OddRowShift, PlacedPath, RandomFill, generate_grid};
use tilebg_types::Surd;

const RESOLUTION: (u32, u32) = (1920, 1080);
const CELL: (u32, u32) = (120, 120);
const ITERATIONS: usize = 4;

/// Fourth order Minkowski islands on a diamond lattice.
pub struct MinkowskiFlakes4;

impl Pattern for MinkowskiFlakes4 {
    fn name(&self) -> &'static str {
        "minkowskiflakes4"
    }

    fn title(&self) -> &'static str {
        "Randomly colored Minkowski islands"
    }

    fn resolution(&self) -> (u32, u32) {
        RESOLUTION
    }

    fn paths(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacedPath>, TilebgError> {
        let (width, height) = CELL;
        let motif = FractalFamily::Minkowski
            .island(ITERATIONS)?
            .scaled(&Surd::from(width / 2), &Surd::from(height / 2));
        let grid = GridSpec::new((width, height / 2), RESOLUTION)?;
        let offsets = OddRowShift::new(width / 2)?;
        let style = RandomFill::new(FILL_COUNT, 1)?;
        Ok(generate_grid(&[motif], &grid, &offsets, &style, rng)?)
    }
}
