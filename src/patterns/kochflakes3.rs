use super::{FILL_COUNT, Pattern, hexagonal_cell};
use crate::error::TilebgError;
use rand::RngCore;
use tilebg_fractal::FractalFamily;
use tilebg_layout::{GridSpec, OddRowShift, PlacedPath, RandomFill, generate_grid};
use tilebg_types::{Angle, Point, Surd};

const RESOLUTION: (u32, u32) = (1920, 1080);
const CELL: (u32, u32) = (64, 72);
const ITERATIONS: usize = 3;

/// Koch snowflakes of two sizes.
///
/// Big flakes alone leave gaps; each gap is filled by a pair of small flakes
/// rotated by π/6 and placed `2w/3` left and right of the cell centre. The two
/// sizes are laid out as separate grids over the same spacing and offsets,
/// big flakes first.
pub struct KochFlakes3;

impl Pattern for KochFlakes3 {
    fn name(&self) -> &'static str {
        "kochflakes3"
    }

    fn title(&self) -> &'static str {
        "Randomly colored Koch islands"
    }

    fn resolution(&self) -> (u32, u32) {
        RESOLUTION
    }

    fn paths(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacedPath>, TilebgError> {
        let (width, height) = CELL;
        let isle = FractalFamily::Koch.island(ITERATIONS)?;
        let grid = GridSpec::new((2 * width, height / 2), RESOLUTION)?;
        let offsets = OddRowShift::new(width)?;

        let (sx, sy) = hexagonal_cell(width, height);
        let big = isle.scaled(&sx, &sy);

        let small = isle.rotated(Angle::from_pi_ratio(1, 6)?).scaled(
            &(Surd::from(width) * Surd::ratio(1, 3)),
            &(Surd::from(height) * Surd::ratio(1, 2) * Surd::inv_sqrt3()),
        );
        let dx = Surd::from(width) * Surd::ratio(2, 3);
        let smalls = [
            small.shifted(&Point::new(-&dx, Surd::zero())),
            small.shifted(&Point::new(dx, Surd::zero())),
        ];

        let mut paths = generate_grid(
            &[big],
            &grid,
            &offsets,
            &RandomFill::new(FILL_COUNT, 1)?,
            rng,
        )?;
        paths.extend(generate_grid(
            &smalls,
            &grid,
            &offsets,
            &RandomFill::new(FILL_COUNT, smalls.len())?,
            rng,
        )?);
        Ok(paths)
    }
}
