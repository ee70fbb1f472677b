//! Seamless tiling behaviour of the grid tiler as seen from the public API.

mod common;

use common::{TestResult, classes_at, rectangle, record_at, seeded};
use rand::RngCore;
use tilebg::{ClassSet, GridSpec, LayoutError, Point, StyleError, Surd};
use tilebg_layout::{NoOffset, OddRowShift, RandomFill, generate_grid};

#[test]
fn wrapped_edges_repeat_opposite_edges() -> TestResult {
    let grid = GridSpec::new((20, 10), (100, 40))?;
    let motifs = [rectangle(2, 1), rectangle(1, 1)];
    let paths = generate_grid(
        &motifs,
        &grid,
        &NoOffset,
        &RandomFill::new(3, motifs.len())?,
        &mut seeded(7),
    )?;
    assert_eq!(paths.len(), grid.record_count(motifs.len()));

    let (nx, ny) = (grid.nx(), grid.ny());
    for iy in 0..=ny {
        assert_eq!(
            classes_at(&paths, &grid, 2, nx, iy),
            classes_at(&paths, &grid, 2, 0, iy)
        );
    }
    for ix in 0..=nx {
        assert_eq!(
            classes_at(&paths, &grid, 2, ix, ny),
            classes_at(&paths, &grid, 2, ix, 0)
        );
    }
    Ok(())
}

#[test]
fn records_are_translated_motifs() -> TestResult {
    let grid = GridSpec::new((16, 12), (64, 48))?;
    let motif = rectangle(3, 2);
    let offsets = OddRowShift::new(8)?;
    let paths = generate_grid(
        &[motif.clone()],
        &grid,
        &offsets,
        &RandomFill::new(3, 1)?,
        &mut seeded(1),
    )?;
    for iy in 0..=grid.ny() {
        for ix in 0..=grid.nx() {
            let shift = if iy % 2 == 1 { 8 } else { 0 };
            let origin = Point::from_integers(16 * ix as i64 + shift, 12 * iy as i64);
            let record = record_at(&paths, &grid, 1, ix, iy, 0);
            assert_eq!(record.path(), &motif.shifted(&origin));
            assert!(record.is_closed());
        }
    }
    Ok(())
}

#[test]
fn fixed_seed_is_reproducible() -> TestResult {
    let grid = GridSpec::new((10, 10), (100, 100))?;
    let style = RandomFill::new(3, 1)?;
    let run = |seed| generate_grid(&[rectangle(4, 4)], &grid, &NoOffset, &style, &mut seeded(seed));
    assert_eq!(run(5)?, run(5)?);
    assert_ne!(run(5)?, run(6)?);
    Ok(())
}

#[test]
fn uneven_grid_is_rejected() {
    assert_eq!(
        GridSpec::new((7, 10), (100, 100)),
        Err(LayoutError::UnevenGrid {
            w: 100,
            h: 100,
            dx: 7,
            dy: 10
        })
    );
    assert!(matches!(
        GridSpec::new((0, 10), (100, 100)),
        Err(LayoutError::ZeroSpacing { .. })
    ));
}

#[test]
fn closures_serve_as_policies() -> TestResult {
    let grid = GridSpec::new((1, 1), (3, 2))?;
    let checkerboard = |jx: usize, jy: usize, _: &mut dyn RngCore| -> Result<Vec<ClassSet>, StyleError> {
        let colour = if (jx + jy) % 2 == 0 { "fill-0" } else { "fill-1" };
        Ok(vec![ClassSet::new(["stroke", colour])?])
    };
    let half = Surd::ratio(1, 2);
    let offsets = move |_: usize, iy: usize| Point::new(&half * &Surd::from(iy as u32), Surd::zero());
    let paths = generate_grid(&[rectangle(1, 1)], &grid, &offsets, &checkerboard, &mut seeded(0))?;

    // Column 3 wraps to column 0, row 2 wraps to row 0.
    let classes = record_at(&paths, &grid, 1, 3, 2, 0).classes();
    assert_eq!(classes.to_string(), "stroke fill-0");
    assert_eq!(
        record_at(&paths, &grid, 1, 1, 2, 0).classes().to_string(),
        "stroke fill-1"
    );
    assert_eq!(
        record_at(&paths, &grid, 1, 0, 1, 0).points()[0],
        Point::new(Surd::ratio(-1, 2), Surd::zero())
    );
    Ok(())
}

#[test]
fn wrong_class_count_is_an_error() -> TestResult {
    let grid = GridSpec::new((1, 1), (2, 2))?;
    let result = generate_grid(
        &[rectangle(1, 1), rectangle(2, 2)],
        &grid,
        &NoOffset,
        &RandomFill::new(3, 1)?,
        &mut seeded(0),
    );
    assert!(matches!(
        result,
        Err(LayoutError::ClassCountMismatch {
            expected: 2,
            got: 1,
            ..
        })
    ));
    Ok(())
}
