#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tilebg::{ClassSet, GridSpec, Path, PlacedPath, Point};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Axis-aligned closed rectangle centred on the origin.
pub fn rectangle(half_width: i64, half_height: i64) -> Path {
    Path::new(vec![
        Point::from_integers(-half_width, -half_height),
        Point::from_integers(half_width, -half_height),
        Point::from_integers(half_width, half_height),
        Point::from_integers(-half_width, half_height),
        Point::from_integers(-half_width, -half_height),
    ])
    .expect("rectangle has enough points")
}

/// The record for motif `m` of cell `(ix, iy)` in `generate_grid` output.
pub fn record_at<'a>(
    paths: &'a [PlacedPath],
    grid: &GridSpec,
    motif_count: usize,
    ix: usize,
    iy: usize,
    m: usize,
) -> &'a PlacedPath {
    &paths[(iy * (grid.nx() + 1) + ix) * motif_count + m]
}

pub fn classes_at<'a>(
    paths: &'a [PlacedPath],
    grid: &GridSpec,
    motif_count: usize,
    ix: usize,
    iy: usize,
) -> Vec<&'a ClassSet> {
    (0..motif_count)
        .map(|m| record_at(paths, grid, motif_count, ix, iy, m).classes())
        .collect()
}

/// Number of `<path .../>` lines in an SVG document.
pub fn path_element_count(svg: &str) -> usize {
    svg.lines().filter(|l| l.starts_with("<path ")).count()
}
