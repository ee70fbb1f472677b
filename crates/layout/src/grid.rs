//! Replicates motif paths across the canvas so the result tiles seamlessly.

use crate::LayoutError;
use crate::cache::EdgeStyleCache;
use crate::elements::PlacedPath;
use crate::offsets::OffsetPolicy;
use crate::policy::StylePolicy;
use rand::RngCore;
use tilebg_types::{Path, Point, Surd, Vector};

/// Cell spacing and canvas resolution of a tiling grid.
///
/// The resolution must be an exact, non-zero multiple of the spacing in both
/// directions; `nx × ny` cells then cover the canvas exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    spacing: (u32, u32),
    resolution: (u32, u32),
    nx: usize,
    ny: usize,
}

impl GridSpec {
    pub fn new(spacing: (u32, u32), resolution: (u32, u32)) -> Result<Self, LayoutError> {
        let (dx, dy) = spacing;
        let (w, h) = resolution;
        if dx == 0 || dy == 0 {
            return Err(LayoutError::ZeroSpacing { dx, dy });
        }
        if w % dx != 0 || h % dy != 0 {
            return Err(LayoutError::UnevenGrid { w, h, dx, dy });
        }
        if w == 0 || h == 0 {
            return Err(LayoutError::EmptyCanvas { w, h });
        }
        Ok(Self {
            spacing,
            resolution,
            nx: (w / dx) as usize,
            ny: (h / dy) as usize,
        })
    }

    pub fn spacing(&self) -> (u32, u32) {
        self.spacing
    }

    pub fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    /// Number of distinct columns; column `nx` repeats column 0.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of distinct rows; row `ny` repeats row 0.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Regular grid position of cell `(ix, iy)`.
    pub fn cell_origin(&self, ix: usize, iy: usize) -> Vector {
        let (dx, dy) = self.spacing;
        Point::new(
            Surd::integer(ix as i64 * i64::from(dx)),
            Surd::integer(iy as i64 * i64::from(dy)),
        )
    }

    /// Number of records `generate_grid` produces for `motif_count` motifs.
    pub fn record_count(&self, motif_count: usize) -> usize {
        (self.nx + 1) * (self.ny + 1) * motif_count
    }
}

/// Lays `motifs` out on every cell `(ix, iy)` with `0 ≤ ix ≤ nx`, `0 ≤ iy ≤ ny`.
///
/// Each copy is shifted by `offsets(ix, iy) + (ix·dx, iy·dy)` and styled by
/// `style` through an [`EdgeStyleCache`], so the extra column and row carry
/// the same classes as column 0 and row 0. Records come out row by row, then
/// cell by cell, then motif by motif.
pub fn generate_grid<O, S>(
    motifs: &[Path],
    grid: &GridSpec,
    offsets: &O,
    style: &S,
    rng: &mut dyn RngCore,
) -> Result<Vec<PlacedPath>, LayoutError>
where
    O: OffsetPolicy + ?Sized,
    S: StylePolicy + ?Sized,
{
    if motifs.is_empty() {
        return Err(LayoutError::EmptyMotif);
    }
    log::debug!(
        "Tiling {} motif path(s) over {}x{} cells (spacing {:?}, resolution {:?})",
        motifs.len(),
        grid.nx + 1,
        grid.ny + 1,
        grid.spacing,
        grid.resolution
    );

    let mut cache = EdgeStyleCache::new(style, grid.nx, grid.ny, motifs.len());
    let mut placed = Vec::with_capacity(grid.record_count(motifs.len()));
    for iy in 0..=grid.ny {
        for ix in 0..=grid.nx {
            let classes = cache.classes(ix, iy, rng)?;
            let offset = &offsets.offset(ix, iy) + &grid.cell_origin(ix, iy);
            for (motif, class_set) in motifs.iter().zip(classes) {
                placed.push(PlacedPath::new(motif.shifted(&offset), class_set));
            }
        }
    }
    log::debug!("Placed {} paths, {} edge styles cached", placed.len(), cache.len());
    Ok(placed)
}
