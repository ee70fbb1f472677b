//! Memoised styling for the cells on the grid's wrap-around edges.

use crate::LayoutError;
use crate::policy::StylePolicy;
use rand::RngCore;
use std::collections::HashMap;
use tilebg_style::ClassSet;

/// Wraps a [`StylePolicy`] so that every cell reducing to the same boundary
/// residue gets the same class sets.
///
/// `(ix, iy)` is reduced to `(ix mod nx, iy mod ny)`. Results for residues in
/// column 0 or row 0 are stored on first use and replayed for every later
/// cell wrapping onto them; column `nx` therefore repeats column 0 and row
/// `ny` repeats row 0. Interior cells always ask the policy afresh.
///
/// Lives for one grid generation and is never shared.
pub struct EdgeStyleCache<'a, P: StylePolicy + ?Sized> {
    policy: &'a P,
    nx: usize,
    ny: usize,
    element_count: usize,
    entries: HashMap<(usize, usize), Vec<ClassSet>>,
}

impl<'a, P: StylePolicy + ?Sized> EdgeStyleCache<'a, P> {
    /// `nx` and `ny` must be non-zero; `GridSpec` guarantees this.
    pub fn new(policy: &'a P, nx: usize, ny: usize, element_count: usize) -> Self {
        Self {
            policy,
            nx,
            ny,
            element_count,
            entries: HashMap::new(),
        }
    }

    pub fn classes(
        &mut self,
        ix: usize,
        iy: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ClassSet>, LayoutError> {
        let (jx, jy) = (ix % self.nx, iy % self.ny);
        if let Some(cached) = self.entries.get(&(jx, jy)) {
            log::trace!("Cell ({}, {}) reuses edge styling of ({}, {})", ix, iy, jx, jy);
            return Ok(cached.clone());
        }

        let classes = self.policy.classes(jx, jy, rng)?;
        if classes.len() != self.element_count {
            return Err(LayoutError::ClassCountMismatch {
                expected: self.element_count,
                got: classes.len(),
                jx,
                jy,
            });
        }
        if jx == 0 || jy == 0 {
            self.entries.insert((jx, jy), classes.clone());
        }
        Ok(classes)
    }

    /// Number of residues stored so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
