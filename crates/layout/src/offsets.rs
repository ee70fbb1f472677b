//! Per-cell displacement added on top of the regular grid position.

use crate::LayoutError;
use tilebg_types::{Point, Surd, Vector};

pub trait OffsetPolicy {
    fn offset(&self, ix: usize, iy: usize) -> Vector;
}

impl<F> OffsetPolicy for F
where
    F: Fn(usize, usize) -> Vector,
{
    fn offset(&self, ix: usize, iy: usize) -> Vector {
        self(ix, iy)
    }
}

/// Plain rectangular grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOffset;

impl OffsetPolicy for NoOffset {
    fn offset(&self, _ix: usize, _iy: usize) -> Vector {
        Point::origin()
    }
}

/// Shifts every odd row right by a fixed width, giving staggered
/// (hexagonal, brick) packings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddRowShift {
    width: Surd,
}

impl OddRowShift {
    pub fn new(width: impl Into<Surd>) -> Result<Self, LayoutError> {
        let width = width.into();
        if !width.is_positive() {
            return Err(LayoutError::NonPositiveShift(width.to_string()));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> &Surd {
        &self.width
    }
}

impl OffsetPolicy for OddRowShift {
    fn offset(&self, _ix: usize, iy: usize) -> Vector {
        if iy % 2 == 1 {
            Point::new(self.width.clone(), Surd::zero())
        } else {
            Point::origin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_row_shift() {
        let shift = OddRowShift::new(16).unwrap();
        assert_eq!(shift.offset(3, 0), Point::origin());
        assert_eq!(shift.offset(0, 1), Point::from_integers(16, 0));
        assert_eq!(shift.offset(7, 4), Point::origin());
        assert_eq!(shift.offset(7, 5), Point::from_integers(16, 0));
    }

    #[test]
    fn test_shift_must_be_positive() {
        assert!(matches!(OddRowShift::new(0), Err(LayoutError::NonPositiveShift(_))));
        assert!(OddRowShift::new(Surd::integer(1) - Surd::sqrt3()).is_err());
        assert!(OddRowShift::new(Surd::integer(2) - Surd::sqrt3()).is_ok());
    }

    #[test]
    fn test_closures_are_policies() {
        let diagonal = |ix: usize, iy: usize| Point::from_integers(ix as i64, iy as i64);
        assert_eq!(diagonal.offset(2, 5), Point::from_integers(2, 5));
        assert_eq!(NoOffset.offset(9, 9), Point::origin());
    }
}
