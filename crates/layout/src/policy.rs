//! Style policies: which class sets the sub-paths of a grid cell carry.

use crate::LayoutError;
use rand::{Rng, RngCore};
use tilebg_style::{ClassSet, StyleError};

/// Produces one [`ClassSet`] per motif sub-path for the cell `(jx, jy)`.
///
/// The indices are already reduced modulo the grid size. Any randomness must
/// come from `rng` so that a fixed seed reproduces the same artwork.
pub trait StylePolicy {
    fn classes(&self, jx: usize, jy: usize, rng: &mut dyn RngCore)
    -> Result<Vec<ClassSet>, LayoutError>;
}

impl<F> StylePolicy for F
where
    F: Fn(usize, usize, &mut dyn RngCore) -> Result<Vec<ClassSet>, StyleError>,
{
    fn classes(
        &self,
        jx: usize,
        jy: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ClassSet>, LayoutError> {
        Ok(self(jx, jy, rng)?)
    }
}

/// `stroke` plus one uniformly drawn `fill-<k>` class, `k < fill_count`,
/// for each of `element_count` sub-paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomFill {
    fill_count: usize,
    element_count: usize,
}

impl RandomFill {
    pub fn new(fill_count: usize, element_count: usize) -> Result<Self, LayoutError> {
        if fill_count == 0 {
            return Err(LayoutError::InvalidPolicy("fill_count must be positive".to_string()));
        }
        if element_count == 0 {
            return Err(LayoutError::InvalidPolicy("element_count must be positive".to_string()));
        }
        Ok(Self { fill_count, element_count })
    }

    pub fn fill_count(&self) -> usize {
        self.fill_count
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }
}

impl StylePolicy for RandomFill {
    fn classes(
        &self,
        _jx: usize,
        _jy: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ClassSet>, LayoutError> {
        (0..self.element_count)
            .map(|_| -> Result<ClassSet, LayoutError> {
                let fill = rng.random_range(0..self.fill_count);
                Ok(ClassSet::new(["stroke".to_string(), format!("fill-{}", fill)])?)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_fill_shape() {
        let policy = RandomFill::new(3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let classes = policy.classes(0, 0, &mut rng).unwrap();
            assert_eq!(classes.len(), 2);
            for set in classes {
                let tags: Vec<&str> = set.iter().collect();
                assert_eq!(tags[0], "stroke");
                assert!(["fill-0", "fill-1", "fill-2"].contains(&tags[1]));
            }
        }
    }

    #[test]
    fn test_random_fill_is_reproducible() {
        let policy = RandomFill::new(5, 1).unwrap();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|i| policy.classes(i, i, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn test_random_fill_validation() {
        assert!(RandomFill::new(0, 1).is_err());
        assert!(RandomFill::new(1, 0).is_err());
    }

    #[test]
    fn test_closure_errors_propagate() {
        let bad = |_: usize, _: usize, _: &mut dyn RngCore| -> Result<Vec<ClassSet>, StyleError> {
            Ok(vec![ClassSet::single("two words")?])
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            bad.classes(0, 0, &mut rng),
            Err(LayoutError::Style(StyleError::InvalidClassName(_)))
        ));
    }
}
