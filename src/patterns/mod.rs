//! The built-in wallpaper patterns.
//!
//! Each pattern fixes a fractal island, the cell it is scaled into, the grid
//! spacing and row shift that make neighbouring islands meet, and the style
//! policy. Everything else is shared through [`Pattern::build`].

mod gosperflakes2;
mod hexagons;
mod kochflakes3;
mod minkowskiflakes4;

pub use gosperflakes2::GosperFlakes2;
pub use hexagons::Hexagons;
pub use kochflakes3::KochFlakes3;
pub use minkowskiflakes4::MinkowskiFlakes4;

use crate::error::TilebgError;
use rand::RngCore;
use tilebg_layout::PlacedPath;
use tilebg_render_core::{Wallpaper, WallpaperMetadata};
use tilebg_types::Surd;

pub const AUTHOR: &str = "ccornix";

/// Number of `fill-<k>` classes every pattern draws from.
pub const FILL_COUNT: usize = 3;

pub trait Pattern: Sync {
    /// Registry key, also the CLI argument.
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn resolution(&self) -> (u32, u32);

    /// Every styled path of the wallpaper, in drawing order.
    fn paths(&self, rng: &mut dyn RngCore) -> Result<Vec<PlacedPath>, TilebgError>;

    fn build(&self, rng: &mut dyn RngCore) -> Result<Wallpaper, TilebgError> {
        let metadata = WallpaperMetadata {
            author: AUTHOR.to_string(),
            title: self.title().to_string(),
        };
        Ok(Wallpaper::new(metadata, self.resolution(), self.paths(rng)?))
    }
}

static PATTERNS: [&dyn Pattern; 4] = [&GosperFlakes2, &Hexagons, &KochFlakes3, &MinkowskiFlakes4];

/// All registered patterns, sorted by name.
pub fn all() -> &'static [&'static dyn Pattern] {
    &PATTERNS
}

pub fn names() -> Vec<&'static str> {
    PATTERNS.iter().map(|p| p.name()).collect()
}

pub fn find(name: &str) -> Result<&'static dyn Pattern, TilebgError> {
    PATTERNS
        .iter()
        .copied()
        .find(|p| p.name() == name)
        .ok_or_else(|| TilebgError::UnknownPattern(name.to_string()))
}

/// Scale factors that fit a unit-circumradius hexagonal island into a
/// `width × height` cell: `(width/√3, height/2)`.
fn hexagonal_cell(width: u32, height: u32) -> (Surd, Surd) {
    (Surd::from(width) * Surd::inv_sqrt3(), Surd::from(height / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        let names = names();
        assert_eq!(
            names,
            vec!["gosperflakes2", "hexagons", "kochflakes3", "minkowskiflakes4"]
        );
    }

    #[test]
    fn test_find() {
        assert_eq!(find("kochflakes3").unwrap().name(), "kochflakes3");
        assert!(matches!(find("squares"), Err(TilebgError::UnknownPattern(_))));
    }

    #[test]
    fn test_hexagonal_cell() {
        let (sx, sy) = hexagonal_cell(32, 36);
        assert_eq!(&sx * &Surd::sqrt3(), Surd::integer(32));
        assert_eq!(sy, Surd::integer(18));
    }
}
