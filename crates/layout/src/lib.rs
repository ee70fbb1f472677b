//! Seamless tiling of motif paths.
//!
//! [`generate_grid`] replicates one or more motif paths over a canvas and
//! tags every copy with style classes chosen by a [`StylePolicy`]. The grid
//! runs one column and one row past the canvas, and those copies reuse the
//! classes of the opposite edge, so the picture repeats without visible seams.

use thiserror::Error;
use tilebg_style::StyleError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Grid spacing must be positive, got {dx}x{dy}")]
    ZeroSpacing { dx: u32, dy: u32 },
    #[error("Resolution {w}x{h} is not an exact multiple of spacing {dx}x{dy}")]
    UnevenGrid { w: u32, h: u32, dx: u32, dy: u32 },
    #[error("Resolution {w}x{h} leaves no grid cells")]
    EmptyCanvas { w: u32, h: u32 },
    #[error("At least one motif path is required")]
    EmptyMotif,
    #[error("Style policy returned {got} class set(s) for cell ({jx}, {jy}), expected {expected}")]
    ClassCountMismatch {
        expected: usize,
        got: usize,
        jx: usize,
        jy: usize,
    },
    #[error("Row shift must be positive, got {0}")]
    NonPositiveShift(String),
    #[error("Invalid style policy: {0}")]
    InvalidPolicy(String),
    #[error("Style error: {0}")]
    Style(#[from] StyleError),
}

pub mod cache;
pub mod elements;
pub mod grid;
pub mod offsets;
pub mod policy;

pub use self::cache::EdgeStyleCache;
pub use self::elements::PlacedPath;
pub use self::grid::{GridSpec, generate_grid};
pub use self::offsets::{NoOffset, OddRowShift, OffsetPolicy};
pub use self::policy::{RandomFill, StylePolicy};
