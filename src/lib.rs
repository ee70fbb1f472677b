//! Seamless geometric desktop backgrounds.
//!
//! A wallpaper is built from a [`Pattern`]: exact fractal islands
//! (`tilebg-fractal`) are scaled into a grid cell, replicated over the canvas
//! with wrap-consistent styling (`tilebg-layout`) and written out as SVG
//! (`tilebg-render-svg`). Use [`WallpaperGenerator`] as the entry point.

pub mod config;
pub mod error;
pub mod generator;
pub mod patterns;

pub use config::GeneratorConfig;
pub use error::TilebgError;
pub use generator::WallpaperGenerator;
pub use patterns::Pattern;

pub use tilebg_fractal::{FractalError, FractalFamily};
pub use tilebg_layout::{GridSpec, LayoutError, PlacedPath};
pub use tilebg_render_core::{RenderError, Wallpaper, WallpaperMetadata};
pub use tilebg_style::{ClassSet, StyleError, Stylesheet};
pub use tilebg_types::{GeometryError, Path, Point, Surd};
