//! Core rendering abstractions for wallpaper output.
//!
//! This crate provides what every output backend shares:
//! - `WallpaperRenderer` trait for abstracting document writing
//! - `Wallpaper` and its metadata, the hand-off from pattern generation
//! - Error types for rendering operations
//! - Coordinate formatting for the final float conversion

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::{WallpaperRenderer, render_wallpaper};
pub use types::{Wallpaper, WallpaperMetadata};
