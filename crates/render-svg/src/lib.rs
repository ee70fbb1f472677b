//! SVG output for wallpapers.
//!
//! Coordinates are written in the generator's y-up frame; the document wraps
//! them in a group that flips the y axis and moves the origin to the bottom
//! left corner of the canvas.

mod renderer;

pub use renderer::{SvgRenderer, generate_svg, path_data};
