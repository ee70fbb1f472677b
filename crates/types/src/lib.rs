pub mod color;
pub mod error;
pub mod geometry;
pub mod number;
pub mod path;

pub use color::Color;
pub use error::GeometryError;
pub use geometry::{Angle, Point, Rotation, Vector};
pub use number::Surd;
pub use path::{
    Path, points_to_segments, refined_segments, rotate, scale, segments_to_points, shift,
};
