use thiserror::Error;
use tilebg_fractal::FractalError;
use tilebg_layout::LayoutError;
use tilebg_render_core::RenderError;
use tilebg_style::StyleError;
use tilebg_types::GeometryError;

/// Errors surfaced anywhere between pattern lookup and the finished SVG.
#[derive(Error, Debug)]
pub enum TilebgError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Fractal generation failed: {0}")]
    Fractal(#[from] FractalError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Stylesheet is invalid: {0}")]
    Style(#[from] StyleError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TilebgError {
    fn from(e: serde_json::Error) -> Self {
        TilebgError::Config(e.to_string())
    }
}
