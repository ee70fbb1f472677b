use crate::error::RenderError;
use crate::types::{Wallpaper, WallpaperMetadata};
use std::io::Write;
use tilebg_layout::PlacedPath;

/// A trait for wallpaper renderers, abstracting the output format.
///
/// Renderers receive the canvas size and metadata first, then any number of
/// path batches in drawing order, and hand the writer back on `finish`.
pub trait WallpaperRenderer<W: Write> {
    fn begin_document(
        &mut self,
        writer: W,
        metadata: &WallpaperMetadata,
        resolution: (u32, u32),
    ) -> Result<(), RenderError>;

    fn render_paths(&mut self, paths: &[PlacedPath]) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}

/// Drives `renderer` through a complete wallpaper.
pub fn render_wallpaper<W: Write>(
    mut renderer: Box<dyn WallpaperRenderer<W> + '_>,
    wallpaper: &Wallpaper,
    writer: W,
) -> Result<W, RenderError> {
    renderer.begin_document(writer, &wallpaper.metadata, wallpaper.resolution)?;
    renderer.render_paths(&wallpaper.paths)?;
    renderer.finish()
}
