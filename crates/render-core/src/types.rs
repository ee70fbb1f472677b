use tilebg_layout::PlacedPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperMetadata {
    pub author: String,
    pub title: String,
}

/// A finished wallpaper: everything a renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallpaper {
    pub metadata: WallpaperMetadata,
    /// Nominal canvas size in abstract units (pixels for SVG).
    pub resolution: (u32, u32),
    /// Paths in drawing order.
    pub paths: Vec<PlacedPath>,
}

impl Wallpaper {
    pub fn new(metadata: WallpaperMetadata, resolution: (u32, u32), paths: Vec<PlacedPath>) -> Self {
        Self {
            metadata,
            resolution,
            paths,
        }
    }

    pub fn closed_path_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_closed()).count()
    }
}
