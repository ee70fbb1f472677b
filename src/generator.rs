use crate::config::{DEFAULT_SEED, GeneratorConfig};
use crate::error::TilebgError;
use crate::patterns::{self, Pattern};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tilebg_render_core::{Wallpaper, WallpaperRenderer, render_wallpaper};
use tilebg_render_svg::SvgRenderer;
use tilebg_style::Stylesheet;

/// Builds wallpapers for one pattern with a fixed seed and stylesheet.
///
/// The same pattern, seed and stylesheet always produce byte-identical SVG.
pub struct WallpaperGenerator {
    pattern: &'static dyn Pattern,
    seed: u64,
    stylesheet: Stylesheet,
}

impl WallpaperGenerator {
    /// Looks the pattern up by name; see [`patterns::all`].
    pub fn new(pattern: &str) -> Result<Self, TilebgError> {
        Ok(Self::for_pattern(patterns::find(pattern)?))
    }

    pub fn for_pattern(pattern: &'static dyn Pattern) -> Self {
        Self {
            pattern,
            seed: DEFAULT_SEED,
            stylesheet: Stylesheet::default(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, TilebgError> {
        let name = config
            .pattern
            .as_deref()
            .ok_or_else(|| TilebgError::Config("No pattern has been configured.".to_string()))?;
        let mut generator = Self::new(name)?.with_seed(config.seed);
        if let Some(path) = &config.stylesheet {
            generator = generator.with_stylesheet_file(path)?;
        }
        Ok(generator)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Loads a stylesheet from a `.json` rule list or a CSS file.
    pub fn with_stylesheet_file<P: AsRef<Path>>(self, path: P) -> Result<Self, TilebgError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            TilebgError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read stylesheet from '{}': {}", path.display(), e),
            ))
        })?;
        let stylesheet = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Stylesheet::from_json(&source)?,
            _ => Stylesheet::from_css(&source)?,
        };
        Ok(self.with_stylesheet(stylesheet))
    }

    pub fn pattern(&self) -> &'static dyn Pattern {
        self.pattern
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Runs the pattern with a freshly seeded generator.
    pub fn wallpaper(&self) -> Result<Wallpaper, TilebgError> {
        info!(
            "Generating '{}' with seed {}",
            self.pattern.name(),
            self.seed
        );
        let mut rng = StdRng::seed_from_u64(self.seed);
        let wallpaper = self.pattern.build(&mut rng)?;
        info!("Generated {} paths", wallpaper.paths.len());
        Ok(wallpaper)
    }

    pub fn generate_to_writer<W: Write>(&self, writer: W) -> Result<W, TilebgError> {
        let wallpaper = self.wallpaper()?;
        let renderer: Box<dyn WallpaperRenderer<W> + '_> =
            Box::new(SvgRenderer::new(self.stylesheet.clone()));
        Ok(render_wallpaper(renderer, &wallpaper, writer)?)
    }

    pub fn generate_to_string(&self) -> Result<String, TilebgError> {
        let bytes = self.generate_to_writer(Vec::new())?;
        String::from_utf8(bytes).map_err(|e| TilebgError::Render(e.into()))
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TilebgError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            TilebgError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create '{}': {}", path.display(), e),
            ))
        })?;
        let mut writer = self.generate_to_writer(BufWriter::new(file))?;
        writer.flush()?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let generator = WallpaperGenerator::new("hexagons").unwrap();
        assert_eq!(generator.pattern().name(), "hexagons");
        assert_eq!(generator.seed(), 1);
        assert_eq!(generator.stylesheet(), &Stylesheet::default());
        assert_eq!(generator.with_seed(9).seed(), 9);
    }

    #[test]
    fn test_renders_into_borrowed_writer() {
        let generator = WallpaperGenerator::new("hexagons").unwrap();
        let mut buffer = Vec::new();
        generator.generate_to_writer(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), generator.generate_to_string().unwrap());
    }

    #[test]
    fn test_unknown_pattern() {
        assert!(matches!(
            WallpaperGenerator::new("triangles"),
            Err(TilebgError::UnknownPattern(name)) if name == "triangles"
        ));
    }

    #[test]
    fn test_config_without_pattern() {
        assert!(matches!(
            WallpaperGenerator::from_config(&GeneratorConfig::default()),
            Err(TilebgError::Config(_))
        ));
    }
}
