use log::warn;
use quick_xml::escape::escape;
use std::collections::HashSet;
use std::io::Write;
use tilebg_layout::PlacedPath;
use tilebg_render_core::utils::format_point;
use tilebg_render_core::{
    RenderError, Wallpaper, WallpaperMetadata, WallpaperRenderer, render_wallpaper,
};
use tilebg_style::Stylesheet;
use tilebg_types::Path;

const STYLE_INDENT: &str = "  ";

/// A streaming SVG renderer.
///
/// The header (including the embedded stylesheet) is written by
/// `begin_document`, each path becomes one `<path>` line, and `finish`
/// closes the flip group and the document.
pub struct SvgRenderer<W: Write> {
    writer: Option<W>,
    stylesheet: Stylesheet,
    warned: HashSet<String>,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self {
            writer: None,
            stylesheet,
            warned: HashSet::new(),
        }
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    fn warn_missing(&mut self, placed: &PlacedPath) {
        for class in self.stylesheet.missing(placed.classes()) {
            if self.warned.insert(class.to_string()) {
                warn!("Class '{}' has no rule in the stylesheet", class);
            }
        }
    }
}

/// `M x,y x,y ...`. Closed paths drop their repeated end point and finish
/// with ` z` instead.
pub fn path_data(path: &Path) -> String {
    let (points, suffix) = if path.is_closed() {
        (&path.points()[..path.len() - 1], " z")
    } else {
        (path.points(), "")
    };
    let points: Vec<String> = points.iter().map(format_point).collect();
    format!("M {}{}", points.join(" "), suffix)
}

impl<W: Write> WallpaperRenderer<W> for SvgRenderer<W> {
    fn begin_document(
        &mut self,
        mut writer: W,
        metadata: &WallpaperMetadata,
        resolution: (u32, u32),
    ) -> Result<(), RenderError> {
        let (width, height) = resolution;
        write!(
            writer,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg\n",
                "  version=\"1.1\"\n",
                "  width=\"{w}px\"\n",
                "  height=\"{h}px\"\n",
                "  viewBox=\"0 0 {w} {h}\"\n",
                "  xmlns=\"http://www.w3.org/2000/svg\"\n",
                "  xmlns:xlink=\"http://www.w3.org/1999/xlink\"\n",
                "  xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n",
                "<title property=\"dc:title\">{title}</title>\n",
                "<desc property=\"dc:creator\">{author}</desc>\n",
                "<style type=\"text/css\">\n",
                "{css}\n",
                "</style>\n",
                "<!-- Flip the y axis and move the origin to the bottom left corner -->\n",
                "<g transform=\"translate(0,{h}) scale(1,-1)\">\n",
            ),
            w = width,
            h = height,
            title = escape(metadata.title.as_str()),
            author = escape(metadata.author.as_str()),
            css = self.stylesheet.to_css(STYLE_INDENT),
        )?;
        self.writer = Some(writer);
        Ok(())
    }

    fn render_paths(&mut self, paths: &[PlacedPath]) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::NotStarted);
        }
        for placed in paths {
            self.warn_missing(placed);
            let classes = placed.classes().to_string();
            let writer = self.writer.as_mut().ok_or(RenderError::NotStarted)?;
            writeln!(
                writer,
                "<path class=\"{}\" d=\"{}\"/>",
                escape(classes.as_str()),
                path_data(placed.path())
            )?;
        }
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<W, RenderError> {
        let mut writer = self.writer.take().ok_or(RenderError::NotStarted)?;
        write!(writer, "</g>\n</svg>")?;
        writer.flush()?;
        Ok(writer)
    }
}

/// Renders `wallpaper` to an in-memory SVG document.
pub fn generate_svg(wallpaper: &Wallpaper, stylesheet: &Stylesheet) -> Result<String, RenderError> {
    let renderer: Box<dyn WallpaperRenderer<Vec<u8>>> =
        Box::new(SvgRenderer::new(stylesheet.clone()));
    let bytes = render_wallpaper(renderer, wallpaper, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}
