//! Ramify - radial mind maps from hash-prefixed outlines.
//!
//! Parsing, radial layout, rendering to draw commands, and export to SVG or
//! PNG. An interactive [`session::MindMapSession`] wraps the same pipeline
//! behind a text/preview view state machine.

pub mod canvas;
pub mod config;
pub mod export;
pub mod layout;
pub mod render;
pub mod session;

mod error;

pub use ramify_core::{color, draw, geometry, outline, theme, zoom};

pub use error::RamifyError;

use log::{debug, info, trace};

use config::AppConfig;
use draw::DrawCommand;
use layout::RadialLayout;
use outline::Outline;
use render::RenderConfig;

/// Builder for parsing, laying out and rendering Ramify mind maps.
///
/// # Examples
///
/// ```rust,no_run
/// use ramify::{MindMapBuilder, config::AppConfig};
///
/// let source = "# Project\n## Design\n## Build\n### Tests";
///
/// let builder = MindMapBuilder::new(AppConfig::default());
///
/// // Parse and place nodes
/// let outline = builder.layout(builder.parse(source));
///
/// // Render to an SVG document
/// let svg = builder.render_svg(source).expect("Failed to render");
///
/// // Or use default config
/// let builder = MindMapBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct MindMapBuilder {
    config: AppConfig,
}

impl MindMapBuilder {
    /// Create a new mind-map builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse outline text into an unplaced node sequence.
    ///
    /// Outline text never fails to parse; lines that are not part of the
    /// outline are skipped.
    pub fn parse(&self, source: &str) -> Outline {
        let outline = ramify_parser::parse(source, self.config.parser());
        trace!(outline:?; "Parsed outline");
        outline
    }

    /// Resolve parents, positions and box widths.
    pub fn layout(&self, outline: Outline) -> Outline {
        let mut outline = outline;
        RadialLayout::new(&self.config).apply(&mut outline);
        outline
    }

    /// Produce the draw commands for a laid-out outline.
    ///
    /// # Errors
    ///
    /// Returns [`RamifyError::Config`] if the configured background color is invalid.
    pub fn render(&self, outline: &Outline) -> Result<Vec<DrawCommand>, RamifyError> {
        let render_config = RenderConfig::from_app_config(&self.config)?;
        Ok(render::render(outline, &render_config))
    }

    /// Run the full pipeline and return an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`RamifyError::Config`] for an invalid style configuration.
    pub fn render_svg(&self, source: &str) -> Result<String, RamifyError> {
        let commands = self.pipeline(source)?;
        let svg = export::svg::to_svg_document(&commands);
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Run the full pipeline, paint a canvas and return it encoded as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid style configuration, a canvas that
    /// cannot be allocated, or a rasterization failure.
    pub fn render_png(&self, source: &str) -> Result<Vec<u8>, RamifyError> {
        let commands = self.pipeline(source)?;
        let canvas_config = self.config.canvas();
        let mut canvas = canvas::Canvas::new(
            canvas_config.width(),
            canvas_config.height(),
            self.config.style().font_family(),
        )?;
        canvas.paint(&commands)?;
        let png = canvas.export_png()?;
        info!(bytes = png.len(); "PNG rendered successfully");
        Ok(png)
    }

    fn pipeline(&self, source: &str) -> Result<Vec<DrawCommand>, RamifyError> {
        let outline = self.layout(self.parse(source));
        debug!(nodes = outline.len(); "Outline laid out");
        self.render(&outline)
    }
}
