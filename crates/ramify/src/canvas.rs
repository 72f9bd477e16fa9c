//! The raster canvas: a fixed-size pixel surface painted from draw commands.

use std::fmt;

use log::{debug, info};
use tiny_skia::Pixmap;

use ramify_core::{draw::DrawCommand, geometry::Size};

use crate::{
    error::RamifyError,
    export::{png, svg},
};

/// A fixed-size raster surface.
///
/// Every [`Canvas::paint`] fully overwrites the previous image, so the
/// canvas never accumulates state between passes.
pub struct Canvas {
    pixmap: Pixmap,
    options: usvg::Options<'static>,
}

impl Canvas {
    /// Allocates a transparent canvas of `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RamifyError::Export`] if the pixmap cannot be allocated
    /// (for example a zero dimension).
    pub fn new(width: u32, height: u32, font_family: &str) -> Result<Self, RamifyError> {
        info!(width, height; "Creating canvas");
        Ok(Self {
            pixmap: png::new_pixmap(width, height)?,
            options: png::raster_options(font_family),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Clears the surface and replays `commands` onto it.
    ///
    /// # Errors
    ///
    /// Returns [`RamifyError::Render`] if the commands produce a document
    /// the rasterizer rejects.
    pub fn paint(&mut self, commands: &[DrawCommand]) -> Result<(), RamifyError> {
        let document = svg::to_svg_document(commands);
        png::rasterize_into(&document, &self.options, &mut self.pixmap)?;
        debug!(commands = commands.len(); "Canvas painted");
        Ok(())
    }

    /// Encodes the current surface as PNG without modifying it.
    pub fn export_png(&self) -> Result<Vec<u8>, RamifyError> {
        Ok(png::encode(&self.pixmap)?)
    }

    /// Read-only access to the pixels.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
