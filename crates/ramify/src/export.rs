//! Exporters that replay draw commands onto an output format.
//!
//! - [`svg`] builds an SVG document from a command list.
//! - [`png`] rasterizes such a document into a pixmap and encodes it.

pub mod png;
pub mod svg;

use thiserror::Error;

/// Errors raised while exporting draw commands.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse generated SVG: {0}")]
    SvgParse(String),

    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    PngEncode(String),
}
