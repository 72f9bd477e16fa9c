//! Error types for Ramify operations.
//!
//! Outline text never fails to parse, so every variant here describes a
//! problem at the edges: configuration, the file system, or the raster
//! surface.

use std::io;

use thiserror::Error;

use crate::export;

/// The main error type for Ramify operations.
#[derive(Debug, Error)]
pub enum RamifyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<export::Error> for RamifyError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::SvgParse(reason) => Self::Render(reason),
            other => Self::Export(Box::new(other)),
        }
    }
}
