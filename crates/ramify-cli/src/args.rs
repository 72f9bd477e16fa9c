//! Command-line argument definitions for the Ramify CLI.
//!
//! Arguments control input/output paths, output format, style overrides,
//! configuration file selection, and logging verbosity.

use std::{path::Path, str::FromStr};

use clap::{Parser, ValueEnum};

use ramify::theme::Theme;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Guesses the format from a file extension. Unknown extensions are `None`.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("svg") {
            Some(Self::Svg)
        } else if extension.eq_ignore_ascii_case("png") {
            Some(Self::Png)
        } else {
            None
        }
    }
}

/// Command-line arguments for the Ramify mind-map tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input outline file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Output format; guessed from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Color theme (default, dark, colorful)
    #[arg(short, long, value_parser = Theme::from_str)]
    pub theme: Option<Theme>,

    /// Zoom factor, clamped to 0.5..=2.0
    #[arg(short, long)]
    pub zoom: Option<f32>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The effective output format: the explicit flag, else the output
    /// extension, else PNG.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(&self.output))
            .unwrap_or(OutputFormat::Png)
    }
}
