//! CLI logic for the Ramify mind-map tool.
//!
//! Reads an outline file, applies configuration and command-line overrides,
//! and writes the rendered mind map as PNG or SVG.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::{Args, OutputFormat};
pub use config::ConfigError;
pub use error::CliError;

use std::fs;

use log::info;

use ramify::{MindMapBuilder, zoom::Zoom};

/// Run the Ramify CLI application
///
/// This function processes the input file through the Ramify pipeline
/// and writes the result to the output file in the requested format.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Rendering and export errors
pub fn run(args: &Args) -> Result<(), CliError> {
    let format = args.output_format();
    info!(
        input_path = args.input,
        output_path = args.output,
        output_format:? = format;
        "Processing outline"
    );

    // Load configuration and apply command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(theme) = args.theme {
        app_config.style_mut().set_theme(theme);
    }
    if let Some(zoom) = args.zoom {
        app_config.style_mut().set_zoom(Zoom::new(zoom));
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = MindMapBuilder::new(app_config);
    match format {
        OutputFormat::Svg => fs::write(&args.output, builder.render_svg(&source)?)?,
        OutputFormat::Png => fs::write(&args.output, builder.render_png(&source)?)?,
    }

    info!(output_file = args.output; "Mind map exported successfully");

    Ok(())
}
