//! # Ramify Parser
//!
//! Parser for Ramify outlines. An outline is multi-line text in which each
//! line starts with a run of marker characters (`#` by default); the run
//! length is the hierarchy depth and the rest of the line is the label.
//!
//! Parsing is permissive by construction: blank lines and lines that do not
//! start with the marker are skipped, and no input ever produces an error.
//!
//! ## Usage
//!
//! ```
//! # use ramify_parser::{parse, ParseConfig};
//! let outline = parse("# Topic\n## Idea\nnot a node\n### Detail", &ParseConfig::default());
//!
//! let depths: Vec<_> = outline.nodes().iter().map(|n| n.depth()).collect();
//! assert_eq!(depths, vec![1, 2, 3]);
//! assert_eq!(outline.nodes()[1].label(), "Idea");
//! ```

mod config;
mod error;
mod parser;
#[cfg(test)]
mod parser_tests;

pub use config::ParseConfig;
pub use error::ConfigError;

use log::{debug, info};

use ramify_core::outline::Outline;

/// Parse outline source text into an ordered node sequence.
///
/// Lines are split on `\n`; trailing `\r` characters are dropped.
pub fn parse(source: &str, config: &ParseConfig) -> Outline {
    info!("Parsing outline");
    parse_lines(source.lines(), config)
}

/// Parse an already split sequence of lines.
///
/// Node order equals line order. Empty input yields an empty outline.
pub fn parse_lines<'a, I>(lines: I, config: &ParseConfig) -> Outline
where
    I: IntoIterator<Item = &'a str>,
{
    let mut line_count = 0usize;
    let outline: Outline = lines
        .into_iter()
        .inspect(|_| line_count += 1)
        .enumerate()
        .filter_map(|(line_no, line)| parser::parse_line(line_no + 1, line, config.marker()))
        .collect();

    debug!(lines = line_count, nodes = outline.len(); "Outline parsed");
    outline
}
