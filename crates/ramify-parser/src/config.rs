//! Parser configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// The character whose leading run marks a node's depth.
const DEFAULT_MARKER: char = '#';

/// Configuration for [`parse`](crate::parse).
///
/// # Examples
///
/// ```
/// # use ramify_parser::ParseConfig;
/// let config = ParseConfig::new('*').unwrap();
/// assert_eq!(config.marker(), '*');
///
/// assert!(ParseConfig::new(' ').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawParseConfig")]
pub struct ParseConfig {
    marker: char,
}

impl ParseConfig {
    /// Creates a configuration using `marker` as the hierarchy marker.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the marker is whitespace or a control
    /// character, since such markers cannot be told apart from blank text.
    pub fn new(marker: char) -> Result<Self, ConfigError> {
        if marker.is_whitespace() {
            return Err(ConfigError::WhitespaceMarker(marker));
        }
        if marker.is_control() {
            return Err(ConfigError::ControlMarker(marker));
        }
        Ok(Self { marker })
    }

    /// Returns the hierarchy marker.
    pub fn marker(&self) -> char {
        self.marker
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }
}

#[derive(Deserialize)]
struct RawParseConfig {
    #[serde(default = "default_marker")]
    marker: char,
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

impl TryFrom<RawParseConfig> for ParseConfig {
    type Error = ConfigError;

    fn try_from(raw: RawParseConfig) -> Result<Self, Self::Error> {
        Self::new(raw.marker)
    }
}
