//! Errors raised while configuring the parser.
//!
//! Outline text itself never fails to parse; only an unusable configuration
//! is reported.

use thiserror::Error;

/// Parser configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid marker {0:?}: whitespace cannot mark hierarchy levels")]
    WhitespaceMarker(char),

    #[error("invalid marker {0:?}: control characters cannot mark hierarchy levels")]
    ControlMarker(char),
}
