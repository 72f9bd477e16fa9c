//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! Configuration syntax errors carry the file text and the offending span, so
//! they are rendered with a source snippet. Every other error is rendered as a
//! plain message with an error code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use ramify::RamifyError;

use crate::{config::ConfigError, error::CliError};

/// Adapter for a TOML syntax or schema error with a known location.
pub struct ConfigDiagnosticAdapter<'a> {
    message: &'a str,
    span: SourceSpan,
    src: &'a str,
}

impl<'a> ConfigDiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(message: &'a str, span: SourceSpan, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for ConfigDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDiagnosticAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ConfigDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.message.trim_end())
    }
}

impl std::error::Error for ConfigDiagnosticAdapter<'_> {}

impl MietteDiagnostic for ConfigDiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("ramify::config"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), self.span),
        )))
    }
}

/// Adapter for errors without source locations.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Ramify(RamifyError::Io(_)) => "ramify::io",
            CliError::Ramify(RamifyError::Config(_)) | CliError::Config(_) => "ramify::config",
            CliError::Ramify(RamifyError::Render(_)) => "ramify::render",
            CliError::Ramify(RamifyError::Export(_)) => "ramify::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "pass an existing file to --config, or omit it to use the defaults"
            }
            CliError::Config(ConfigError::Validation(_))
            | CliError::Ramify(RamifyError::Config(_)) => {
                "check the [canvas], [layout] and [style] sections of the configuration file"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A configuration error with source location information.
    Diagnostic(ConfigDiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// A configuration parse error with a known span becomes a source-annotated
/// diagnostic; everything else is a single plain error.
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Config(ConfigError::Parse {
            message,
            span: Some(span),
            src,
            ..
        }) => {
            let span = SourceSpan::new(span.start.into(), span.len());
            vec![Reportable::Diagnostic(ConfigDiagnosticAdapter::new(
                message, span, src,
            ))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_parse_error_with_span_is_diagnostic() {
        let err = CliError::Config(ConfigError::Parse {
            path: PathBuf::from("config.toml"),
            message: "expected `]`".to_string(),
            span: Some(6..7),
            src: "[style\n".to_string(),
        });

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "invalid configuration: expected `]`");
                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert_eq!(labels[0].offset(), 6);
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_parse_error_without_span_is_plain() {
        let err = CliError::Config(ConfigError::Parse {
            path: PathBuf::from("config.toml"),
            message: "bad".to_string(),
            span: None,
            src: String::new(),
        });
        assert!(matches!(to_reportables(&err)[0], Reportable::Error(_)));
    }

    #[test]
    fn test_library_error_codes() {
        let err = CliError::Ramify(RamifyError::Render("broken".to_string()));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "Render error: broken");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()),
            Some("ramify::render".to_string())
        );
        assert!(reportables[0].help().is_none());
    }

    #[test]
    fn test_missing_file_has_help() {
        let err = CliError::Config(ConfigError::MissingFile(PathBuf::from("nope.toml")));
        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_some());
    }
}
