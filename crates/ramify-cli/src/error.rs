//! Errors surfaced by the CLI.

use thiserror::Error;

use ramify::RamifyError;

use crate::config::ConfigError;

/// Top-level CLI error: either a library failure or a bad configuration file.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ramify(#[from] RamifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Ramify(RamifyError::Io(err))
    }
}
