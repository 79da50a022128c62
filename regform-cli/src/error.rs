use std::io;

use regform::form::FormError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end the terminal session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
