//! CLI-level errors (wraps application errors)

use std::io::ErrorKind;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("expected argument {arg:?} to be a number: {reason}")]
    InvalidPercent { arg: String, reason: String },

    #[error("{usage}\nAvailable backlights: {}", .available.join(" "))]
    MissingDevice {
        usage: String,
        available: Vec<String>,
    },
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingDevice { .. } => crate::exitcode::USAGE,
            CliError::InvalidPercent { .. } => crate::exitcode::DATAERR,
            CliError::Application(e) => match e {
                e if e.is_not_found() => crate::exitcode::NOINPUT,
                ApplicationError::Parse { .. } => crate::exitcode::DATAERR,
                ApplicationError::Domain(DomainError::PercentOutOfRange(_)) => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { source, .. } => match source.kind() {
                    ErrorKind::PermissionDenied => crate::exitcode::NOPERM,
                    ErrorKind::NotFound => crate::exitcode::NOINPUT,
                    _ => crate::exitcode::IOERR,
                },
                _ => crate::exitcode::SOFTWARE,
            },
        }
    }
}
