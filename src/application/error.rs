//! Application-level errors (wraps domain errors)

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("no backlights found in {}", .dir.display())]
    NoDevices { dir: PathBuf },

    #[error("did not find backlight {name:?}. Available backlights: {}", .available.join(" "))]
    UnknownDevice {
        name: String,
        available: Vec<String>,
    },

    #[error("cannot parse {} as an integer: {content:?}", .path.display())]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// True for the "nothing by that name" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::NoDevices { .. } | ApplicationError::UnknownDevice { .. }
        )
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
