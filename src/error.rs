//! Crate error type.
//!
//! Only input loading and configuration can fail recoverably. Precondition
//! violations inside the solvers (wrong solution length, empty population)
//! are programming errors and panic instead.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors produced while loading a problem instance or validating a config.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `<weight>,<value>`, found {content:?}")]
    MalformedItem { line: usize, content: String },

    #[error("line {line}: {field:?} is not a non-negative integer: {source}")]
    InvalidInteger {
        line: usize,
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("capacity source is empty")]
    MissingCapacity,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_integer(line: usize, field: &str, source: ParseIntError) -> Self {
        Self::InvalidInteger {
            line,
            field: field.to_string(),
            source,
        }
    }
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
