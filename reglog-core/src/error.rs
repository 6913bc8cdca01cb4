//! Error type shared by the registry and the logger write path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by registry operations and by record writes.
#[derive(Error, Debug)]
pub enum Error {
    /// Logger name is empty or longer than [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) bytes
    #[error("invalid logger name: length {len} is outside 1..={max}", max = crate::MAX_NAME_LEN)]
    InvalidName { len: usize },

    /// A logger with this name is already registered
    #[error("logger already exists: {0}")]
    DuplicateName(String),

    /// No logger with this name is registered
    #[error("logger not found: {0}")]
    NotFound(String),

    /// The record file could not be opened for appending
    #[error("open failed: {}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be written to its file
    #[error("write failed: {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of [`Error`], for callers that branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    DuplicateName,
    NotFound,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidName { .. } => ErrorKind::InvalidName,
            Error::DuplicateName(_) => ErrorKind::DuplicateName,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::OpenFailed { .. } | Error::WriteFailed { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
