//! Storage-specific error types.

use thiserror::Error;

use heritage_core::errors::{Error, StoreError};

/// Errors raised by the JSON-file backend before conversion into the core
/// error type.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backing file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    /// Converts into the core error type for a read-side failure.
    pub(crate) fn into_read_error(self) -> Error {
        match self {
            StorageError::Io(e) => Error::Store(StoreError::ReadFailed(e.to_string())),
            StorageError::Json(e) => Error::Store(StoreError::Corrupted(e.to_string())),
        }
    }

    /// Converts into the core error type for a write-side failure.
    pub(crate) fn into_write_error(self) -> Error {
        Error::Store(StoreError::WriteFailed(self.to_string()))
    }
}
