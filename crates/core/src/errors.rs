//! Core error types for the Heritage Hub application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file I/O, serialization of the backing file, etc.) are converted to these
//! types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// independent of the backing substrate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Intake collaborator failed: {0}")]
    Intake(#[from] IntakeError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for key-value store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read from the backing store.
    #[error("Store read failed: {0}")]
    ReadFailed(String),

    /// Failed to write to the backing store.
    #[error("Store write failed: {0}")]
    WriteFailed(String),

    /// The stored data is present but not parseable.
    ///
    /// Readers of domain records treat this as absent (fail-soft); it is
    /// surfaced only so callers can log the anomaly.
    #[error("Stored data is corrupted: {0}")]
    Corrupted(String),

    /// The requested key was not found.
    #[error("Key not found: {0}")]
    NotFound(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Amount {amount} is outside the allowed range [{min}, {max}]")]
    AmountOutOfRange { amount: f64, min: f64, max: f64 },
}

/// Errors from the external document/portfolio intake collaborators.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The HTTP call itself failed (connectivity, timeout).
    #[error("Request to {endpoint} failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    /// The collaborator answered with a non-success status.
    #[error("{endpoint} returned status {status}")]
    BadStatus { endpoint: String, status: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response from {endpoint}: {message}")]
    DecodeFailed { endpoint: String, message: String },
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(StoreError::ReadFailed(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
