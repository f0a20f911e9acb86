//! Best-result store error types.
//!
//! - `Io`: the backing medium could not be read or written
//! - `Parse`: the stored record is not a decimal number

use thiserror::Error;

/// Errors that can occur while loading or saving the best result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// I/O error (file system, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Stored record is corrupt
    #[error("corrupt best-result record: {0}")]
    Parse(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for StoreError {
    fn from(err: std::num::ParseFloatError) -> Self {
        StoreError::Parse(err.to_string())
    }
}
