//! Storage error types for the cafe storage backends.

use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Drink not found
    #[error("drink not found: id {0}")]
    NotFound(i32),
    /// Drink titles are unique
    #[error("duplicate drink title: {0}")]
    Conflict(String),
    /// Database connection error
    #[error("connection error: {0}")]
    Connection(String),
    /// Stored recipe text could not be decoded
    #[error("invalid recipe data: {0}")]
    Data(String),
}
