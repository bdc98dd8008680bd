//! Storage error types for the trivia storage backends.

use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i32 },
    /// Database connection error
    #[error("connection error: {0}")]
    Connection(String),
    /// General storage error
    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    pub fn question_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "question",
            id,
        }
    }

    pub fn category_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "category",
            id,
        }
    }
}
