//! Application state management.
//!
//! The state holds the storage backend shared across all route handlers.

use crate::trivia::storage::{
    MemoryTriviaStore, PostgresTriviaStore, StorageError, TriviaStore,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state shared across all trivia route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for question and category operations
    pub store: Arc<dyn TriviaStore>,
}

impl AppState {
    /// Create a new application state backed by the in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryTriviaStore::new()))
    }

    /// Create a new application state with an explicit storage backend.
    pub fn with_store(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Initialize the state from environment configuration.
    ///
    /// Connects to PostgreSQL and runs migrations when DATABASE_URL is
    /// set, otherwise falls back to the in-memory store.
    pub async fn from_env() -> Result<Self, StorageError> {
        match std::env::var("DATABASE_URL") {
            Ok(database_url) => {
                let pool = PgPool::connect(&database_url).await.map_err(|e| {
                    StorageError::Connection(format!("Failed to connect to database: {}", e))
                })?;

                sqlx::migrate!("./migrations/trivia")
                    .run(&pool)
                    .await
                    .map_err(|e| StorageError::Connection(format!("Migration failed: {}", e)))?;

                Ok(Self::with_store(Arc::new(PostgresTriviaStore::new(pool))))
            }
            Err(_) => {
                tracing::warn!("DATABASE_URL not set, using in-memory storage");
                Ok(Self::new())
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
