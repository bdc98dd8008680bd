//! Application state management.
//!
//! The state holds the storage backend and the token service shared
//! across all route handlers.

use crate::cafe::services::{SharedTokenService, TokenService, token_service};
use crate::cafe::storage::{CafeStore, MemoryCafeStore, PostgresCafeStore, StorageError};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state shared across all cafe route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for drink operations
    pub store: Arc<dyn CafeStore>,
    /// Token service validating bearer tokens
    pub tokens: SharedTokenService,
}

impl AppState {
    /// Create a new application state backed by the in-memory store and
    /// the development token secret.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(MemoryCafeStore::new()),
            Arc::new(TokenService::new(token_service::DEV_SECRET)),
        )
    }

    /// Create a new application state from explicit parts.
    pub fn with_parts(store: Arc<dyn CafeStore>, tokens: SharedTokenService) -> Self {
        Self { store, tokens }
    }

    /// Initialize the state from environment configuration.
    ///
    /// Connects to PostgreSQL and runs migrations when DATABASE_URL is
    /// set, otherwise falls back to the in-memory store.
    pub async fn from_env() -> Result<Self, StorageError> {
        let tokens: SharedTokenService = Arc::new(TokenService::from_env());

        match std::env::var("DATABASE_URL") {
            Ok(database_url) => {
                let pool = PgPool::connect(&database_url).await.map_err(|e| {
                    StorageError::Connection(format!("Failed to connect to database: {}", e))
                })?;

                sqlx::migrate!("./migrations/cafe")
                    .run(&pool)
                    .await
                    .map_err(|e| StorageError::Connection(format!("Migration failed: {}", e)))?;

                Ok(Self::with_parts(
                    Arc::new(PostgresCafeStore::new(pool)),
                    tokens,
                ))
            }
            Err(_) => {
                tracing::warn!("DATABASE_URL not set, using in-memory storage");
                Ok(Self::with_parts(Arc::new(MemoryCafeStore::new()), tokens))
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
