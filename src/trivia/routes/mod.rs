//! Trivia API routes - organizes all route handlers.

pub mod app_state;
pub mod categories;
pub mod error;
pub mod openapi;
pub mod questions;
pub mod quizzes;

pub use app_state::AppState;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::trivia::storage::StorageError;
use error::ApiError;

/// Create the trivia API router with all route groups mounted.
pub fn create_api_router(app_state: AppState) -> Router {
    Router::new()
        .merge(questions::questions_router())
        .merge(categories::categories_router())
        .merge(quizzes::quizzes_router())
        .merge(openapi::openapi_router())
        .route("/health", get(health_check))
        .fallback(fallback_not_found)
        .method_not_allowed_fallback(fallback_method_not_allowed)
        .with_state(app_state)
}

/// Create the application state backed by the in-memory store.
pub fn create_app_state() -> AppState {
    AppState::new()
}

/// Create the application state from environment configuration.
///
/// Connects to PostgreSQL when DATABASE_URL is set, otherwise falls back
/// to the in-memory store.
pub async fn create_app_state_from_env() -> Result<AppState, StorageError> {
    AppState::from_env().await
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "trivia-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn fallback_not_found() -> ApiError {
    ApiError::not_found()
}

async fn fallback_method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
