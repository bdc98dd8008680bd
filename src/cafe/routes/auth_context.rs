//! Authentication context extractor.
//!
//! Pulls the bearer token out of the Authorization header, validates it,
//! and exposes the claims so handlers can check permission scopes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::app_state::AppState;
use super::error::ApiError;
use crate::cafe::services::{AuthError, Claims};

/// Authentication context extracted from the request
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub claims: Claims,
}

impl AuthContext {
    /// Check that the validated token grants a permission scope.
    pub fn require_permission(&self, permission: &str) -> Result<(), AuthError> {
        self.claims.require_permission(permission)
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.validate_token(bearer.token()).map_err(|e| {
            tracing::warn!("token validation failed: {}", e);
            e
        })?;

        Ok(AuthContext { claims })
    }
}
