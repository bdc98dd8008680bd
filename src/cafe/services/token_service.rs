//! Bearer token service for the cafe API.
//!
//! Issues and validates HS256 JWTs carrying a `permissions` claim. The
//! claim values gate the menu's mutating and detail endpoints
//! (`get:drinks-detail`, `post:drinks`, `patch:drinks`, `delete:drinks`).

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Fallback secret for local development only.
pub const DEV_SECRET: &str = "dev-secret-do-not-use-in-production-change-me-now";

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("authorization header missing")]
    MissingToken,
    #[error("token is invalid: {0}")]
    InvalidToken(String),
    #[error("token has expired")]
    Expired,
    #[error("permission not found: {0}")]
    MissingPermission(String),
    #[error("failed to issue token: {0}")]
    TokenCreation(String),
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (token holder)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token id
    pub jti: String,
    /// Granted permission scopes
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Claims {
    /// Check that the token grants a permission scope.
    pub fn require_permission(&self, permission: &str) -> Result<(), AuthError> {
        if self.permissions.iter().any(|p| p == permission) {
            Ok(())
        } else {
            Err(AuthError::MissingPermission(permission.to_string()))
        }
    }
}

/// Token service configuration
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_duration: Duration,
}

impl TokenService {
    /// Create a new token service with the given secret
    ///
    /// # Arguments
    /// * `secret` - The secret key for signing tokens (should be at least 32 bytes)
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_duration: Duration::hours(24),
        }
    }

    /// Create a new token service from environment variables.
    ///
    /// In production (APP_ENV != "development"), this will panic if
    /// CAFE_JWT_SECRET is not set. In development, falls back to an
    /// insecure default secret with a warning.
    ///
    /// # Panics
    /// Panics in production if CAFE_JWT_SECRET environment variable is not set.
    pub fn from_env() -> Self {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());
        let is_development = app_env.to_lowercase() == "development";

        let secret = match std::env::var("CAFE_JWT_SECRET") {
            Ok(s) => s,
            Err(_) => {
                if is_development {
                    warn!(
                        "CAFE_JWT_SECRET not set! Using default secret for development. DO NOT USE IN PRODUCTION!"
                    );
                    DEV_SECRET.to_string()
                } else {
                    panic!(
                        "CRITICAL: CAFE_JWT_SECRET environment variable is required in production. Set APP_ENV=development to use default secret."
                    );
                }
            }
        };

        if secret.len() < 32 {
            if is_development {
                warn!("CAFE_JWT_SECRET is less than 32 characters. Consider using a longer secret.");
            } else {
                panic!("CRITICAL: CAFE_JWT_SECRET must be at least 32 characters in production.");
            }
        }

        Self::new(&secret)
    }

    /// Issue a token granting the given permission scopes.
    pub fn issue_token(&self, subject: &str, permissions: &[&str]) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.token_duration).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Decode and validate a token (checks signature and expiration)
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AuthError::InvalidToken("malformed token".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AuthError::InvalidToken("invalid signature".to_string())
                }
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

/// Shared token service for use across the application
pub type SharedTokenService = Arc<TokenService>;
