//! HTTP middleware shared by both services.

pub mod cors;
pub mod rate_limit;

pub use cors::create_cors_layer;
pub use rate_limit::{SharedRateLimiter, create_rate_limiter, rate_limit_middleware};
