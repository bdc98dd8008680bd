//! CORS middleware configuration.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Create the CORS layer used by both services.
///
/// Both APIs are consumed by browser frontends served from arbitrary
/// origins, so origins are left open. Allowed methods and headers match
/// what the route surface actually uses.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
