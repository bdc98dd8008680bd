//! OpenAPI specification endpoints.

use axum::{
    Router,
    response::{Html, Json},
    routing::get,
};
use utoipa::OpenApi;

use super::app_state::AppState;
use crate::cafe::openapi::ApiDoc;

/// Create the OpenAPI router
pub fn openapi_router() -> Router<AppState> {
    Router::new()
        .route("/openapi.json", get(serve_openapi_json))
        .route("/swagger", get(serve_swagger_html))
}

/// GET /openapi.json - Serve the OpenAPI specification as JSON
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "OpenAPI",
    responses(
        (status = 200, description = "OpenAPI specification", body = Object)
    )
)]
pub async fn serve_openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /swagger - Serve a simple HTML page with link to OpenAPI spec
pub async fn serve_swagger_html() -> Html<&'static str> {
    Html(
        r#"
<!DOCTYPE html>
<html>
<head>
    <title>Cafe API - OpenAPI Documentation</title>
</head>
<body>
    <h1>Cafe API Documentation</h1>
    <p>OpenAPI specification is available at <a href="/openapi.json">/openapi.json</a>.</p>
    <p>Import it into Swagger Editor, Swagger UI, or Postman to browse the endpoints.</p>
</body>
</html>
"#,
    )
}
