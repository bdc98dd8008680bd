//! Authorization tests for the cafe API: missing tokens, bad tokens, and
//! tokens lacking the required scope.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use trivia_cafe_api::cafe::routes::{AppState, create_api_router, create_app_state};
use trivia_cafe_api::cafe::services::TokenService;

fn create_test_server() -> (TestServer, AppState) {
    let app_state = create_app_state();
    let router = create_api_router(app_state.clone());
    (TestServer::new(router).unwrap(), app_state)
}

fn token_with(state: &AppState, permissions: &[&str]) -> String {
    state.tokens.issue_token("test-user", permissions).unwrap()
}

#[tokio::test]
async fn test_public_menu_needs_no_token() {
    let (server, state) = create_test_server();
    let token = token_with(&state, &["post:drinks"]);
    server
        .post("/drinks")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Latte",
            "recipe": [{ "name": "espresso", "color": "#6f4e37", "parts": 1 }],
        }))
        .await
        .assert_status_ok();

    let response = server.get("/drinks").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_drinks_detail_requires_token() {
    let (server, _state) = create_test_server();

    let response = server.get("/drinks-detail").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 401);
}

#[tokio::test]
async fn test_drinks_detail_rejects_garbage_token() {
    let (server, _state) = create_test_server();

    let response = server
        .get("/drinks-detail")
        .authorization_bearer("not.a.token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_another_secret_is_rejected() {
    let (server, _state) = create_test_server();

    let foreign = TokenService::new("a-completely-different-secret-key-32");
    let token = foreign.issue_token("intruder", &["post:drinks"]).unwrap();

    let response = server
        .post("/drinks")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Latte",
            "recipe": [{ "name": "espresso", "color": "#6f4e37", "parts": 1 }],
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_requires_post_scope() {
    let (server, state) = create_test_server();
    let token = token_with(&state, &["get:drinks-detail"]);

    let response = server
        .post("/drinks")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Latte",
            "recipe": [{ "name": "espresso", "color": "#6f4e37", "parts": 1 }],
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 403);
    assert_eq!(body["message"], "permission not found: post:drinks");
}

#[tokio::test]
async fn test_patch_requires_token() {
    let (server, _state) = create_test_server();

    let response = server
        .patch("/drinks/1")
        .json(&json!({ "title": "Renamed" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_requires_delete_scope() {
    let (server, state) = create_test_server();
    let token = token_with(&state, &["post:drinks", "patch:drinks"]);

    let response = server
        .delete("/drinks/1")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_scope_check_runs_before_lookup() {
    // A missing scope answers 403 even when the drink does not exist
    let (server, state) = create_test_server();
    let token = token_with(&state, &[]);

    let response = server
        .delete("/drinks/999")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}
