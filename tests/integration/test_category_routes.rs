//! Category endpoint tests: listing, creation, per-category questions.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use trivia_cafe_api::trivia::routes::{create_api_router, create_app_state};

fn create_test_server() -> TestServer {
    let app_state = create_app_state();
    let router = create_api_router(app_state);
    TestServer::new(router).unwrap()
}

async fn seed_category(server: &TestServer, category_type: &str) -> i64 {
    let response = server
        .post("/categories")
        .json(&json!({ "type": category_type }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["created"].as_i64().unwrap()
}

async fn seed_question(server: &TestServer, text: &str, category: i64) {
    let response = server
        .post("/questions")
        .json(&json!({
            "question": text,
            "answer": "Answer",
            "category": category,
            "difficulty": 2,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_categories() {
    let server = create_test_server();
    let science = seed_category(&server, "Science").await;
    seed_category(&server, "Art").await;

    let response = server.get("/categories").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_categories"], 2);
    assert_eq!(body["categories"][science.to_string()], "Science");
}

#[tokio::test]
async fn test_get_categories_empty() {
    let server = create_test_server();

    let response = server.get("/categories").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total_categories"], 0);
    assert!(body["categories"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_new_category() {
    let server = create_test_server();

    let response = server
        .post("/categories")
        .json(&json!({ "type": "Mathematics" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["created"].as_i64().unwrap() > 0);
    assert_eq!(body["total_categories"], 1);
    assert_eq!(body["categories"][0]["type"], "Mathematics");
}

#[tokio::test]
async fn test_create_category_missing_type() {
    let server = create_test_server();

    let response = server
        .post("/categories")
        .json(&json!({ "question": "Mathematics" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "unprocessable");
}

#[tokio::test]
async fn test_get_questions_for_a_category() {
    let server = create_test_server();
    let science = seed_category(&server, "Science").await;
    let art = seed_category(&server, "Art").await;
    seed_question(&server, "What is the chemical symbol for gold?", science).await;
    seed_question(&server, "Who painted the Mona Lisa?", art).await;

    let response = server
        .get(&format!("/categories/{}/questions", science))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], "Science");
    assert_eq!(body["questions"][0]["category"], science);
}

#[tokio::test]
async fn test_get_questions_for_a_nonexistent_category() {
    let server = create_test_server();

    let response = server.get("/categories/20/questions").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_category_with_no_questions() {
    let server = create_test_server();
    let empty = seed_category(&server, "Entertainment").await;

    let response = server.get(&format!("/categories/{}/questions", empty)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
