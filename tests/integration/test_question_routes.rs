//! Question endpoint tests: listing, pagination, search, create, delete.

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

async fn seed_question(server: &TestServer, text: &str, category: i64) -> i64 {
    let response = server
        .post("/questions")
        .json(&json!({
            "question": text,
            "answer": "Answer",
            "category": category,
            "difficulty": 3,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["created"].as_i64().unwrap()
}

#[tokio::test]
async fn test_retrieve_questions() {
    let server = create_test_server();
    let category = seed_category(&server, "Science").await;
    seed_question(&server, "What is the heaviest organ in the human body?", category).await;
    seed_question(&server, "Who discovered penicillin?", category).await;

    let response = server.get("/questions").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    assert!(!body["categories"].as_object().unwrap().is_empty());
    assert!(body["current_category"].is_null());
}

#[tokio::test]
async fn test_get_beyond_valid_page() {
    let server = create_test_server();
    let category = seed_category(&server, "Science").await;
    seed_question(&server, "Only question", category).await;

    let response = server.get("/questions?page=500").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_get_questions_empty_database() {
    let server = create_test_server();

    let response = server.get("/questions").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pagination_limits_page_size() {
    let server = create_test_server();
    let category = seed_category(&server, "History").await;
    for i in 0..12 {
        seed_question(&server, &format!("Question number {}", i), category).await;
    }

    let first_page: Value = server.get("/questions").await.json();
    assert_eq!(first_page["questions"].as_array().unwrap().len(), 10);
    assert_eq!(first_page["total_questions"], 12);

    let second_page: Value = server.get("/questions?page=2").await.json();
    assert_eq!(second_page["questions"].as_array().unwrap().len(), 2);
    assert_eq!(second_page["total_questions"], 12);
}

#[tokio::test]
async fn test_create_new_question() {
    let server = create_test_server();
    let category = seed_category(&server, "Geography").await;

    let response = server
        .post("/questions")
        .json(&json!({
            "question": "Name a country in East Africa?",
            "answer": "Kenya",
            "difficulty": 5,
            "category": category,
            "rating": 4,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["created"].as_i64().unwrap() > 0);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["rating"], 4);
}

#[tokio::test]
async fn test_create_question_missing_fields() {
    let server = create_test_server();

    let response = server
        .post("/questions")
        .json(&json!({
            "answer": "Kenya",
            "difficulty": 4,
            "category": 1,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "unprocessable");
}

#[tokio::test]
async fn test_create_question_blank_text() {
    let server = create_test_server();

    let response = server
        .post("/questions")
        .json(&json!({
            "question": "   ",
            "answer": "Kenya",
            "difficulty": 4,
            "category": 1,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_with_results() {
    let server = create_test_server();
    let category = seed_category(&server, "Art").await;
    seed_question(&server, "The Taj Mahal is located in which Indian city?", category).await;
    seed_question(&server, "Who painted the Mona Lisa?", category).await;

    let response = server
        .post("/questions")
        .json(&json!({ "searchTerm": "the" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_without_results() {
    let server = create_test_server();
    let category = seed_category(&server, "Art").await;
    seed_question(&server, "Who painted the Mona Lisa?", category).await;

    let response = server
        .post("/questions")
        .json(&json!({ "searchTerm": "Maureen" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["questions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_question() {
    let server = create_test_server();
    let category = seed_category(&server, "Sports").await;
    let question_id = seed_question(&server, "Which team won the 1998 World Cup?", category).await;
    seed_question(&server, "Who has the most Olympic golds?", category).await;

    let response = server.delete(&format!("/questions/{}", question_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let listing: Value = server.get("/questions").await.json();
    assert_eq!(listing["total_questions"], 1);
}

#[tokio::test]
async fn test_delete_question_fail() {
    let server = create_test_server();

    let response = server.delete("/questions/1000").await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "unprocessable");
}

#[tokio::test]
async fn test_unknown_route_renders_error_envelope() {
    let server = create_test_server();

    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn test_wrong_method_renders_error_envelope() {
    let server = create_test_server();

    let response = server.put("/questions").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "method not allowed");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "trivia-api");
}

#[tokio::test]
async fn test_openapi_endpoint() {
    let server = create_test_server();

    let response = server.get("/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["info"]["title"], "Trivia API");
}
