//! Quiz routes: random unseen question selection.

use axum::{Router, extract::State, response::Json, routing::post};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::ApiError;
use crate::trivia::models::Question;

/// Request body for POST /quizzes
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids already played this round
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector; id 0 plays across all categories.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// Absent once the category pool is exhausted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// Create the quizzes router
pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}

/// POST /quizzes - Random question not yet seen in this round
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "Quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A fresh question, or success=false when the pool is exhausted", body = QuizResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Missing quiz category, or a category with no questions")
    )
)]
pub async fn play_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = request
        .quiz_category
        .ok_or_else(ApiError::unprocessable)?;

    let pool = if category.id == 0 {
        state.store.list_questions().await?
    } else {
        state.store.questions_in_category(category.id).await?
    };

    if pool.is_empty() {
        return Err(ApiError::unprocessable());
    }

    let remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !request.previous_questions.contains(&q.id))
        .collect();

    match remaining.choose(&mut rand::thread_rng()) {
        Some(question) => Ok(Json(QuizResponse {
            success: true,
            question: Some(question.clone()),
        })),
        None => Ok(Json(QuizResponse {
            success: false,
            question: None,
        })),
    }
}
