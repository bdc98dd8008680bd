//! Question routes: paginated listing, search, creation, and deletion.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::categories::category_map;
use super::error::ApiError;
use crate::trivia::models::{NewQuestion, Question};
use crate::trivia::storage::StorageError;

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters for paginated endpoints
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

/// Request body for POST /questions.
///
/// The endpoint is dual-purpose: a body carrying `searchTerm` runs a
/// search, anything else is a create.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
    pub rating: Option<i32>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: BTreeMap<String, String>,
    pub total_questions: usize,
    /// Always null on the unfiltered listing
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResultsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    /// Id assigned to the new question
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
}

/// Create the questions router
pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(list_questions).post(create_or_search_questions),
        )
        .route("/questions/{question_id}", delete(delete_question))
}

/// Slice one page out of an ordered question list.
///
/// Pages are 1-based; anything below 1 is clamped to the first page.
pub(crate) fn paginate(questions: &[Question], page: usize) -> &[Question] {
    let page = page.max(1);
    let start = (page - 1) * QUESTIONS_PER_PAGE;
    if start >= questions.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    &questions[start..end]
}

/// GET /questions - Paginated question listing with the category map
#[utoipa::path(
    get,
    path = "/questions",
    tag = "Questions",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number, 10 questions per page")
    ),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponse),
        (status = 404, description = "Page is beyond the last question")
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let questions = state.store.list_questions().await?;
    let page_items = paginate(&questions, query.page.unwrap_or(1));

    if page_items.is_empty() {
        return Err(ApiError::not_found());
    }

    let categories = category_map(state.store.list_categories().await?);

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_items.to_vec(),
        categories,
        total_questions: questions.len(),
        current_category: None,
    }))
}

/// POST /questions - Search when `searchTerm` is present, create otherwise
#[utoipa::path(
    post,
    path = "/questions",
    tag = "Questions",
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question created, or search results returned", body = CreateQuestionResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Missing or blank required fields")
    )
)]
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(payload): Json<QuestionPayload>,
) -> Result<Response, ApiError> {
    if let Some(term) = payload.search_term.as_deref() {
        let results = state.store.search_questions(term).await?;
        let page_items = paginate(&results, query.page.unwrap_or(1)).to_vec();

        return Ok(Json(SearchResultsResponse {
            success: true,
            total_questions: results.len(),
            questions: page_items,
        })
        .into_response());
    }

    let new = validate_new_question(payload)?;
    let created = state.store.create_question(new).await?;
    info!("Created question {}", created.id);

    let questions = state.store.list_questions().await?;
    let page_items = paginate(&questions, 1).to_vec();

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        total_questions: questions.len(),
        questions: page_items,
    })
    .into_response())
}

/// DELETE /questions/{question_id} - Remove a question by id
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = "Questions",
    params(
        ("question_id" = i32, Path, description = "Id of the question to delete")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 422, description = "Question does not exist")
    )
)]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    match state.store.delete_question(question_id).await {
        Ok(()) => Ok(Json(DeleteQuestionResponse { success: true })),
        // Unknown ids answer 422; the frontend relies on this contract
        Err(StorageError::NotFound { .. }) => Err(ApiError::unprocessable()),
        Err(e) => Err(e.into()),
    }
}

fn validate_new_question(payload: QuestionPayload) -> Result<NewQuestion, ApiError> {
    let question = payload
        .question
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::unprocessable)?;
    let answer = payload
        .answer
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::unprocessable)?;
    let category = payload.category.ok_or_else(ApiError::unprocessable)?;
    let difficulty = payload.difficulty.ok_or_else(ApiError::unprocessable)?;

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
        rating: payload.rating,
    })
}
