//! Category routes: listing, creation, and the per-category question view.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::ApiError;
use super::questions::{PageQuery, paginate};
use crate::trivia::models::{Category, Question};

/// Request body for creating a category
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: BTreeMap<String, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCategoryResponse {
    pub success: bool,
    /// Id assigned to the new category
    pub created: i32,
    pub categories: Vec<Category>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Create the categories router
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
}

/// Render categories as the `{id: type}` map the frontend consumes.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<String, String> {
    categories
        .into_iter()
        .map(|c| (c.id.to_string(), c.category_type))
        .collect()
}

/// GET /categories - All categories as an id-to-type map
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponse)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = state.store.list_categories().await?;

    Ok(Json(CategoryListResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(categories),
    }))
}

/// POST /categories - Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = CreateCategoryResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Missing or blank category type")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<Json<CreateCategoryResponse>, ApiError> {
    let category_type = request
        .category_type
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::unprocessable)?;

    let created = state.store.create_category(category_type).await?;
    info!("Created category {} ({})", created.id, created.category_type);

    let categories = state.store.list_categories().await?;

    Ok(Json(CreateCategoryResponse {
        success: true,
        created: created.id,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{category_id}/questions - Paginated questions for one category
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = "Categories",
    params(
        ("category_id" = i32, Path, description = "Category to list questions for"),
        ("page" = Option<usize>, Query, description = "1-based page number, 10 questions per page")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Unknown category or page beyond the last question")
    )
)]
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .get_category(category_id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let questions = state.store.questions_in_category(category_id).await?;
    let page_items = paginate(&questions, query.page.unwrap_or(1));

    if page_items.is_empty() {
        return Err(ApiError::not_found());
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page_items.to_vec(),
        total_questions: questions.len(),
        current_category: category.category_type,
    }))
}
