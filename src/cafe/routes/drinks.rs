//! Drink routes: public menu listing and scope-gated CRUD.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::app_state::AppState;
use super::auth_context::AuthContext;
use super::error::ApiError;
use crate::cafe::models::{Drink, DrinkSummary, Ingredient};

/// Request body for creating or patching a drink.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DrinkPayload {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

/// A recipe given either as a single ingredient object or a list of them;
/// both normalize to a list.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(ingredients) => ingredients,
            RecipeInput::One(ingredient) => vec![ingredient],
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub success: bool,
    pub drinks: Vec<DrinkSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DrinkDetailResponse {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    /// Id of the deleted drink
    pub delete: i32,
}

/// Create the drinks router
pub fn drinks_router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(get_drinks).post(create_drink))
        .route("/drinks-detail", get(get_drinks_detail))
        .route("/drinks/{drink_id}", patch(update_drink).delete(delete_drink))
}

/// GET /drinks - Public menu with the short recipe representation
#[utoipa::path(
    get,
    path = "/drinks",
    tag = "Drinks",
    responses(
        (status = 200, description = "The menu", body = MenuResponse),
        (status = 404, description = "The menu is empty")
    )
)]
pub async fn get_drinks(State(state): State<AppState>) -> Result<Json<MenuResponse>, ApiError> {
    let drinks = state.store.list_drinks().await?;

    if drinks.is_empty() {
        return Err(ApiError::not_found());
    }

    Ok(Json(MenuResponse {
        success: true,
        drinks: drinks.iter().map(Drink::short).collect(),
    }))
}

/// GET /drinks-detail - Full recipes, requires the get:drinks-detail scope
#[utoipa::path(
    get,
    path = "/drinks-detail",
    tag = "Drinks",
    responses(
        (status = 200, description = "The menu with full recipes", body = DrinkDetailResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Token lacks get:drinks-detail"),
        (status = 404, description = "The menu is empty")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_drinks_detail(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<DrinkDetailResponse>, ApiError> {
    auth.require_permission("get:drinks-detail")?;

    let drinks = state.store.list_drinks().await?;

    if drinks.is_empty() {
        return Err(ApiError::not_found());
    }

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks,
    }))
}

/// POST /drinks - Create a drink, requires the post:drinks scope
#[utoipa::path(
    post,
    path = "/drinks",
    tag = "Drinks",
    request_body = DrinkPayload,
    responses(
        (status = 200, description = "The new drink in its long representation", body = DrinkDetailResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Token lacks post:drinks"),
        (status = 422, description = "Blank title, empty recipe, or duplicate title")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_drink(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(payload): Json<DrinkPayload>,
) -> Result<Json<DrinkDetailResponse>, ApiError> {
    auth.require_permission("post:drinks")?;

    let title = payload
        .title
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::unprocessable)?;
    let recipe = payload
        .recipe
        .map(RecipeInput::into_ingredients)
        .filter(|r| !r.is_empty())
        .ok_or_else(ApiError::unprocessable)?;

    let drink = state.store.create_drink(title, recipe).await?;
    info!("Created drink {} ({})", drink.id, drink.title);

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: vec![drink],
    }))
}

/// PATCH /drinks/{drink_id} - Partial update, requires the patch:drinks scope
#[utoipa::path(
    patch,
    path = "/drinks/{drink_id}",
    tag = "Drinks",
    params(
        ("drink_id" = i32, Path, description = "Id of the drink to update")
    ),
    request_body = DrinkPayload,
    responses(
        (status = 200, description = "The updated drink in its long representation", body = DrinkDetailResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Token lacks patch:drinks"),
        (status = 404, description = "Drink does not exist"),
        (status = 422, description = "Duplicate title")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_drink(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(drink_id): Path<i32>,
    Json(payload): Json<DrinkPayload>,
) -> Result<Json<DrinkDetailResponse>, ApiError> {
    auth.require_permission("patch:drinks")?;

    // Blank fields are skipped rather than rejected; a PATCH with neither
    // field present is a no-op that still answers 200.
    let title = payload
        .title
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let recipe = payload
        .recipe
        .map(RecipeInput::into_ingredients)
        .filter(|r| !r.is_empty());

    let drink = state.store.update_drink(drink_id, title, recipe).await?;

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: vec![drink],
    }))
}

/// DELETE /drinks/{drink_id} - Remove a drink, requires the delete:drinks scope
#[utoipa::path(
    delete,
    path = "/drinks/{drink_id}",
    tag = "Drinks",
    params(
        ("drink_id" = i32, Path, description = "Id of the drink to delete")
    ),
    responses(
        (status = 200, description = "Drink deleted", body = DeleteDrinkResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Token lacks delete:drinks"),
        (status = 404, description = "Drink does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_drink(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(drink_id): Path<i32>,
) -> Result<Json<DeleteDrinkResponse>, ApiError> {
    auth.require_permission("delete:drinks")?;

    state.store.delete_drink(drink_id).await?;
    info!("Deleted drink {}", drink_id);

    Ok(Json(DeleteDrinkResponse {
        success: true,
        delete: drink_id,
    }))
}
