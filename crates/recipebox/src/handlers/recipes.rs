//! Recipe CRUD handlers.
//!
//! These handlers decode input and delegate to the repository trait object.
//! Caching and invalidation are handled by the cached repository decorator.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use recipebox_core::recipe::{parse_recipe_id, Recipe, RecipeChanges};

use crate::{
    handlers::{error::RequestError, AppError},
    state::AppState,
};

/// Query parameters for tag search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub tag: Option<String>,
}

/// Acknowledgement body for update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn read_body(
    payload: Result<Json<RecipeChanges>, JsonRejection>,
) -> Result<RecipeChanges, AppError> {
    let Json(changes) = payload.map_err(|e| RequestError::InvalidBody(e.body_text()))?;
    Ok(changes)
}

/// List all recipes (GET /recipes).
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state.recipes.list_recipes().await?;
    Ok(Json(recipes))
}

/// Recipes carrying a tag (GET /recipes/search?tag=).
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let tag = query
        .tag
        .filter(|tag| !tag.is_empty())
        .ok_or(RequestError::MissingParameter("tag"))?;

    let recipes = state.recipes.search_recipes(&tag, state.tag_match).await?;
    tracing::debug!(tag = %tag, count = recipes.len(), "Searched recipes");
    Ok(Json(recipes))
}

/// Create a recipe (POST /recipes).
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeChanges>, JsonRejection>,
) -> Result<Json<Recipe>, AppError> {
    let changes = read_body(payload)?;
    let recipe = Recipe::from_changes(changes);

    state.recipes.create_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Created recipe");
    Ok(Json(recipe))
}

/// Replace a recipe's editable fields (PUT /recipes/{id}).
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<RecipeChanges>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_recipe_id(&raw_id)?;
    let changes = read_body(payload)?;

    state.recipes.update_recipe(id, &changes).await?;

    tracing::info!(recipe_id = %id, "Updated recipe");
    Ok(Json(MessageResponse {
        message: "Recipe has been updated",
    }))
}

/// Delete a recipe (DELETE /recipes/{id}).
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_recipe_id(&raw_id)?;

    state.recipes.delete_recipe(id).await?;

    tracing::info!(recipe_id = %id, "Deleted recipe");
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Recipe deleted",
        }),
    ))
}
