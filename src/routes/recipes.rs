use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder_recipe::selectors;
use larder_shared::{Recipe, RecipePatch};
use serde::Deserialize;
use serde_json::json;

use super::{AppState, RecipesView};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// The filtered and sorted view.
    #[default]
    Filtered,
    All,
    AiGenerated,
    Regular,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub scope: Scope,
}

/// GET /api/recipes
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let snapshot = state.store.snapshot();

    let recipes: Vec<&Recipe> = match query.scope {
        Scope::Filtered => return Json(json!(RecipesView::from(snapshot.as_ref()))),
        Scope::All => snapshot.recipes().iter().collect(),
        Scope::AiGenerated => selectors::ai_recipes(&snapshot),
        Scope::Regular => selectors::regular_recipes(&snapshot),
    };

    Json(json!({ "recipes": recipes, "total": recipes.len() }))
}

/// GET /api/recipes/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let snapshot = state.store.snapshot();

    selectors::find_recipe(&snapshot, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::recipe_not_found(&id))
}

/// POST /api/recipes
pub async fn create(
    State(state): State<AppState>,
    Json(recipe): Json<Recipe>,
) -> Result<impl IntoResponse, AppError> {
    if recipe.id.trim().is_empty() {
        return Err(AppError::Validation("recipe id must not be empty".to_owned()));
    }
    if recipe.servings == 0 {
        return Err(AppError::Validation("servings must be positive".to_owned()));
    }

    tracing::info!(recipe_id = %recipe.id, "adding recipe");
    state.store.add_recipe(recipe.clone());

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PATCH /api/recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RecipePatch>,
) -> Result<Json<Recipe>, AppError> {
    if patch.servings == Some(0) {
        return Err(AppError::Validation("servings must be positive".to_owned()));
    }
    if selectors::find_recipe(&state.store.snapshot(), &id).is_none() {
        return Err(AppError::recipe_not_found(&id));
    }

    state.store.update_recipe(&id, &patch);

    let snapshot = state.store.snapshot();
    selectors::find_recipe(&snapshot, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::recipe_not_found(&id))
}

/// DELETE /api/recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if selectors::find_recipe(&state.store.snapshot(), &id).is_none() {
        return Err(AppError::recipe_not_found(&id));
    }

    tracing::info!(recipe_id = %id, "removing recipe");
    state.store.remove_recipe(&id);

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInput {
    pub recipe_id: Option<String>,
}

/// PUT /api/selection
///
/// Selects a recipe by id, or clears the selection when `recipeId` is null.
pub async fn select(
    State(state): State<AppState>,
    Json(input): Json<SelectionInput>,
) -> Result<impl IntoResponse, AppError> {
    let selected = match input.recipe_id {
        Some(id) => {
            let snapshot = state.store.snapshot();
            let recipe = selectors::find_recipe(&snapshot, &id)
                .cloned()
                .ok_or_else(|| AppError::recipe_not_found(&id))?;
            Some(recipe)
        }
        None => None,
    };

    state.store.set_selected_recipe(selected.clone());

    Ok(Json(json!({ "selectedRecipe": selected })))
}
