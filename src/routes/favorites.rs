use axum::{
    Json,
    extract::{Path, State},
};
use larder_recipe::{RecipeState, selectors};
use larder_shared::Recipe;
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesView {
    pub favorite_recipe_ids: Vec<String>,
    /// Favorites whose recipe is still in the collection.
    pub recipes: Vec<Recipe>,
    pub count: usize,
}

impl From<&RecipeState> for FavoritesView {
    fn from(state: &RecipeState) -> Self {
        Self {
            favorite_recipe_ids: state.favorite_recipe_ids().to_vec(),
            recipes: selectors::favorite_recipes(state)
                .into_iter()
                .cloned()
                .collect(),
            count: selectors::favorite_count(state),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoritesInput {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleView {
    pub id: String,
    pub is_favorite: bool,
    pub count: usize,
}

/// GET /api/favorites
pub async fn list(State(state): State<AppState>) -> Json<FavoritesView> {
    Json(FavoritesView::from(state.store.snapshot().as_ref()))
}

/// PUT /api/favorites
pub async fn replace(
    State(state): State<AppState>,
    Json(input): Json<FavoritesInput>,
) -> Json<FavoritesView> {
    state.store.set_favorites(input.ids);
    Json(FavoritesView::from(state.store.snapshot().as_ref()))
}

/// DELETE /api/favorites
pub async fn clear(State(state): State<AppState>) -> Json<FavoritesView> {
    state.store.clear_favorites();
    Json(FavoritesView::from(state.store.snapshot().as_ref()))
}

/// POST /api/favorites/{id}/toggle
///
/// Unknown ids are accepted; a favorite does not require its recipe.
pub async fn toggle(State(state): State<AppState>, Path(id): Path<String>) -> Json<ToggleView> {
    state.store.toggle_favorite(&id);

    let snapshot = state.store.snapshot();
    Json(ToggleView {
        is_favorite: selectors::is_favorite(&snapshot, &id),
        count: selectors::favorite_count(&snapshot),
        id,
    })
}
