use axum::{Json, extract::State};
use larder_shared::{FiltersPatch, RecipeFilters};
use serde::Deserialize;

use super::{AppState, RecipesView};

#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub query: String,
}

/// PUT /api/search
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchInput>,
) -> Json<RecipesView> {
    state.store.set_search_query(input.query);
    Json(RecipesView::from(state.store.snapshot().as_ref()))
}

/// GET /api/filters
pub async fn show(State(state): State<AppState>) -> Json<RecipeFilters> {
    Json(state.store.snapshot().filters().clone())
}

/// PATCH /api/filters
///
/// Shallow merge: absent fields keep their value, `null` clears them.
pub async fn update(
    State(state): State<AppState>,
    Json(patch): Json<FiltersPatch>,
) -> Json<RecipesView> {
    state.store.set_filters(&patch);
    Json(RecipesView::from(state.store.snapshot().as_ref()))
}

/// DELETE /api/filters
pub async fn clear(State(state): State<AppState>) -> Json<RecipesView> {
    state.store.clear_filters();
    Json(RecipesView::from(state.store.snapshot().as_ref()))
}
