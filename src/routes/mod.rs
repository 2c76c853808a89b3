use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use larder_generator::RecipeGenerator;
use larder_recipe::{RecipeState, RecipeStore, selectors};
use larder_shared::{Recipe, RecipeFilters};
use serde::Serialize;

mod favorites;
mod filters;
mod generate;
mod health;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
    pub generator: Arc<RecipeGenerator>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/api/recipes/{id}",
            get(recipes::show)
                .patch(recipes::update)
                .delete(recipes::delete),
        )
        .route("/api/selection", put(recipes::select))
        .route("/api/search", put(filters::search))
        .route(
            "/api/filters",
            get(filters::show)
                .patch(filters::update)
                .delete(filters::clear),
        )
        .route(
            "/api/favorites",
            get(favorites::list)
                .put(favorites::replace)
                .delete(favorites::clear),
        )
        .route("/api/favorites/{id}/toggle", post(favorites::toggle))
        .route("/api/generate-recipe", post(generate::generate))
        .with_state(app_state)
}

/// What the presentation layer reads after every mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipesView {
    pub recipes: Vec<Recipe>,
    pub total: usize,
    pub filtered: usize,
    pub filters: RecipeFilters,
    pub search_query: String,
    pub has_active_filters: bool,
    pub selected_recipe: Option<Recipe>,
    pub is_loading: bool,
    pub is_generating: bool,
    pub favorite_recipe_ids: Vec<String>,
}

impl From<&RecipeState> for RecipesView {
    fn from(state: &RecipeState) -> Self {
        Self {
            recipes: state.filtered_recipes().to_vec(),
            total: selectors::recipe_count(state),
            filtered: selectors::filtered_count(state),
            filters: state.filters().clone(),
            search_query: state.search_query().to_owned(),
            has_active_filters: selectors::has_active_filters(state),
            selected_recipe: state.selected_recipe().cloned(),
            is_loading: state.is_loading(),
            is_generating: state.is_generating(),
            favorite_recipe_ids: state.favorite_recipe_ids().to_vec(),
        }
    }
}
