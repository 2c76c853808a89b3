use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use larder_generator::GenerateRecipeRequest;
use larder_recipe::RecipeStore;
use serde_json::json;

use super::AppState;
use crate::error::AppError;

/// Counts one generation call as in flight for its lifetime. The call ends
/// on success, on error, and when the request is dropped mid-flight;
/// `is_generating` drops once no call is left.
struct GeneratingFlag(RecipeStore);

impl GeneratingFlag {
    fn raise(store: &RecipeStore) -> Self {
        store.begin_generation();
        Self(store.clone())
    }
}

impl Drop for GeneratingFlag {
    fn drop(&mut self) {
        self.0.end_generation();
    }
}

/// POST /api/generate-recipe
///
/// Concurrent calls are not deduplicated; each one adds its own recipe.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let flag = GeneratingFlag::raise(&state.store);
    let generation = state.generator.generate(request).await?;

    state.store.add_recipe(generation.recipe.clone());
    drop(flag);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "recipe": generation.recipe,
            "fallback": generation.fallback,
        })),
    ))
}
