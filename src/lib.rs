pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

use std::sync::Arc;

use larder_generator::{RecipeGenerator, llm::create_provider};
use larder_recipe::{RecipeStore, load_catalog, sample_recipes};
use larder_shared::Recipe;

pub use config::Config;
pub use routes::AppState;

/// Seed recipes named by `catalog.seed_path`, or the built-in sample catalog.
pub fn seed_recipes(config: &Config) -> anyhow::Result<Vec<Recipe>> {
    let recipes = match &config.catalog.seed_path {
        Some(path) => load_catalog(path)?,
        None => sample_recipes()?,
    };

    Ok(recipes)
}

/// Builds the session store and the generator from configuration.
pub fn create_state(config: &Config) -> anyhow::Result<AppState> {
    let store = RecipeStore::new(seed_recipes(config)?);
    let provider = create_provider(&config.generator)?;

    tracing::info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        recipes = store.snapshot().recipes().len(),
        "application state created"
    );

    Ok(AppState {
        store,
        generator: Arc::new(RecipeGenerator::new(provider)),
    })
}

/// Create app router for testing
///
/// Same routes as the server, without the tracing and compression layers.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
}
