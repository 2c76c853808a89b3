use std::{collections::HashSet, path::Path};

use larder_shared::Recipe;

const SAMPLE_RECIPES: &str = include_str!("../data/sample_recipes.json");

/// Built-in seed catalog.
pub fn sample_recipes() -> larder_shared::Result<Vec<Recipe>> {
    parse_catalog(SAMPLE_RECIPES)
}

/// Reads a seed catalog from a JSON file holding an array of recipes.
pub fn load_catalog(path: impl AsRef<Path>) -> larder_shared::Result<Vec<Recipe>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let recipes = parse_catalog(&raw)?;

    tracing::info!(
        path = %path.display(),
        recipes = recipes.len(),
        "recipe catalog loaded"
    );

    Ok(recipes)
}

pub fn parse_catalog(raw: &str) -> larder_shared::Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for recipe in &recipes {
        if !seen.insert(recipe.id.as_str()) {
            larder_shared::bail!("duplicate recipe id in catalog: {}", recipe.id);
        }
    }

    Ok(recipes)
}
