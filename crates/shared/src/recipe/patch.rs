use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Difficulty, Ingredient, NutritionInfo, Recipe, RecipeStep};

/// Partial recipe used by `update_recipe`. Every supplied field replaces the
/// stored one; the id cannot be changed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::filters::double_option")]
    pub image_url: Option<Option<String>>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<Difficulty>,
    #[serde(default, deserialize_with = "super::filters::double_option")]
    pub cuisine: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub steps: Option<Vec<RecipeStep>>,
    #[serde(default, deserialize_with = "super::filters::double_option")]
    pub nutrition_info: Option<Option<NutritionInfo>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecipePatch {
    pub fn apply(&self, recipe: &Recipe) -> Recipe {
        let mut next = recipe.clone();
        let patch = self.clone();

        if let Some(title) = patch.title {
            next.title = title;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(image_url) = patch.image_url {
            next.image_url = image_url;
        }
        if let Some(prep_time) = patch.prep_time {
            next.prep_time = prep_time;
        }
        if let Some(cook_time) = patch.cook_time {
            next.cook_time = cook_time;
        }
        if let Some(servings) = patch.servings {
            next.servings = servings;
        }
        if let Some(difficulty) = patch.difficulty {
            next.difficulty = difficulty;
        }
        if let Some(cuisine) = patch.cuisine {
            next.cuisine = cuisine;
        }
        if let Some(tags) = patch.tags {
            next.tags = tags;
        }
        if let Some(ingredients) = patch.ingredients {
            next.ingredients = ingredients;
        }
        if let Some(steps) = patch.steps {
            next.steps = steps;
        }
        if let Some(nutrition_info) = patch.nutrition_info {
            next.nutrition_info = nutrition_info;
        }
        if let Some(created_at) = patch.created_at {
            next.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            next.updated_at = updated_at;
        }

        next
    }
}
