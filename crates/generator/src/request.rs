use larder_shared::Difficulty;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_INGREDIENTS: usize = 10;

/// Splits free-form input on commas and newlines into at most
/// [`MAX_INGREDIENTS`] trimmed, non-empty ingredient names.
pub fn parse_ingredients(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .take(MAX_INGREDIENTS)
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 10,
        message = "between 1 and 10 ingredients are required"
    ))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default = "default_cuisine")]
    pub cuisine: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[validate(range(min = 1))]
    #[serde(default = "default_max_cook_time")]
    pub max_cook_time: u32,
}

fn default_cuisine() -> String {
    "any".to_owned()
}

fn default_servings() -> u32 {
    4
}

fn default_max_cook_time() -> u32 {
    60
}

impl GenerateRecipeRequest {
    pub fn new(ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            dietary_restrictions: vec![],
            cuisine: default_cuisine(),
            difficulty: Difficulty::default(),
            servings: default_servings(),
            max_cook_time: default_max_cook_time(),
        }
    }

    /// Request built from a comma or newline separated ingredient list.
    pub fn from_input(input: &str) -> Self {
        Self::new(parse_ingredients(input))
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn max_cook_time(mut self, minutes: u32) -> Self {
        self.max_cook_time = minutes;
        self
    }

    pub fn dietary_restrictions(
        mut self,
        restrictions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dietary_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    /// Trims ingredient names and drops blank ones. A blank cuisine falls
    /// back to `any`.
    pub fn normalized(mut self) -> Self {
        self.ingredients = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_owned)
            .collect();

        self.dietary_restrictions
            .retain(|restriction| !restriction.trim().is_empty());

        if self.cuisine.trim().is_empty() {
            self.cuisine = default_cuisine();
        }

        self
    }
}
