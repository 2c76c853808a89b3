use chrono::Utc;
use larder_shared::{AI_GENERATED_TAG, Difficulty, Ingredient, NutritionInfo, Recipe, RecipeStep};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, de};
use ulid::Ulid;
use validator::Validate;

/// Recipe as the model returns it, before ids and timestamps are assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    #[validate(range(min = 1))]
    pub servings: u32,
    #[serde(deserialize_with = "difficulty_any_case")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub cuisine: String,
    #[validate(length(min = 1))]
    pub ingredients: Vec<GeneratedIngredient>,
    #[validate(length(min = 1))]
    pub steps: Vec<GeneratedStep>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Models write "Medium" as often as "medium".
fn difficulty_any_case<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .trim()
        .parse()
        .map_err(|_| de::Error::unknown_variant(&value, &["easy", "medium", "hard"]))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStep {
    pub step_number: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
}

/// Assigns ids, timestamps and nutrition to a generated recipe and tags it
/// as AI generated.
pub fn into_recipe(generated: GeneratedRecipe) -> Recipe {
    let now = Utc::now();

    let mut tags: Vec<String> = Vec::with_capacity(generated.tags.len() + 1);
    for tag in generated
        .tags
        .into_iter()
        .chain([AI_GENERATED_TAG.to_owned()])
    {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let ingredients = generated
        .ingredients
        .into_iter()
        .enumerate()
        .map(|(index, ingredient)| Ingredient {
            id: format!("ai-ing-{index}"),
            name: ingredient.name,
            amount: ingredient.amount.max(0.0),
            unit: ingredient.unit,
        })
        .collect();

    let steps = generated
        .steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| RecipeStep {
            id: format!("ai-step-{index}"),
            step_number: step.step_number,
            instruction: step.instruction,
            estimated_time: step.estimated_time,
        })
        .collect();

    let cuisine = Some(generated.cuisine).filter(|cuisine| !cuisine.trim().is_empty());

    Recipe {
        id: format!("ai-{}", Ulid::new()),
        title: generated.title,
        description: generated.description,
        image_url: None,
        prep_time: generated.prep_time,
        cook_time: generated.cook_time,
        servings: generated.servings,
        difficulty: generated.difficulty,
        cuisine,
        tags,
        ingredients,
        steps,
        nutrition_info: Some(placeholder_nutrition()),
        created_at: now,
        updated_at: now,
    }
}

/// Rough per-serving figures until real nutrition data is available.
fn placeholder_nutrition() -> NutritionInfo {
    let mut rng = rand::rng();

    NutritionInfo {
        calories: rng.random_range(300..500),
        protein: rng.random_range(15..35),
        carbs: rng.random_range(20..50),
        fat: rng.random_range(10..25),
    }
}
