mod filters;
mod patch;

pub use filters::*;
pub use patch::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Tag carried by every recipe produced by the generator.
pub const AI_GENERATED_TAG: &str = "ai-generated";

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Sort rank: easy(1) < medium(2) < hard(3).
    pub fn ordinal(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub id: String,
    pub step_number: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_info: Option<NutritionInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_ai_generated(&self) -> bool {
        self.has_tag(AI_GENERATED_TAG)
    }

    /// Prep plus cook time in minutes. Widened so large stored times cannot overflow.
    pub fn total_time(&self) -> u64 {
        u64::from(self.prep_time) + u64::from(self.cook_time)
    }

    /// Steps in display order. The stored order is not meaningful.
    pub fn ordered_steps(&self) -> Vec<&RecipeStep> {
        let mut steps = self.steps.iter().collect::<Vec<_>>();
        steps.sort_by_key(|s| s.step_number);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn step(n: u32) -> RecipeStep {
        RecipeStep {
            id: format!("s{n}"),
            step_number: n,
            instruction: format!("step {n}"),
            estimated_time: None,
        }
    }

    #[test]
    fn test_ordered_steps_follow_step_number() {
        let recipe = Recipe {
            id: "r1".to_owned(),
            title: "Soup".to_owned(),
            description: String::new(),
            image_url: None,
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            cuisine: None,
            tags: vec![],
            ingredients: vec![],
            steps: vec![step(3), step(1), step(2)],
            nutrition_info: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let numbers = recipe
            .ordered_steps()
            .iter()
            .map(|s| s.step_number)
            .collect::<Vec<_>>();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(recipe.steps[0].step_number, 3);
        assert_eq!(recipe.total_time(), 15);
    }

    #[test]
    fn test_difficulty_strings() {
        assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"medium\""
        );
        assert!(Difficulty::Easy.ordinal() < Difficulty::Hard.ordinal());
    }

    #[test]
    fn test_recipe_json_uses_camel_case() {
        let json = r#"{
            "id": "1",
            "title": "Pancakes",
            "description": "Fluffy",
            "prepTime": 10,
            "cookTime": 15,
            "servings": 4,
            "difficulty": "easy",
            "tags": ["breakfast"],
            "ingredients": [{"id": "i1", "name": "flour", "amount": 1.5, "unit": "cups"}],
            "steps": [{"id": "s1", "stepNumber": 1, "instruction": "Mix"}],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time, 10);
        assert_eq!(recipe.cuisine, None);
        assert_eq!(recipe.ingredients[0].amount, 1.5);
        assert!(!recipe.is_ai_generated());

        let value = serde_json::to_value(&recipe).unwrap();
        assert!(value.get("cookTime").is_some());
        assert!(value.get("imageUrl").is_none());
    }
}
