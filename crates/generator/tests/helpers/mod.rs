#![allow(dead_code)]

use std::sync::Arc;

use larder_generator::{RecipeGenerator, llm::FakeProvider};

/// A well-formed answer, wrapped the way models like to wrap things.
pub const FENCED_RESPONSE: &str = r#"```json
{
  "title": "Tomato Basil Bruschetta",
  "description": "Crisp bread topped with fresh tomatoes.",
  "prepTime": 10,
  "cookTime": 5,
  "servings": 4,
  "difficulty": "easy",
  "cuisine": "Italian",
  "ingredients": [
    {"name": "tomato", "amount": 3, "unit": "pieces"},
    {"name": "olive oil", "amount": 1/4, "unit": "cup"} // generous
  ],
  "steps": [
    {"stepNumber": 2, "instruction": "Top the bread.", "estimatedTime": 2},
    {"stepNumber": 1, "instruction": "Toast the bread.", "estimatedTime": 3}
  ],
  "tags": ["appetizer", "vegetarian", "appetizer"]
}
```"#;

pub fn generator(provider: FakeProvider) -> RecipeGenerator {
    RecipeGenerator::new(Arc::new(provider))
}
