#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use larder_shared::{Difficulty, Ingredient, Recipe};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

pub struct RecipeBuilder(Recipe);

pub fn recipe(id: &str) -> RecipeBuilder {
    RecipeBuilder(Recipe {
        id: id.to_owned(),
        title: format!("Recipe {id}"),
        description: "Test recipe".to_owned(),
        image_url: None,
        prep_time: 10,
        cook_time: 10,
        servings: 2,
        difficulty: Difficulty::Easy,
        cuisine: None,
        tags: vec![],
        ingredients: vec![],
        steps: vec![],
        nutrition_info: None,
        created_at: base_time(),
        updated_at: base_time(),
    })
}

impl RecipeBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.0.title = title.to_owned();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.0.difficulty = difficulty;
        self
    }

    pub fn prep_time(mut self, minutes: u32) -> Self {
        self.0.prep_time = minutes;
        self
    }

    pub fn cook_time(mut self, minutes: u32) -> Self {
        self.0.cook_time = minutes;
        self
    }

    pub fn cuisine(mut self, cuisine: &str) -> Self {
        self.0.cuisine = Some(cuisine.to_owned());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.0.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn ingredient(mut self, name: &str) -> Self {
        let index = self.0.ingredients.len();
        self.0.ingredients.push(Ingredient {
            id: format!("{}-{index}", self.0.id),
            name: name.to_owned(),
            amount: 1.0,
            unit: "cup".to_owned(),
        });
        self
    }

    /// Minutes after [`base_time`].
    pub fn created(mut self, minutes: i64) -> Self {
        self.0.created_at = base_time() + Duration::minutes(minutes);
        self.0.updated_at = self.0.created_at;
        self
    }

    pub fn build(self) -> Recipe {
        self.0
    }
}

pub fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}
