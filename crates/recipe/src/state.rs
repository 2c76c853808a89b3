use larder_shared::{FiltersPatch, Recipe, RecipeFilters, RecipePatch};
use serde::Serialize;

use crate::filter::filter_recipes;

/// Session snapshot of the recipe collection and everything derived from it.
///
/// `filtered_recipes` is always `filter_recipes(recipes, filters, search_query)`
/// for the same snapshot. It is private so that only the transitions below
/// can produce it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeState {
    recipes: Vec<Recipe>,
    filtered_recipes: Vec<Recipe>,
    selected_recipe: Option<Recipe>,
    filters: RecipeFilters,
    search_query: String,
    is_loading: bool,
    is_generating: bool,
    favorite_recipe_ids: Vec<String>,
}

impl RecipeState {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self::default().set_recipes(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn filtered_recipes(&self) -> &[Recipe] {
        &self.filtered_recipes
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    pub fn filters(&self) -> &RecipeFilters {
        &self.filters
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn favorite_recipe_ids(&self) -> &[String] {
        &self.favorite_recipe_ids
    }

    fn refiltered(mut self) -> Self {
        self.filtered_recipes = filter_recipes(&self.recipes, &self.filters, &self.search_query);
        self
    }

    pub fn set_recipes(&self, recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            ..self.clone()
        }
        .refiltered()
    }

    /// Prepends: the collection is kept newest-first. Ids are not checked.
    pub fn add_recipe(&self, recipe: Recipe) -> Self {
        let mut recipes = Vec::with_capacity(self.recipes.len() + 1);
        recipes.push(recipe);
        recipes.extend(self.recipes.iter().cloned());

        Self {
            recipes,
            ..self.clone()
        }
        .refiltered()
    }

    /// Unknown ids leave the collection as is.
    pub fn update_recipe(&self, id: &str, patch: &RecipePatch) -> Self {
        let recipes = self
            .recipes
            .iter()
            .map(|recipe| {
                if recipe.id == id {
                    patch.apply(recipe)
                } else {
                    recipe.clone()
                }
            })
            .collect();

        Self {
            recipes,
            ..self.clone()
        }
        .refiltered()
    }

    /// Favorite ids pointing at the removed recipe are kept.
    pub fn remove_recipe(&self, id: &str) -> Self {
        let recipes = self
            .recipes
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();

        Self {
            recipes,
            ..self.clone()
        }
        .refiltered()
    }

    pub fn select_recipe(&self, recipe: Option<Recipe>) -> Self {
        Self {
            selected_recipe: recipe,
            ..self.clone()
        }
    }

    pub fn set_search_query(&self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self.clone()
        }
        .refiltered()
    }

    pub fn set_filters(&self, patch: &FiltersPatch) -> Self {
        Self {
            filters: self.filters.merge(patch),
            ..self.clone()
        }
        .refiltered()
    }

    /// Resets both the filters and the search query.
    pub fn clear_filters(&self) -> Self {
        Self {
            filters: RecipeFilters::default(),
            search_query: String::new(),
            ..self.clone()
        }
        .refiltered()
    }

    pub fn set_loading(&self, is_loading: bool) -> Self {
        Self {
            is_loading,
            ..self.clone()
        }
    }

    pub fn set_generating(&self, is_generating: bool) -> Self {
        Self {
            is_generating,
            ..self.clone()
        }
    }

    pub fn toggle_favorite(&self, id: &str) -> Self {
        let mut favorite_recipe_ids = self.favorite_recipe_ids.clone();
        match favorite_recipe_ids.iter().position(|f| f == id) {
            Some(index) => {
                favorite_recipe_ids.remove(index);
            }
            None => favorite_recipe_ids.push(id.to_owned()),
        }

        Self {
            favorite_recipe_ids,
            ..self.clone()
        }
    }

    /// Replaces the favorites. Repeated ids are kept once, in first-seen order.
    pub fn set_favorites(&self, ids: impl IntoIterator<Item = String>) -> Self {
        let mut favorite_recipe_ids: Vec<String> = Vec::new();
        for id in ids {
            if !favorite_recipe_ids.contains(&id) {
                favorite_recipe_ids.push(id);
            }
        }

        Self {
            favorite_recipe_ids,
            ..self.clone()
        }
    }

    pub fn clear_favorites(&self) -> Self {
        Self {
            favorite_recipe_ids: Vec::new(),
            ..self.clone()
        }
    }
}
