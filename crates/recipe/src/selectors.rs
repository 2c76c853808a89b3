//! Read-only views derived from a [`RecipeState`] snapshot.

use larder_shared::Recipe;

use crate::state::RecipeState;

pub fn recipe_count(state: &RecipeState) -> usize {
    state.recipes().len()
}

pub fn filtered_count(state: &RecipeState) -> usize {
    state.filtered_recipes().len()
}

pub fn find_recipe<'a>(state: &'a RecipeState, id: &str) -> Option<&'a Recipe> {
    state.recipes().iter().find(|r| r.id == id)
}

pub fn ai_recipes(state: &RecipeState) -> Vec<&Recipe> {
    state
        .recipes()
        .iter()
        .filter(|r| r.is_ai_generated())
        .collect()
}

pub fn regular_recipes(state: &RecipeState) -> Vec<&Recipe> {
    state
        .recipes()
        .iter()
        .filter(|r| !r.is_ai_generated())
        .collect()
}

/// True when any filter field is set (including a sort key) or a search
/// query is present.
pub fn has_active_filters(state: &RecipeState) -> bool {
    !state.filters().is_empty() || !state.search_query().is_empty()
}

pub fn is_favorite(state: &RecipeState, id: &str) -> bool {
    state.favorite_recipe_ids().iter().any(|f| f == id)
}

/// Favorites that still exist in the collection, in collection order.
pub fn favorite_recipes(state: &RecipeState) -> Vec<&Recipe> {
    state
        .recipes()
        .iter()
        .filter(|r| is_favorite(state, &r.id))
        .collect()
}

/// Counts ids, including ones whose recipe has been removed.
pub fn favorite_count(state: &RecipeState) -> usize {
    state.favorite_recipe_ids().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use larder_shared::{Difficulty, FiltersPatch, SortBy};

    fn recipe(id: &str, ai: bool) -> Recipe {
        Recipe {
            id: id.to_owned(),
            title: id.to_owned(),
            description: String::new(),
            image_url: None,
            prep_time: 5,
            cook_time: 5,
            servings: 1,
            difficulty: Difficulty::Easy,
            cuisine: None,
            tags: if ai {
                vec!["ai-generated".to_owned()]
            } else {
                vec![]
            },
            ingredients: vec![],
            steps: vec![],
            nutrition_info: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_source_partitions() {
        let state = RecipeState::new(vec![recipe("a", true), recipe("b", false), recipe("c", false)]);
        assert_eq!(recipe_count(&state), 3);
        assert_eq!(ai_recipes(&state).len(), 1);
        assert_eq!(regular_recipes(&state).len(), 2);
        assert_eq!(find_recipe(&state, "b").map(|r| r.id.as_str()), Some("b"));
        assert!(find_recipe(&state, "z").is_none());
    }

    #[test]
    fn test_active_filters() {
        let state = RecipeState::new(vec![recipe("a", false)]);
        assert!(!has_active_filters(&state));
        assert!(has_active_filters(&state.set_search_query("x")));
        assert!(has_active_filters(
            &state.set_filters(&FiltersPatch::new().sort_by(SortBy::Title))
        ));
        assert_eq!(filtered_count(&state.set_search_query("x")), 0);
    }

    #[test]
    fn test_favorites_skip_missing_recipes() {
        let state = RecipeState::new(vec![recipe("a", false), recipe("b", false)])
            .set_favorites(vec!["b".to_owned(), "gone".to_owned()]);

        assert!(is_favorite(&state, "gone"));
        assert_eq!(favorite_count(&state), 2);
        let favorites = favorite_recipes(&state);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "b");
    }
}
