use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use larder_shared::{FiltersPatch, Recipe, RecipePatch};
use tokio::sync::watch;

use crate::state::RecipeState;

/// Owner of the session's [`RecipeState`].
///
/// Cloning the store clones the handle, not the state. Mutations are
/// serialized through the channel's write lock: each one reads the current
/// snapshot, applies a pure transition and publishes the result before the
/// next mutation is admitted. Readers only ever get whole snapshots.
#[derive(Clone)]
pub struct RecipeStore {
    sender: Arc<watch::Sender<Arc<RecipeState>>>,
    generations: Arc<AtomicUsize>,
}

impl RecipeStore {
    pub fn new(seed: Vec<Recipe>) -> Self {
        Self::from_state(RecipeState::new(seed))
    }

    pub fn from_state(state: RecipeState) -> Self {
        let (sender, _) = watch::channel(Arc::new(state));
        Self {
            sender: Arc::new(sender),
            generations: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn snapshot(&self) -> Arc<RecipeState> {
        self.sender.borrow().clone()
    }

    /// Receiver notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RecipeState>> {
        self.sender.subscribe()
    }

    fn apply(&self, action: &'static str, transition: impl FnOnce(&RecipeState) -> RecipeState) {
        self.sender.send_modify(|current| {
            let next = transition(current.as_ref());
            tracing::debug!(
                action,
                recipes = next.recipes().len(),
                filtered = next.filtered_recipes().len(),
                "recipe state updated"
            );
            *current = Arc::new(next);
        });
    }

    pub fn set_recipes(&self, recipes: Vec<Recipe>) {
        self.apply("set_recipes", |s| s.set_recipes(recipes));
    }

    pub fn add_recipe(&self, recipe: Recipe) {
        self.apply("add_recipe", |s| s.add_recipe(recipe));
    }

    pub fn update_recipe(&self, id: &str, patch: &RecipePatch) {
        self.apply("update_recipe", |s| s.update_recipe(id, patch));
    }

    pub fn remove_recipe(&self, id: &str) {
        self.apply("remove_recipe", |s| s.remove_recipe(id));
    }

    pub fn set_selected_recipe(&self, recipe: Option<Recipe>) {
        self.apply("set_selected_recipe", |s| s.select_recipe(recipe));
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.apply("set_search_query", |s| s.set_search_query(query));
    }

    pub fn set_filters(&self, patch: &FiltersPatch) {
        self.apply("set_filters", |s| s.set_filters(patch));
    }

    pub fn clear_filters(&self) {
        self.apply("clear_filters", RecipeState::clear_filters);
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.apply("set_loading", |s| s.set_loading(is_loading));
    }

    pub fn set_generating(&self, is_generating: bool) {
        self.apply("set_generating", |s| s.set_generating(is_generating));
    }

    /// Counts one more generation in flight and raises `is_generating`.
    ///
    /// The count changes under the same lock as the state, so overlapping
    /// calls keep the flag up until the last one has ended.
    pub fn begin_generation(&self) {
        self.apply("begin_generation", |s| {
            self.generations.fetch_add(1, Ordering::SeqCst);
            s.set_generating(true)
        });
    }

    pub fn end_generation(&self) {
        self.apply("end_generation", |s| {
            let previous = self
                .generations
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                    Some(n.saturating_sub(1))
                })
                .unwrap_or_else(|n| n);
            s.set_generating(previous > 1)
        });
    }

    pub fn toggle_favorite(&self, id: &str) {
        self.apply("toggle_favorite", |s| s.toggle_favorite(id));
    }

    pub fn set_favorites(&self, ids: Vec<String>) {
        self.apply("set_favorites", |s| s.set_favorites(ids));
    }

    pub fn clear_favorites(&self) {
        self.apply("clear_favorites", RecipeState::clear_favorites);
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::from_state(RecipeState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_see_every_mutation() {
        let store = RecipeStore::default();
        let mut receiver = store.subscribe();

        store.set_loading(true);
        receiver.changed().await.unwrap();
        assert!(receiver.borrow_and_update().is_loading());

        store.toggle_favorite("abc");
        receiver.changed().await.unwrap();
        assert_eq!(
            receiver.borrow_and_update().favorite_recipe_ids(),
            ["abc".to_owned()]
        );
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_mutations() {
        let store = RecipeStore::default();
        let before = store.snapshot();

        store.set_search_query("pasta");

        assert_eq!(before.search_query(), "");
        assert_eq!(store.snapshot().search_query(), "pasta");
    }

    #[test]
    fn test_overlapping_generations_keep_flag_up() {
        let store = RecipeStore::default();
        let other = store.clone();

        store.begin_generation();
        other.begin_generation();
        store.end_generation();
        assert!(store.snapshot().is_generating());

        other.end_generation();
        assert!(!store.snapshot().is_generating());

        store.end_generation();
        assert!(!store.snapshot().is_generating());
        store.begin_generation();
        assert!(store.snapshot().is_generating());
    }

    #[test]
    fn test_clones_share_state() {
        let store = RecipeStore::default();
        let handle = store.clone();

        handle.set_generating(true);
        assert!(store.snapshot().is_generating());
    }
}
