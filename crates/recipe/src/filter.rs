use larder_shared::{Difficulty, Recipe, RecipeFilters, RecipeSource};

use crate::sort::sort_recipes;

/// One predicate of the filter pipeline.
///
/// Stages are plain data so a pipeline can be inspected, logged and tested
/// stage by stage. A stage that would not constrain anything is never built.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterStage {
    /// Case-insensitive substring over title, description, cuisine, tags
    /// and ingredient names.
    Search(String),
    Source(RecipeSource),
    /// Recipe cuisine must be one of these.
    Cuisine(Vec<String>),
    Difficulty(Difficulty),
    /// Inclusive bound on prep time alone.
    MaxPrepTime(u32),
    /// At least one of these tags.
    Tags(Vec<String>),
    /// Every one of these tags.
    Dietary(Vec<String>),
}

impl FilterStage {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            FilterStage::Search(query) => matches_search(recipe, query),
            FilterStage::Source(RecipeSource::All) => true,
            FilterStage::Source(RecipeSource::AiGenerated) => recipe.is_ai_generated(),
            FilterStage::Source(RecipeSource::Regular) => !recipe.is_ai_generated(),
            FilterStage::Cuisine(cuisines) => recipe
                .cuisine
                .as_ref()
                .is_some_and(|cuisine| cuisines.contains(cuisine)),
            FilterStage::Difficulty(difficulty) => &recipe.difficulty == difficulty,
            FilterStage::MaxPrepTime(max) => recipe.prep_time <= *max,
            FilterStage::Tags(tags) => tags.iter().any(|tag| recipe.has_tag(tag)),
            FilterStage::Dietary(tags) => tags.iter().all(|tag| recipe.has_tag(tag)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FilterStage::Search(_) => "search",
            FilterStage::Source(_) => "source",
            FilterStage::Cuisine(_) => "cuisine",
            FilterStage::Difficulty(_) => "difficulty",
            FilterStage::MaxPrepTime(_) => "max_prep_time",
            FilterStage::Tags(_) => "tags",
            FilterStage::Dietary(_) => "dietary",
        }
    }
}

fn matches_search(recipe: &Recipe, query: &str) -> bool {
    let query = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&query);

    contains(&recipe.title)
        || contains(&recipe.description)
        || contains(recipe.cuisine.as_deref().unwrap_or_default())
        || recipe.tags.iter().any(|tag| contains(tag))
        || recipe.ingredients.iter().any(|ing| contains(&ing.name))
}

/// Ordered list of the stages that are active for a set of filters.
///
/// Order: search, source, cuisine, difficulty, max prep time, tags, dietary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterPlan {
    stages: Vec<FilterStage>,
}

impl FilterPlan {
    pub fn build(filters: &RecipeFilters, search_query: &str) -> Self {
        let mut stages = Vec::new();

        if !search_query.trim().is_empty() {
            stages.push(FilterStage::Search(search_query.to_owned()));
        }

        if let Some(source) = filters.source.filter(|s| *s != RecipeSource::All) {
            stages.push(FilterStage::Source(source));
        }

        if let Some(cuisine) = non_empty(&filters.cuisine) {
            stages.push(FilterStage::Cuisine(cuisine));
        }

        if let Some(difficulty) = filters.difficulty {
            stages.push(FilterStage::Difficulty(difficulty));
        }

        if let Some(max) = filters.max_prep_time {
            stages.push(FilterStage::MaxPrepTime(max));
        }

        if let Some(tags) = non_empty(&filters.tags) {
            stages.push(FilterStage::Tags(tags));
        }

        if let Some(dietary) = non_empty(&filters.dietary) {
            stages.push(FilterStage::Dietary(dietary));
        }

        Self { stages }
    }

    pub fn stages(&self) -> &[FilterStage] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.stages.iter().all(|stage| stage.matches(recipe))
    }

    /// Runs every stage in order over the collection.
    pub fn retain(&self, mut recipes: Vec<Recipe>) -> Vec<Recipe> {
        for stage in &self.stages {
            recipes.retain(|recipe| stage.matches(recipe));
        }

        recipes
    }
}

fn non_empty(values: &Option<Vec<String>>) -> Option<Vec<String>> {
    values.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Derives the visible, ordered recipe list. Inputs are left untouched.
pub fn filter_recipes(
    recipes: &[Recipe],
    filters: &RecipeFilters,
    search_query: &str,
) -> Vec<Recipe> {
    let plan = FilterPlan::build(filters, search_query);
    let mut filtered = plan.retain(recipes.to_vec());
    sort_recipes(&mut filtered, filters.sort_by);

    filtered
}
