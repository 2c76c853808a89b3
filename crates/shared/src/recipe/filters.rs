use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use super::Difficulty;

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
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RecipeSource {
    #[default]
    All,
    AiGenerated,
    Regular,
}

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
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortBy {
    #[default]
    Default,
    Newest,
    CookTime,
    Difficulty,
    Title,
}

/// Sparse set of constraints applied to the recipe collection.
///
/// `None` means no constraint. For list-valued fields an empty list also
/// means no constraint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_prep_time: Option<u32>,
    /// Recipe must carry at least one of these tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Recipe must carry every one of these tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RecipeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl RecipeFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shallow merge: fields present in the patch replace the current value.
    pub fn merge(&self, patch: &FiltersPatch) -> RecipeFilters {
        fn pick<T: Clone>(current: &Option<T>, patch: &Option<Option<T>>) -> Option<T> {
            match patch {
                Some(value) => value.clone(),
                None => current.clone(),
            }
        }

        RecipeFilters {
            cuisine: pick(&self.cuisine, &patch.cuisine),
            difficulty: pick(&self.difficulty, &patch.difficulty),
            max_prep_time: pick(&self.max_prep_time, &patch.max_prep_time),
            tags: pick(&self.tags, &patch.tags),
            dietary: pick(&self.dietary, &patch.dietary),
            source: pick(&self.source, &patch.source),
            sort_by: pick(&self.sort_by, &patch.sort_by),
        }
    }
}

/// Partial filters. The outer `Option` tells whether the field was supplied,
/// the inner one whether it sets or clears the constraint (`null` in JSON).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub cuisine: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub difficulty: Option<Option<Difficulty>>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_prep_time: Option<Option<u32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub dietary: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub source: Option<Option<RecipeSource>>,
    #[serde(default, deserialize_with = "double_option")]
    pub sort_by: Option<Option<SortBy>>,
}

impl FiltersPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cuisine(mut self, value: impl Into<Option<Vec<String>>>) -> Self {
        self.cuisine = Some(value.into());
        self
    }

    pub fn difficulty(mut self, value: impl Into<Option<Difficulty>>) -> Self {
        self.difficulty = Some(value.into());
        self
    }

    pub fn max_prep_time(mut self, value: impl Into<Option<u32>>) -> Self {
        self.max_prep_time = Some(value.into());
        self
    }

    pub fn tags(mut self, value: impl Into<Option<Vec<String>>>) -> Self {
        self.tags = Some(value.into());
        self
    }

    pub fn dietary(mut self, value: impl Into<Option<Vec<String>>>) -> Self {
        self.dietary = Some(value.into());
        self
    }

    pub fn source(mut self, value: impl Into<Option<RecipeSource>>) -> Self {
        self.source = Some(value.into());
        self
    }

    pub fn sort_by(mut self, value: impl Into<Option<SortBy>>) -> Self {
        self.sort_by = Some(value.into());
        self
    }
}

impl From<RecipeFilters> for FiltersPatch {
    /// A patch that replaces every field, clearing the ones unset in `filters`.
    fn from(filters: RecipeFilters) -> Self {
        FiltersPatch {
            cuisine: Some(filters.cuisine),
            difficulty: Some(filters.difficulty),
            max_prep_time: Some(filters.max_prep_time),
            tags: Some(filters.tags),
            dietary: Some(filters.dietary),
            source: Some(filters.source),
            sort_by: Some(filters.sort_by),
        }
    }
}

pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
