use std::cmp::Ordering;

use larder_shared::{Recipe, SortBy};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Ordering used by the given sort key. `Ordering::Equal` keeps input order
/// since every sort in this crate is stable.
pub fn compare(sort_by: SortBy, a: &Recipe, b: &Recipe) -> Ordering {
    match sort_by {
        SortBy::Newest => b.created_at.cmp(&a.created_at),
        SortBy::CookTime => a.total_time().cmp(&b.total_time()),
        SortBy::Difficulty => a.difficulty.ordinal().cmp(&b.difficulty.ordinal()),
        SortBy::Title => compare_titles(&a.title, &b.title),
        SortBy::Default => b
            .is_ai_generated()
            .cmp(&a.is_ai_generated())
            .then_with(|| b.created_at.cmp(&a.created_at)),
    }
}

/// Collation-style title order in three levels: base letters (accents and
/// case ignored), then accents with unaccented first, then case with
/// lowercase first.
fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented(title: &str) -> String {
    title.nfd().flat_map(char::to_lowercase).collect()
}

pub fn sort_recipes(recipes: &mut [Recipe], sort_by: Option<SortBy>) {
    let sort_by = sort_by.unwrap_or_default();
    recipes.sort_by(|a, b| compare(sort_by, a, b));
}
