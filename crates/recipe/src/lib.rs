pub mod catalog;
mod filter;
pub mod selectors;
mod sort;
mod state;
mod store;

pub use catalog::{load_catalog, parse_catalog, sample_recipes};
pub use filter::*;
pub use sort::{compare, sort_recipes};
pub use state::RecipeState;
pub use store::RecipeStore;
