mod cleanup;
mod convert;
mod fallback;
mod generator;
pub mod llm;
mod prompt;
mod request;

pub use cleanup::clean_response;
pub use convert::*;
pub use fallback::fallback_recipe;
pub use generator::*;
pub use prompt::build_prompt;
pub use request::*;
