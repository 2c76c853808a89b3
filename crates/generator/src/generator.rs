use std::sync::Arc;

use larder_shared::Recipe;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;

use crate::{
    GenerateRecipeRequest, GeneratedRecipe, build_prompt, clean_response, fallback_recipe,
    into_recipe,
    llm::{LlmError, LlmProvider},
};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("recipe generator not configured: {0}")]
    NotConfigured(String),
}

/// Outcome of one generation request. `fallback` is set when the model's
/// answer was unusable and the deterministic recipe was substituted.
#[derive(Clone, Debug, Serialize)]
pub struct Generation {
    pub recipe: Recipe,
    pub fallback: bool,
}

/// Turns ingredient lists into recipes through an [`LlmProvider`].
#[derive(Clone, Debug)]
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Validation and configuration problems are errors. Any upstream or
    /// parse failure yields the fallback recipe instead.
    pub async fn generate(
        &self,
        request: GenerateRecipeRequest,
    ) -> Result<Generation, GeneratorError> {
        let request = request.normalized();
        request.validate()?;

        let prompt = build_prompt(&request);

        let (generated, fallback) = match self.draft(&prompt).await {
            Ok(generated) => (generated, false),
            Err(LlmError::NotConfigured(reason)) => {
                return Err(GeneratorError::NotConfigured(reason));
            }
            Err(err) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    model = self.provider.model_name(),
                    error = %err,
                    "recipe generation failed, using fallback recipe"
                );
                (fallback_recipe(&request), true)
            }
        };

        let recipe = into_recipe(generated);

        tracing::info!(
            recipe_id = %recipe.id,
            ingredients = request.ingredients.len(),
            fallback,
            "recipe generated"
        );

        Ok(Generation { recipe, fallback })
    }

    async fn draft(&self, prompt: &str) -> Result<GeneratedRecipe, LlmError> {
        let raw = self.provider.complete(prompt).await?;
        if raw.trim().is_empty() {
            return Err(LlmError::ParseError("empty response".to_owned()));
        }

        let cleaned = clean_response(&raw);
        tracing::debug!(raw_len = raw.len(), cleaned_len = cleaned.len(), "model response cleaned");

        let generated: GeneratedRecipe =
            serde_json::from_str(&cleaned).map_err(|e| LlmError::ParseError(e.to_string()))?;
        generated
            .validate()
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        Ok(generated)
    }
}
