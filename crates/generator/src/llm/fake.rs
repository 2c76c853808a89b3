//! Offline provider with canned responses.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;

/// Answers with the first registered response whose key appears in the
/// prompt (case-insensitive), else with the default response, else fails.
///
/// The default instance answers `{}`, which never parses as a recipe, so
/// generation always lands on the fallback recipe.
#[derive(Debug)]
pub struct FakeProvider {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: vec![],
            default_response: Some("{}".to_owned()),
        }
    }
}

impl FakeProvider {
    /// No responses and no default: every prompt fails.
    pub fn new() -> Self {
        Self {
            responses: vec![],
            default_response: None,
        }
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_owned()));
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_owned());
        self
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let prompt_lower = prompt.to_lowercase();

        if let Some((_, response)) = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
        {
            return Ok(response.clone());
        }

        self.default_response.clone().ok_or_else(|| {
            LlmError::RequestFailed(format!(
                "FakeProvider: no response configured for prompt: {}",
                prompt.chars().take(100).collect::<String>()
            ))
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
