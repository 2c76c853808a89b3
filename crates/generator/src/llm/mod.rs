//! Language model providers the recipe generator can talk to.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::Deserialize;
use std::{fmt, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A text completion backend. Implementations hold no per-request state.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// e.g. "gemini", "fake".
    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}

/// Provider selection and tuning, as read from the `generator` config
/// section.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderSettings {
    pub provider: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider: "gemini".to_owned(),
            api_key: None,
            model: "gemini-1.5-flash".to_owned(),
            temperature: 0.7,
            max_output_tokens: 2000,
        }
    }
}

pub const PROVIDERS: &[&str] = &["gemini", "fake"];

pub fn create_provider(settings: &ProviderSettings) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match settings.provider.as_str() {
        "fake" => Ok(Arc::new(FakeProvider::default())),
        "gemini" => {
            let api_key = settings
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| LlmError::NotConfigured("Gemini API key not set".to_owned()))?;

            Ok(Arc::new(
                GeminiProvider::new(api_key, settings.model.clone())
                    .temperature(settings.temperature)
                    .max_output_tokens(settings.max_output_tokens),
            ))
        }
        other => Err(LlmError::NotConfigured(format!("Unknown provider: {other}"))),
    }
}
