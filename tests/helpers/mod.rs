//! Shared setup for the HTTP tests: an app over a small in-memory catalog
//! and a fake model provider.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use larder::AppState;
use async_trait::async_trait;
use larder_generator::{
    RecipeGenerator,
    llm::{FakeProvider, LlmError, LlmProvider},
};
use larder_recipe::RecipeStore;
use larder_shared::{Difficulty, Recipe};
use serde_json::Value;
use tokio::sync::Semaphore;
use tower::ServiceExt;

pub const MODEL_RESPONSE: &str = r#"{
  "title": "Shakshuka",
  "description": "Eggs poached in spiced tomato sauce.",
  "prepTime": 10,
  "cookTime": 20,
  "servings": 2,
  "difficulty": "easy",
  "cuisine": "Middle Eastern",
  "ingredients": [{"name": "egg", "amount": 4, "unit": "pieces"}],
  "steps": [{"stepNumber": 1, "instruction": "Simmer the sauce, add eggs.", "estimatedTime": 20}],
  "tags": ["brunch"]
}"#;

pub fn recipe(id: &str, title: &str, difficulty: Difficulty, prep_time: u32, hour: u32) -> Recipe {
    let created_at = Utc
        .with_ymd_and_hms(2024, 3, 1, hour, 0, 0)
        .single()
        .unwrap_or_default();

    Recipe {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title} for tests"),
        image_url: None,
        prep_time,
        cook_time: 10,
        servings: 2,
        difficulty,
        cuisine: None,
        tags: vec![],
        ingredients: vec![],
        steps: vec![],
        nutrition_info: None,
        created_at,
        updated_at: created_at,
    }
}

pub fn seed() -> Vec<Recipe> {
    vec![
        recipe("r1", "Pancakes", Difficulty::Easy, 10, 9),
        recipe("r2", "Lasagna", Difficulty::Hard, 45, 8),
        recipe("r3", "Risotto", Difficulty::Medium, 15, 7),
    ]
}

/// Provider that holds every completion until the test releases it.
#[derive(Debug)]
pub struct GatedProvider {
    pub started: AtomicUsize,
    pub gate: Semaphore,
}

impl Default for GatedProvider {
    fn default() -> Self {
        Self {
            started: AtomicUsize::new(0),
            gate: Semaphore::new(0),
        }
    }
}

impl GatedProvider {
    pub fn release_one(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl LlmProvider for GatedProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
        permit.forget();
        Ok(MODEL_RESPONSE.to_owned())
    }

    fn provider_name(&self) -> &'static str {
        "gated"
    }

    fn model_name(&self) -> &str {
        "gated"
    }
}

#[derive(Clone)]
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub fn new(provider: FakeProvider) -> Self {
        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        let state = AppState {
            store: RecipeStore::new(seed()),
            generator: Arc::new(RecipeGenerator::new(provider)),
        };
        let router = larder::create_app(state.clone());

        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }
}

pub fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|recipes| {
            recipes
                .iter()
                .filter_map(|r| r["id"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
