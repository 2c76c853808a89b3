use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_generator::GeneratorError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Recipe generator not configured: {0}")]
    NotConfigured(String),
}

impl AppError {
    pub fn recipe_not_found(id: &str) -> Self {
        AppError::NotFound(format!("recipe '{id}'"))
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Validate(e) => AppError::Validation(e.to_string()),
            GeneratorError::NotConfigured(reason) => AppError::NotConfigured(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotConfigured(reason) => {
                tracing::error!("Recipe generator not configured: {reason}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
