//! Application error type mapping the pipeline taxonomy to HTTP status
//! codes and the fixed JSON error shapes.
//!
//! Every error class becomes structured JSON: validation faults are 400,
//! configuration and upstream faults are 500. Diagnostic detail (the raw
//! upstream body or a stringified fault) rides along in `details` for
//! operator debugging without altering status semantics.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use reverie_types::error::{GeneratorError, PromptError, ReflectError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bad or missing inbound data -- client fault.
    Validation(PromptError),
    /// Generator call failed, was unconfigured, or returned unusable data.
    Generator(GeneratorError),
}

impl From<PromptError> for AppError {
    fn from(e: PromptError) -> Self {
        AppError::Validation(e)
    }
}

impl From<GeneratorError> for AppError {
    fn from(e: GeneratorError) -> Self {
        AppError::Generator(e)
    }
}

impl From<ReflectError> for AppError {
    fn from(e: ReflectError) -> Self {
        match e {
            ReflectError::Prompt(e) => AppError::Validation(e),
            ReflectError::Generator(e) => AppError::Generator(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(PromptError::DreamRequired) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Dream text is required (string)." }),
            ),
            AppError::Generator(GeneratorError::MissingCredential { name }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": format!("Missing {name} in environment configuration.") }),
            ),
            AppError::Generator(GeneratorError::Api { body }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "OpenAI API error", "details": body }),
            ),
            AppError::Generator(e @ GeneratorError::Malformed(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "OpenAI API error", "details": e.to_string() }),
            ),
            AppError::Generator(GeneratorError::Transport(detail)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Function crashed", "details": detail }),
            ),
        };

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
