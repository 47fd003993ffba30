#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Validation errors abort an analysis before any scoring runs; no partial
/// result is ever produced. Advisor errors never affect the engine.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid resume: {0}")]
    InvalidResume(String),

    #[error("Invalid job description: {0}")]
    InvalidJobDescription(String),

    #[error("Advisor unavailable: {0}")]
    LlmUnavailable(String),

    #[error("Advisor request failed: {0}")]
    LlmRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidResume(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RESUME",
                msg.clone(),
            ),
            AppError::InvalidJobDescription(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_JOB_DESCRIPTION",
                msg.clone(),
            ),
            AppError::LlmUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "LLM_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::LlmRequest(msg) => {
                tracing::error!("Advisor error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_REQUEST_FAILED",
                    "The AI advisor could not complete the request".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
