use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::inference::InferenceError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Origin not allowed")]
    OriginRejected,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream auth failure: {0}")]
    UpstreamAuth(String),

    #[error("Upstream rate limited")]
    UpstreamRateLimited,

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Timeout(_) => AppError::UpstreamTimeout(err.to_string()),
            InferenceError::Auth(_) => AppError::UpstreamAuth(err.to_string()),
            InferenceError::RateLimited => AppError::UpstreamRateLimited,
            InferenceError::Unavailable(_) => AppError::UpstreamUnavailable(err.to_string()),
            InferenceError::Http(_) | InferenceError::Api { .. } | InferenceError::Empty => {
                AppError::Internal(anyhow::anyhow!(err))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::OriginRejected => {
                (StatusCode::FORBIDDEN, "Origin not allowed".to_string())
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::UpstreamTimeout(msg) => {
                tracing::error!("Upstream timeout: {msg}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "AI model is warming up. Please try again in a few seconds.".to_string(),
                )
            }
            AppError::UpstreamAuth(msg) => {
                tracing::error!("Upstream auth failure: {msg}");
                (
                    StatusCode::UNAUTHORIZED,
                    "API authentication failed. Please check server configuration.".to_string(),
                )
            }
            AppError::UpstreamRateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests. Please wait a moment.".to_string(),
            ),
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI model unavailable. Please try again later.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server error: {e}"),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
