use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Common error types used across the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider failure normalized to a 500, with best-effort detail.
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        details: Option<String>,
    },

    /// Provider failure that keeps the provider's HTTP status.
    #[error("Upstream error ({status}): {message}")]
    UpstreamStatus { status: StatusCode, message: String },
}

impl AppError {
    pub fn upstream(message: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::Upstream {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamStatus { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Upstream {
                message,
                details: Some(details),
            } => json!({ "error": message, "details": details }),
            AppError::Upstream {
                message,
                details: None,
            } => json!({ "error": message }),
            AppError::UpstreamStatus { message, .. } => json!({ "error": message }),
            AppError::Validation(msg) | AppError::Config(msg) => json!({ "error": msg }),
        };

        (status, Json(body)).into_response()
    }
}
