//! Chat completion proxy route.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use meridian_common::error::AppError;
use meridian_common::types::{ChatMessage, ChatReply};
use meridian_providers::ProviderError;

use crate::state::AppState;

const CHAT_FAILURE: &str = "Failed to get chat completion";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat_completion))
}

/// POST /api/chat — Relay a conversation and return the model's reply text.
async fn chat_completion(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(body) =
        body.map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))?;
    let messages = parse_messages(body)?;

    match state.chat.complete(&messages).await {
        Ok(content) => Ok(Json(ChatReply { content })),
        Err(e @ ProviderError::MissingApiKey(_)) => Err(AppError::Config(e.to_string())),
        Err(e) => {
            tracing::error!(error = %e, "Chat completion failed");
            Err(AppError::Upstream {
                message: e
                    .provider_message()
                    .unwrap_or_else(|| CHAT_FAILURE.to_string()),
                details: None,
            })
        }
    }
}

fn parse_messages(mut body: Value) -> Result<Vec<ChatMessage>, AppError> {
    let messages = match body.get_mut("messages").map(Value::take) {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            return Err(AppError::Validation(
                "messages must be a non-empty array".to_string(),
            ));
        }
    };

    serde_json::from_value(Value::Array(messages)).map_err(|_| {
        AppError::Validation(
            "each message must have a role (system, user or assistant) and text content"
                .to_string(),
        )
    })
}
