//! Token price proxy route.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use meridian_common::error::AppError;
use meridian_common::types::{DEFAULT_EVM_CHAIN, TokenPriceRequest};
use meridian_providers::ProviderError;

use crate::state::AppState;

const PRICE_FAILURE: &str = "Failed to fetch token prices";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/token-prices", post(token_prices))
}

/// POST /api/token-prices — Prices for a batch of token addresses.
///
/// Unlike the other proxies, an upstream error status is relayed unchanged.
async fn token_prices(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) =
        body.map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))?;
    let req = parse_price_request(&body)?;

    match state.prices.fetch_prices(&req).await {
        Ok(prices) => Ok(Json(prices)),
        Err(e @ ProviderError::MissingApiKey(_)) => Err(AppError::Config(e.to_string())),
        Err(ProviderError::Status { status, .. }) => Err(AppError::UpstreamStatus {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: PRICE_FAILURE.to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "Token price lookup failed");
            Err(AppError::Upstream {
                message: PRICE_FAILURE.to_string(),
                details: None,
            })
        }
    }
}

fn parse_price_request(body: &Value) -> Result<TokenPriceRequest, AppError> {
    let addresses = match body.get("addresses") {
        None | Some(Value::Null) => {
            return Err(AppError::Validation("addresses is required".to_string()));
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(AppError::Validation(
                "addresses must be an array".to_string(),
            ));
        }
    };

    let addresses = addresses
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AppError::Validation("addresses must contain only strings".to_string()))?;

    let chain = body
        .get("chain")
        .and_then(Value::as_str)
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_EVM_CHAIN)
        .to_string();

    Ok(TokenPriceRequest { addresses, chain })
}
