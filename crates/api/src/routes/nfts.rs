//! Wallet NFT proxy routes (EVM and Solana).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use meridian_common::error::AppError;
use meridian_common::types::{EvmNftQuery, SolanaNftQuery};

use super::upstream_error;
use crate::state::AppState;

const MISSING_ADDRESS: &str = "Wallet address is required";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/nfts", get(evm_wallet_nfts))
        .route("/api/solana-nfts", get(solana_wallet_nfts))
}

fn query_error(rejection: QueryRejection) -> AppError {
    AppError::Validation(format!("Invalid query parameters: {}", rejection.body_text()))
}

/// GET /api/nfts — One page of NFTs held by an EVM wallet, relayed as-is.
async fn evm_wallet_nfts(
    State(state): State<AppState>,
    query: Result<Query<EvmNftQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query.map_err(query_error)?;
    let req = query
        .into_request()
        .ok_or_else(|| AppError::Validation(MISSING_ADDRESS.to_string()))?;

    match state.moralis.wallet_nfts(&req).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!(address = %req.address, chain = %req.chain, error = %e, "EVM NFT lookup failed");
            Err(upstream_error(e, "Failed to fetch NFTs"))
        }
    }
}

/// GET /api/solana-nfts — NFTs held by a Solana wallet.
///
/// A not-found answer from the provider is reported as an empty result.
async fn solana_wallet_nfts(
    State(state): State<AppState>,
    query: Result<Query<SolanaNftQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query.map_err(query_error)?;
    let req = query
        .into_request()
        .ok_or_else(|| AppError::Validation(MISSING_ADDRESS.to_string()))?;

    match state.moralis.solana_nfts(&req).await {
        Ok(body) => Ok(Json(shape_solana_result(body, req.limit))),
        Err(e) if e.is_not_found() => {
            tracing::warn!(address = %req.address, network = %req.network, "No Solana NFTs found, returning empty result");
            Ok(Json(json!({ "result": [] })))
        }
        Err(e) => {
            tracing::error!(address = %req.address, network = %req.network, error = %e, "Solana NFT lookup failed");
            Err(upstream_error(e, "Failed to fetch Solana NFTs"))
        }
    }
}

/// Bare arrays are wrapped as `{"result": [...]}` and capped at `limit`; objects pass through.
fn shape_solana_result(body: Value, limit: u32) -> Value {
    match body {
        Value::Array(mut items) => {
            items.truncate(limit as usize);
            json!({ "result": items })
        }
        other => other,
    }
}
