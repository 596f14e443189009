//! Diagnostic endpoints: a static liveness route and the `/api` catch-all.

use axum::http::{Method, Uri};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/test", get(api_test).post(api_test))
        .route("/api/{*path}", get(api_fallback).post(api_fallback))
}

async fn api_test() -> Json<Value> {
    Json(json!({
        "message": "API is working",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Any unmatched GET/POST under `/api` echoes what was asked for.
async fn api_fallback(method: Method, uri: Uri) -> Json<Value> {
    Json(json!({
        "message": "Fallback API route",
        "path": uri.path(),
        "method": method.as_str(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
