//! Integration tests for API routes.
//!
//! Uses `tower::ServiceExt` to test Axum routes without a real HTTP server,
//! with upstream providers simulated by `httpmock`.
//!
//! ```bash
//! cargo test -p meridian-api --test integration
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use meridian_api::routes::create_router;
use meridian_api::state::AppState;
use meridian_common::config::AppConfig;

// ============================================================
// Helpers
// ============================================================

/// Config pointing every provider at the mock server.
fn test_config(server: &MockServer, with_keys: bool) -> AppConfig {
    let base = server.base_url();
    AppConfig {
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        moralis_api_key: with_keys.then(|| "moralis-test-key".to_string()),
        openai_api_key: with_keys.then(|| "openai-test-key".to_string()),
        moralis_evm_base_url: format!("{}/api/v2.2", base),
        moralis_solana_base_url: base.clone(),
        token_price_url: format!("{}/api/v2.2/erc20/prices", base),
        openai_base_url: format!("{}/v1", base),
        upstream_timeout_secs: 5,
    }
}

fn build_app(server: &MockServer, with_keys: bool) -> Router {
    let state = AppState::new(test_config(server, with_keys), reqwest::Client::new());
    create_router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

// ============================================================
// EVM NFTs
// ============================================================

#[tokio::test]
async fn test_evm_nfts_relays_provider_page() {
    let server = MockServer::start_async().await;
    let provider_page = json!({
        "status": "SYNCED",
        "page": 1,
        "page_size": 20,
        "cursor": "eyJhbGciOi",
        "result": [{"token_address": "0xbc4c", "token_id": "42", "amount": "1"}]
    });
    let page = provider_page.clone();
    let mock = server
        .mock_async(move |when, then| {
            when.method(GET)
                .path("/api/v2.2/0xd8da/nft")
                .query_param("chain", "eth")
                .query_param("limit", "20");
            then.status(200).json_body(page);
        })
        .await;

    let (status, body) = send(build_app(&server, true), get("/api/nfts?address=0xd8da")).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, provider_page);
}

#[tokio::test]
async fn test_evm_nfts_missing_address() {
    let server = MockServer::start_async().await;

    let (status, body) = send(build_app(&server, true), get("/api/nfts?chain=polygon")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wallet address is required");
}

#[tokio::test]
async fn test_evm_nfts_missing_key() {
    let server = MockServer::start_async().await;

    let (status, body) = send(build_app(&server, false), get("/api/nfts?address=0xd8da")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Moralis API key not configured");
}

#[tokio::test]
async fn test_evm_nfts_invalid_limit() {
    let server = MockServer::start_async().await;

    let (status, body) = send(
        build_app(&server, true),
        get("/api/nfts?address=0xd8da&limit=lots"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_evm_nfts_provider_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2.2/0xd8da/nft");
            then.status(400).json_body(json!({"message": "Invalid address provided"}));
        })
        .await;

    let (status, body) = send(build_app(&server, true), get("/api/nfts?address=0xd8da")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch NFTs");
    assert_eq!(body["details"], "Invalid address provided");
}

#[tokio::test]
async fn test_evm_nfts_address_stays_one_path_segment() {
    let server = MockServer::start_async().await;
    let prices = server
        .mock_async(|when, then| {
            when.path("/api/v2.2/erc20/prices");
            then.status(200).json_body(json!(["injected"]));
        })
        .await;

    let (_, body) = send(
        build_app(&server, true),
        get("/api/nfts?address=erc20%2Fprices%3F"),
    )
    .await;

    prices.assert_hits_async(0).await;
    assert_ne!(body, json!(["injected"]));
}

// ============================================================
// Solana NFTs
// ============================================================

#[tokio::test]
async fn test_solana_not_found_returns_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/mainnet/7xKXtg/nft");
            then.status(404).body("Not Found");
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        get("/api/solana-nfts?address=7xKXtg"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": []}));
}

#[tokio::test]
async fn test_solana_list_wrapped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/account/devnet/7xKXtg/nft")
                .header("x-api-key", "moralis-test-key");
            then.status(200)
                .json_body(json!([{"mint": "m1"}, {"mint": "m2"}]));
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        get("/api/solana-nfts?address=7xKXtg&network=devnet"),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"][1]["mint"], "m2");
}

#[tokio::test]
async fn test_solana_other_failures_surface() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/mainnet/7xKXtg/nft");
            then.status(500).body("upstream exploded");
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        get("/api/solana-nfts?address=7xKXtg"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Solana NFTs");
    assert!(body["details"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_solana_failure_mentioning_404_surfaces() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/mainnet/7xKXtg/nft");
            then.status(500).body("worker 404 crashed");
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        get("/api/solana-nfts?address=7xKXtg"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Solana NFTs");
}

#[tokio::test]
async fn test_solana_unreachable_provider_surfaces() {
    let server = MockServer::start_async().await;
    let mut config = test_config(&server, true);
    // Nothing listens on port 1, so the request never gets a status.
    config.moralis_solana_base_url = "http://127.0.0.1:1".to_string();
    let app = create_router(AppState::new(config, reqwest::Client::new()));

    let (status, body) = send(app, get("/api/solana-nfts?address=7x404Ktg")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Solana NFTs");
}

#[tokio::test]
async fn test_solana_missing_address_and_key() {
    let server = MockServer::start_async().await;

    let (status, _) = send(build_app(&server, true), get("/api/solana-nfts")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        build_app(&server, false),
        get("/api/solana-nfts?address=7xKXtg"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

// ============================================================
// Token prices
// ============================================================

#[tokio::test]
async fn test_token_prices_success() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v2.2/erc20/prices");
            then.status(200)
                .json_body(json!([{"tokenAddress": "0xa0b8", "usdPrice": 0.9998}]));
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        post_json("/api/token-prices", &json!({"addresses": ["0xa0b8"]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["tokenAddress"], "0xa0b8");
}

#[tokio::test]
async fn test_token_prices_passes_upstream_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v2.2/erc20/prices");
            then.status(429).json_body(json!({"message": "secret internal detail"}));
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        post_json("/api/token-prices", &json!({"addresses": ["0xa0b8"]})),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({"error": "Failed to fetch token prices"}));
}

#[tokio::test]
async fn test_token_prices_bad_body() {
    let server = MockServer::start_async().await;

    for body in [json!({}), json!({"addresses": "0xa0b8"})] {
        let (status, json) = send(
            build_app(&server, true),
            post_json("/api/token-prices", &body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    let malformed = Request::builder()
        .method("POST")
        .uri("/api/token-prices")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(build_app(&server, true), malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_token_prices_missing_key() {
    let server = MockServer::start_async().await;

    let (status, _) = send(
        build_app(&server, false),
        post_json("/api/token-prices", &json!({"addresses": ["0xa0b8"]})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================
// Chat
// ============================================================

#[tokio::test]
async fn test_chat_returns_first_choice() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({
                "id": "chatcmpl-1",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Floor prices are down."}}]
            }));
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        post_json(
            "/api/chat",
            &json!({"messages": [{"role": "user", "content": "How is the NFT market?"}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"content": "Floor prices are down."}));
}

#[tokio::test]
async fn test_chat_empty_content_placeholder() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        post_json("/api/chat", &json!({"messages": [{"role": "user", "content": "hi"}]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "No response generated");
}

#[tokio::test]
async fn test_chat_validation_and_key() {
    let server = MockServer::start_async().await;

    let (status, body) = send(
        build_app(&server, true),
        post_json("/api/chat", &json!({"messages": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        build_app(&server, false),
        post_json("/api/chat", &json!({"messages": [{"role": "user", "content": "hi"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_chat_provider_error_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429)
                .json_body(json!({"error": {"message": "You exceeded your current quota"}}));
        })
        .await;

    let (status, body) = send(
        build_app(&server, true),
        post_json("/api/chat", &json!({"messages": [{"role": "user", "content": "hi"}]})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "You exceeded your current quota");
}

// ============================================================
// Diagnostics & pages
// ============================================================

#[tokio::test]
async fn test_api_test_route() {
    let server = MockServer::start_async().await;

    let (status, body) = send(build_app(&server, false), get("/api/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API is working");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_fallback_echoes_path_and_method() {
    let server = MockServer::start_async().await;

    let (status, body) = send(build_app(&server, false), get("/api/does/not/exist")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path"], "/api/does/not/exist");
    assert_eq!(body["method"], "GET");
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());

    let (status, body) = send(
        build_app(&server, false),
        post_json("/api/unknown", &json!({"anything": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "POST");
}

#[tokio::test]
async fn test_pages_render() {
    let server = MockServer::start_async().await;

    for uri in ["/", "/faq", "/test"] {
        let response = build_app(&server, false).oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
    }
}
