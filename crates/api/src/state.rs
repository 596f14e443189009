//! Shared application state for the Axum API server.

use std::sync::Arc;

use meridian_common::config::AppConfig;
use meridian_providers::{ChatClient, MoralisClient, TokenPriceClient, build_http_client};

/// Application state shared across all route handlers via Axum `State`.
///
/// Provider clients are built once at start-up and only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub moralis: Arc<MoralisClient>,
    pub prices: Arc<TokenPriceClient>,
    pub chat: Arc<ChatClient>,
}

impl AppState {
    pub fn new(config: AppConfig, http: reqwest::Client) -> Self {
        Self {
            moralis: Arc::new(MoralisClient::new(http.clone(), &config)),
            prices: Arc::new(TokenPriceClient::new(http.clone(), &config)),
            chat: Arc::new(ChatClient::new(http, &config)),
            config: Arc::new(config),
        }
    }

    /// Build state with a fresh pooled HTTP client configured from `config`.
    pub fn from_config(config: AppConfig) -> reqwest::Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self::new(config, http))
    }
}
