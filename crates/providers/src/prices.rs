//! Token price client — plain REST call against the ERC-20 price endpoint.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use meridian_common::config::AppConfig;
use meridian_common::types::TokenPriceRequest;

use crate::error::ProviderError;
use crate::read_json;

const PROVIDER: &str = "Token price API";

#[derive(Debug, Serialize)]
struct PriceQueryBody<'a> {
    tokens: Vec<TokenRef<'a>>,
}

#[derive(Debug, Serialize)]
struct TokenRef<'a> {
    token_address: &'a str,
}

/// Client for the fixed token price endpoint.
#[derive(Debug, Clone)]
pub struct TokenPriceClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl TokenPriceClient {
    pub fn new(http: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http,
            url: config.token_price_url.clone(),
            api_key: config.moralis_api_key.clone(),
        }
    }

    /// Fetch prices for a batch of token addresses.
    ///
    /// A non-success answer is logged with its raw body and returned as
    /// [`ProviderError::Status`] so callers can relay the status code.
    pub async fn fetch_prices(&self, req: &TokenPriceRequest) -> Result<Value, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey("Moralis"))?;

        let body = PriceQueryBody {
            tokens: req
                .addresses
                .iter()
                .map(|a| TokenRef { token_address: a })
                .collect(),
        };

        debug!(count = req.addresses.len(), chain = %req.chain, "Fetching token prices");

        let response = self
            .http
            .post(&self.url)
            .header("x-api-key", api_key)
            .query(&[("chain", req.chain.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: PROVIDER,
                source,
            })?;

        let result = read_json(PROVIDER, response).await;
        if let Err(ProviderError::Status { status, body, .. }) = &result {
            error!(status, body = %body, "Token price provider returned an error");
        }
        result
    }
}
