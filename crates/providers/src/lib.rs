//! Clients for the external providers this application relays.
//!
//! - [`moralis`]: wallet NFT listings (EVM deep index + Solana gateway)
//! - [`prices`]: ERC-20 token prices via a direct REST call
//! - [`chat`]: hosted chat-completion model
//!
//! Each client is built once at start-up around a shared `reqwest::Client`
//! and handed to the route handlers through application state.

pub mod chat;
pub mod error;
pub mod moralis;
pub mod prices;

use std::time::Duration;

use meridian_common::config::AppConfig;

pub use chat::ChatClient;
pub use error::ProviderError;
pub use moralis::MoralisClient;
pub use prices::TokenPriceClient;

/// Build the pooled HTTP client shared by every provider client.
pub fn build_http_client(config: &AppConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .user_agent(concat!("meridian/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Turn a provider response into JSON, mapping non-success statuses to
/// [`ProviderError::Status`] with the raw body attached.
pub(crate) async fn read_json(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<serde_json::Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ProviderError::Decode {
            provider,
            message: e.to_string(),
        })
}
