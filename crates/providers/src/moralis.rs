//! Moralis NFT client — wallet NFT listings for EVM chains and Solana.

use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use meridian_common::config::AppConfig;
use meridian_common::types::{EvmNftRequest, SolanaNftRequest};

use crate::error::ProviderError;
use crate::read_json;

const PROVIDER: &str = "Moralis";

/// Client for the Moralis EVM and Solana APIs.
#[derive(Debug, Clone)]
pub struct MoralisClient {
    http: reqwest::Client,
    evm_base_url: String,
    solana_base_url: String,
    api_key: Option<String>,
}

impl MoralisClient {
    pub fn new(http: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http,
            evm_base_url: config.moralis_evm_base_url.trim_end_matches('/').to_string(),
            solana_base_url: config
                .moralis_solana_base_url
                .trim_end_matches('/')
                .to_string(),
            api_key: config.moralis_api_key.clone(),
        }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(PROVIDER))
    }

    /// `base` with each of `segments` appended as one escaped path segment.
    ///
    /// Caller values never add segments or a query of their own.
    fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ProviderError> {
        let invalid = |message: String| ProviderError::InvalidUrl {
            provider: PROVIDER,
            message,
        };
        let mut url = Url::parse(base).map_err(|e| invalid(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("{base} cannot carry a path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch one page of NFTs owned by an EVM wallet.
    ///
    /// The provider's paginated body (`cursor`, `page`, `result`, ...) is returned untouched.
    pub async fn wallet_nfts(&self, req: &EvmNftRequest) -> Result<Value, ProviderError> {
        let api_key = self.api_key()?;
        let url = Self::endpoint(&self.evm_base_url, &[req.address.as_str(), "nft"])?;

        let mut query: Vec<(&str, String)> = vec![
            ("chain", req.chain.clone()),
            ("limit", req.limit.to_string()),
            ("format", "decimal".to_string()),
        ];
        if let Some(cursor) = &req.cursor {
            query.push(("cursor", cursor.clone()));
        }

        debug!(address = %req.address, chain = %req.chain, limit = req.limit, "Fetching EVM wallet NFTs");

        let response = self
            .http
            .get(url)
            .header("x-api-key", api_key)
            .query(&query)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: PROVIDER,
                source,
            })?;

        read_json(PROVIDER, response).await
    }

    /// Fetch NFTs owned by a Solana wallet.
    pub async fn solana_nfts(&self, req: &SolanaNftRequest) -> Result<Value, ProviderError> {
        let api_key = self.api_key()?;
        let url = Self::endpoint(
            &self.solana_base_url,
            &["account", req.network.as_str(), req.address.as_str(), "nft"],
        )?;

        debug!(address = %req.address, network = %req.network, "Fetching Solana wallet NFTs");

        let response = self
            .http
            .get(url)
            .header("x-api-key", api_key)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: PROVIDER,
                source,
            })?;

        read_json(PROVIDER, response).await
    }
}
