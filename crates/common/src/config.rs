use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface the API server binds to (default: 0.0.0.0)
    pub api_host: String,

    /// Port the API server listens on (default: 3000)
    pub api_port: u16,

    /// Moralis API key, used by the NFT and token price routes
    pub moralis_api_key: Option<String>,

    /// OpenAI API key, used by the chat route
    pub openai_api_key: Option<String>,

    /// Moralis EVM deep-index base URL
    pub moralis_evm_base_url: String,

    /// Moralis Solana gateway base URL
    pub moralis_solana_base_url: String,

    /// Token price endpoint (called directly, no SDK)
    pub token_price_url: String,

    /// OpenAI API base URL
    pub openai_base_url: String,

    /// Timeout applied to every outbound provider request, in seconds (default: 30)
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Missing provider keys are not an error here: the routes that need them
    /// report a 500 at request time instead.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: lookup("API_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT must be a valid u16"))?,
            moralis_api_key: non_empty("MORALIS_API_KEY"),
            openai_api_key: non_empty("OPENAI_API_KEY"),
            moralis_evm_base_url: lookup("MORALIS_EVM_BASE_URL")
                .unwrap_or_else(|| "https://deep-index.moralis.io/api/v2.2".to_string()),
            moralis_solana_base_url: lookup("MORALIS_SOLANA_BASE_URL")
                .unwrap_or_else(|| "https://solana-gateway.moralis.io".to_string()),
            token_price_url: lookup("TOKEN_PRICE_URL").unwrap_or_else(|| {
                "https://deep-index.moralis.io/api/v2.2/erc20/prices".to_string()
            }),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a valid u64"))?,
        })
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
