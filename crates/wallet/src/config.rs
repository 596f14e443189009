//! Wallet provider configuration: which cluster to talk to, which wallets to offer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown Solana cluster '{0}'. Valid clusters: mainnet-beta, devnet, testnet")]
    UnknownCluster(String),

    #[error("WALLET_AUTO_CONNECT must be true or false, got '{0}'")]
    InvalidAutoConnect(String),
}

/// Solana cluster the wallet adapter connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    #[default]
    Devnet,
    Testnet,
}

impl Cluster {
    /// Public RPC endpoint for the cluster.
    pub fn rpc_endpoint(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
        }
    }
}

impl std::str::FromStr for Cluster {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(ConfigError::UnknownCluster(other.to_string())),
        }
    }
}

/// Wallets offered in the connect dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedWallet {
    Phantom,
    Solflare,
}

/// Configuration the wallet provider is initialised with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletProviderConfig {
    pub cluster: Cluster,
    /// Explicit RPC endpoint; falls back to the cluster's public endpoint.
    pub endpoint: Option<String>,
    pub wallets: Vec<SupportedWallet>,
    pub auto_connect: bool,
}

impl Default for WalletProviderConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            endpoint: None,
            wallets: vec![SupportedWallet::Phantom, SupportedWallet::Solflare],
            auto_connect: true,
        }
    }
}

impl WalletProviderConfig {
    /// Load from `SOLANA_CLUSTER`, `SOLANA_RPC_URL` and `WALLET_AUTO_CONNECT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(cluster) = lookup("SOLANA_CLUSTER") {
            config.cluster = cluster.parse()?;
        }
        config.endpoint = lookup("SOLANA_RPC_URL").filter(|v| !v.trim().is_empty());
        if let Some(flag) = lookup("WALLET_AUTO_CONNECT") {
            config.auto_connect = match flag.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidAutoConnect(flag)),
            };
        }

        Ok(config)
    }

    /// RPC endpoint the connection should use.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.cluster.rpc_endpoint())
    }
}
