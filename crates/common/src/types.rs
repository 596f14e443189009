use serde::{Deserialize, Serialize};

/// Default EVM chain for NFT lookups.
pub const DEFAULT_EVM_CHAIN: &str = "eth";

/// Default page size for EVM NFT lookups.
pub const DEFAULT_EVM_LIMIT: u32 = 20;

/// Default Solana network for NFT lookups.
pub const DEFAULT_SOLANA_NETWORK: &str = "mainnet";

/// Default page size for Solana NFT lookups.
pub const DEFAULT_SOLANA_LIMIT: u32 = 100;

/// Query string accepted by the EVM NFT route.
///
/// Every field is optional at the extractor level so that a missing
/// address can be reported with the JSON error envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvmNftQuery {
    pub address: Option<String>,
    pub chain: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

/// Query string accepted by the Solana NFT route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolanaNftQuery {
    pub address: Option<String>,
    pub network: Option<String>,
    pub limit: Option<u32>,
}

/// Validated EVM NFT lookup, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmNftRequest {
    pub address: String,
    pub chain: String,
    pub limit: u32,
    pub cursor: Option<String>,
}

/// Validated Solana NFT lookup, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolanaNftRequest {
    pub address: String,
    pub network: String,
    pub limit: u32,
}

/// Validated token price lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPriceRequest {
    pub addresses: Vec<String>,
    pub chain: String,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Body returned by the chat route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EvmNftQuery {
    /// Apply defaults. Returns `None` when the address is missing or blank.
    pub fn into_request(self) -> Option<EvmNftRequest> {
        let address = non_blank(self.address)?;
        Some(EvmNftRequest {
            address,
            chain: non_blank(self.chain).unwrap_or_else(|| DEFAULT_EVM_CHAIN.to_string()),
            limit: self.limit.unwrap_or(DEFAULT_EVM_LIMIT),
            cursor: non_blank(self.cursor),
        })
    }
}

impl SolanaNftQuery {
    /// Apply defaults. Returns `None` when the address is missing or blank.
    pub fn into_request(self) -> Option<SolanaNftRequest> {
        let address = non_blank(self.address)?;
        Some(SolanaNftRequest {
            address,
            network: non_blank(self.network)
                .unwrap_or_else(|| DEFAULT_SOLANA_NETWORK.to_string()),
            limit: self.limit.unwrap_or(DEFAULT_SOLANA_LIMIT),
        })
    }
}
