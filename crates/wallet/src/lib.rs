//! Wallet provider wiring for the client application.
//!
//! - [`config`]: cluster, RPC endpoint and wallet list the provider starts with
//! - [`adapter`]: what the wallet-adapter must expose
//! - [`store`]: observable application-level wallet state
//! - [`sync`]: bridge that mirrors adapter state into the store

pub mod adapter;
pub mod config;
pub mod store;
pub mod sync;

pub use adapter::{LocalWalletAdapter, WalletAdapter, WalletSnapshot};
pub use config::{Cluster, SupportedWallet, WalletProviderConfig};
pub use store::WalletStore;
pub use sync::WalletSync;
