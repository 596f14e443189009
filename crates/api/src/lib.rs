//! Meridian web server: marketing pages plus stateless proxy routes.
//!
//! Endpoints:
//! - GET  /, /faq, /test — server-rendered pages
//! - GET  /api/nfts — EVM wallet NFTs
//! - GET  /api/solana-nfts — Solana wallet NFTs
//! - POST /api/token-prices — token prices
//! - POST /api/chat — chat completion
//! - GET|POST /api/test, /api/{*path} — diagnostics

pub mod routes;
pub mod state;
