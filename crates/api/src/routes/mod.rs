pub mod chat;
pub mod diagnostics;
pub mod nfts;
pub mod pages;
pub mod prices;

use axum::Router;

use meridian_common::error::AppError;
use meridian_providers::ProviderError;

use crate::state::AppState;

/// Build the complete router with all pages and API routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(nfts::router())
        .merge(prices::router())
        .merge(chat::router())
        .merge(diagnostics::router())
        .with_state(state)
}

/// Map a provider failure onto a 500 envelope with `message` and the provider's detail.
///
/// A missing credential keeps its own fixed message.
pub(crate) fn upstream_error(err: ProviderError, message: &str) -> AppError {
    match err {
        e @ ProviderError::MissingApiKey(_) => AppError::Config(e.to_string()),
        other => AppError::upstream(message, other.detail()),
    }
}
