pub mod api_types;
pub mod config;
pub mod error;
pub mod evocon;
pub mod routes;
pub mod templates;

#[cfg(test)]
pub mod test_helpers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use config::RelayConfig;
pub use evocon::EvoconClient;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub evocon: EvoconClient,
}

/// Build the router against the production Evocon endpoint.
pub fn build_router(config: RelayConfig) -> Router {
    let evocon = EvoconClient::new(&config);
    build_router_with_client(config, evocon)
}

/// Build the router against an explicit client (tests point it at a
/// mock upstream).
pub fn build_router_with_client(config: RelayConfig, evocon: EvoconClient) -> Router {
    let state = AppState { config, evocon };
    Router::new()
        .route("/", get(routes::label_page))
        .route("/health", get(routes::health))
        .route("/submit", post(routes::submit))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(16 * 1024)) // 16 KB
        .layer(TraceLayer::new_for_http())
}
