pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use crate::api::ExchangeRateClient;
use crate::config::Config;
use crate::db::QuoteStore;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub exchange: ExchangeRateClient,
    pub store: Arc<dyn QuoteStore>,
    pub config: Config,
}

/// Route table for the service. Built once at startup, immutable
/// thereafter, and handed to `axum::serve`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quote", get(handlers::get_quote))
        .route("/quotes", get(handlers::list_quotes))
        .route("/health", get(handlers::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
