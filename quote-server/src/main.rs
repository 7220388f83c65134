use dotenv::dotenv;
use quote_server::api::ExchangeRateClient;
use quote_server::config::Config;
use quote_server::db::SqliteStore;
use quote_server::error::Result;
use quote_server::{app, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;

    let store = SqliteStore::connect(&config.database_url, config.max_connections).await?;
    store.init_schema().await?;

    let exchange = ExchangeRateClient::new(&config.upstream_url, &config.currency_pair);

    let state = Arc::new(AppState {
        exchange,
        store: Arc::new(store),
        config: config.clone(),
    });

    let router = app(state);

    info!("Quote server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
