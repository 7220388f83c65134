use dotenv::dotenv;
use quote_client::config::Config;
use quote_client::error::Result;
use tracing::error;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    if let Err(e) = run().await {
        error!("Quote run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    quote_client::run(&config).await
}
