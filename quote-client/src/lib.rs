pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

use crate::api::QuoteServerClient;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// One client run: request the current quote from the server, then record
/// it in the output file. Any failure aborts before the file is touched.
pub async fn run(config: &Config) -> Result<()> {
    let client = QuoteServerClient::new(&config.server_url);

    let quote = client.fetch_quote(config.request_timeout).await?;

    output::write_quote_file(Path::new(&config.output_path), &config.output_label, &quote)?;

    Ok(())
}
