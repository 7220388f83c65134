use crate::error::{QuoteClientError, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: String,
    pub request_timeout: Duration,
    pub output_path: String,
    pub output_label: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let server_url =
            env::var("QUOTE_SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let request_timeout_ms = env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<u64>()
            .map_err(|_| QuoteClientError::Config("Invalid REQUEST_TIMEOUT_MS".to_string()))?;

        let output_path = env::var("OUTPUT_PATH").unwrap_or_else(|_| "cotacao.txt".to_string());

        let output_label = env::var("OUTPUT_LABEL").unwrap_or_else(|_| "Dólar".to_string());

        Ok(Self {
            server_url,
            request_timeout: Duration::from_millis(request_timeout_ms),
            output_path,
            output_label,
        })
    }
}
