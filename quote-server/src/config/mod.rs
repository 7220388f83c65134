use crate::error::{QuoteServerError, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub upstream_url: String,
    pub currency_pair: String,
    pub fetch_timeout: Duration,
    pub persist_timeout: Duration,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            env::var("QUOTE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let upstream_url = env::var("UPSTREAM_URL").unwrap_or_else(|_| {
            "https://economia.awesomeapi.com.br/json/last/USD-BRL".to_string()
        });

        let currency_pair =
            env::var("CURRENCY_PAIR").unwrap_or_else(|_| "USDBRL".to_string());

        let fetch_timeout_ms = env::var("FETCH_TIMEOUT_MS")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u64>()
            .map_err(|_| QuoteServerError::Config("Invalid FETCH_TIMEOUT_MS".to_string()))?;

        let persist_timeout_ms = env::var("PERSIST_TIMEOUT_MS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| QuoteServerError::Config("Invalid PERSIST_TIMEOUT_MS".to_string()))?;

        let sqlite_path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "quotes.db".to_string());

        // Format as SQLite connection string, creating the file if needed
        let database_url = format!("sqlite:{}?mode=rwc", sqlite_path);

        let max_connections = env::var("MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .map_err(|_| QuoteServerError::Config("Invalid MAX_CONNECTIONS".to_string()))?;

        Ok(Self {
            bind_addr,
            upstream_url,
            currency_pair,
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            persist_timeout: Duration::from_millis(persist_timeout_ms),
            database_url,
            max_connections,
        })
    }
}
