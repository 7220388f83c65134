use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Quote request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Quote server error: {status} - {body}")]
    ServerStatus { status: u16, body: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuoteClientError>;
