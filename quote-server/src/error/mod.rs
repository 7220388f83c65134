use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteServerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream API error: {status} - {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Upstream fetch timed out after {0:?}")]
    FetchTimeout(Duration),

    #[error("Invalid quote data: {message}")]
    InvalidQuote { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database write timed out after {0:?}")]
    PersistTimeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuoteServerError>;
