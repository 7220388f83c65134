use crate::error::{QuoteClientError, Result};
use crate::models::Quote;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the quote server.
///
/// The deadline handed to `fetch_quote` bounds the full round trip, body
/// included; on expiry the in-flight request is dropped and a timeout is
/// reported.
pub struct QuoteServerClient {
    client: Client,
    base_url: String,
}

impl QuoteServerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_quote(&self, deadline: Duration) -> Result<Quote> {
        match tokio::time::timeout(deadline, self.request()).await {
            Ok(result) => result,
            Err(_) => Err(QuoteClientError::Timeout(deadline)),
        }
    }

    async fn request(&self) -> Result<Quote> {
        let url = format!("{}/quote", self.base_url);

        debug!("Requesting quote from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QuoteClientError::ServerStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        match serde_json::from_str::<Quote>(&text) {
            Ok(quote) => Ok(quote),
            Err(e) => {
                error!("Unexpected server response: {}", text);
                Err(QuoteClientError::Json(e))
            }
        }
    }
}
