use crate::error::{QuoteServerError, Result};
use crate::models::{PairQuote, Quote};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the upstream exchange-rate API.
///
/// Every fetch is bounded by an explicit deadline: the call returns within
/// the deadline or reports a timeout, never half-completes. On expiry the
/// in-flight request is dropped; there is no guarantee the upstream call
/// itself is interrupted, only that this chain stops waiting on it.
#[derive(Clone)]
pub struct ExchangeRateClient {
    client: Client,
    url: String,
    pair: String,
}

impl ExchangeRateClient {
    pub fn new(url: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            pair: pair.into(),
        }
    }

    pub async fn fetch_quote(&self, deadline: Duration) -> Result<Quote> {
        match tokio::time::timeout(deadline, self.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(QuoteServerError::FetchTimeout(deadline)),
        }
    }

    async fn fetch(&self) -> Result<Quote> {
        debug!("Fetching {} quote from {}", self.pair, self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(QuoteServerError::UpstreamStatus {
                status: response.status().as_u16(),
                message: format!("upstream returned status: {}", response.status()),
            });
        }

        let text = response.text().await?;
        let mut payload: HashMap<String, PairQuote> = match serde_json::from_str(&text) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Unexpected upstream response: {}", text);
                return Err(QuoteServerError::Json(e));
            }
        };

        let pair_quote = payload.remove(&self.pair).ok_or_else(|| {
            QuoteServerError::InvalidQuote {
                message: format!("pair {} missing from upstream payload", self.pair),
            }
        })?;

        if pair_quote.bid.is_empty() {
            return Err(QuoteServerError::InvalidQuote {
                message: format!("empty bid for pair {}", self.pair),
            });
        }

        Ok(Quote {
            bid: pair_quote.bid,
        })
    }
}
