use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currency quote as served to callers. The bid is the quoted purchase
/// price, kept as the upstream API's original string so its formatting
/// survives the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: String,
}

/// Persisted quote: the domain value plus storage-assigned metadata.
/// The id and timestamp belong to the storage layer and are never
/// consulted when answering a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: String,
    #[serde(flatten)]
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}

/// Per-pair entry in the upstream payload. The upstream response is a map
/// with one such entry per currency pair.
#[derive(Debug, Deserialize)]
pub struct PairQuote {
    pub bid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}
