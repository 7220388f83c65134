use crate::models::{ApiResponse, Quote, QuoteRecord};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("Quote server is healthy".to_string()))
}

/// GET /quote: fetch the current quote from the upstream API, persist it,
/// then echo the bid to the caller.
///
/// The contract is "persisted and returned": a persistence failure discards
/// the already-fetched quote and reports an error instead.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<Quote>, (StatusCode, String)> {
    let quote = match state.exchange.fetch_quote(state.config.fetch_timeout).await {
        Ok(quote) => quote,
        Err(e) => {
            warn!("Failed to fetch quote from upstream: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch quote: {}", e),
            ));
        }
    };

    match state.store.insert(&quote, state.config.persist_timeout).await {
        Ok(record) => {
            info!("Stored quote {}: bid={}", record.id, record.quote.bid);
            Ok(Json(quote))
        }
        Err(e) => {
            warn!("Failed to persist quote: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to persist quote: {}", e),
            ))
        }
    }
}

pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<ApiResponse<Vec<QuoteRecord>>>, (StatusCode, String)> {
    match state.store.list_recent(100).await {
        Ok(records) => Ok(Json(ApiResponse::success(records))),
        Err(e) => {
            warn!("Failed to list quotes: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list quotes: {}", e),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ExchangeRateClient;
    use crate::config::Config;
    use crate::db::QuoteStore;
    use crate::error::{QuoteServerError, Result};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Store double that records inserts and completes immediately.
    #[derive(Default)]
    struct CountingStore {
        inserts: AtomicUsize,
    }

    #[async_trait]
    impl QuoteStore for CountingStore {
        async fn insert(&self, quote: &Quote, _deadline: Duration) -> Result<QuoteRecord> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(QuoteRecord {
                id: "test".to_string(),
                quote: quote.clone(),
                created_at: Utc::now(),
            })
        }

        async fn list_recent(&self, _limit: i64) -> Result<Vec<QuoteRecord>> {
            Ok(Vec::new())
        }
    }

    /// Store double whose inserts take longer than any reasonable write
    /// budget, to exercise the persistence deadline.
    struct SlowStore {
        delay: Duration,
    }

    #[async_trait]
    impl QuoteStore for SlowStore {
        async fn insert(&self, quote: &Quote, deadline: Duration) -> Result<QuoteRecord> {
            match tokio::time::timeout(deadline, tokio::time::sleep(self.delay)).await {
                Ok(_) => Ok(QuoteRecord {
                    id: "test".to_string(),
                    quote: quote.clone(),
                    created_at: Utc::now(),
                }),
                Err(_) => Err(QuoteServerError::PersistTimeout(deadline)),
            }
        }

        async fn list_recent(&self, _limit: i64) -> Result<Vec<QuoteRecord>> {
            Ok(Vec::new())
        }
    }

    fn test_config(upstream_url: &str, fetch_ms: u64, persist_ms: u64) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            upstream_url: upstream_url.to_string(),
            currency_pair: "USDBRL".to_string(),
            fetch_timeout: Duration::from_millis(fetch_ms),
            persist_timeout: Duration::from_millis(persist_ms),
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn state_with(config: Config, store: Arc<dyn QuoteStore>) -> Arc<AppState> {
        let exchange =
            ExchangeRateClient::new(&config.upstream_url, &config.currency_pair);
        Arc::new(AppState {
            exchange,
            store,
            config,
        })
    }

    async fn mock_upstream(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn successful_fetch_persists_and_echoes_bid() {
        let upstream = mock_upstream(
            ResponseTemplate::new(200).set_body_json(json!({"USDBRL": {"bid": "5.25"}})),
        )
        .await;
        let store = Arc::new(CountingStore::default());
        let state = state_with(test_config(&upstream.uri(), 1000, 1000), store.clone());

        let Json(quote) = get_quote(State(state)).await.unwrap();

        assert_eq!(quote.bid, "5.25");
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upstream_timeout_skips_persistence() {
        let upstream = mock_upstream(
            ResponseTemplate::new(200)
                .set_body_json(json!({"USDBRL": {"bid": "5.25"}}))
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let store = Arc::new(CountingStore::default());
        let state = state_with(test_config(&upstream.uri(), 20, 1000), store.clone());

        let (status, _body) = get_quote(State(state)).await.unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_skips_persistence() {
        let upstream = mock_upstream(ResponseTemplate::new(500)).await;
        let store = Arc::new(CountingStore::default());
        let state = state_with(test_config(&upstream.uri(), 1000, 1000), store.clone());

        let (status, body) = get_quote(State(state)).await.unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Failed to fetch quote"));
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn persist_timeout_discards_fetched_quote() {
        let upstream = mock_upstream(
            ResponseTemplate::new(200).set_body_json(json!({"USDBRL": {"bid": "5.25"}})),
        )
        .await;
        let store = Arc::new(SlowStore {
            delay: Duration::from_millis(200),
        });
        let state = state_with(test_config(&upstream.uri(), 1000, 5), store);

        let (status, body) = get_quote(State(state)).await.unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Failed to persist quote"));
        assert!(!body.contains("5.25"));
    }

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let Json(response) = health_check().await;

        assert!(response.success);
        assert!(response.data.is_some());
    }
}
