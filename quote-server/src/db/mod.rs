use crate::error::{QuoteServerError, Result};
use crate::models::{Quote, QuoteRecord};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Storage seam for persisted quotes.
///
/// `insert` must complete within the given deadline or report a timeout; a
/// timed-out insert counts as failed even if the write later lands.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn insert(&self, quote: &Quote, deadline: Duration) -> Result<QuoteRecord>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<QuoteRecord>>;
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id TEXT PRIMARY KEY,
                bid TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_created_at ON quotes(created_at)")
            .execute(&self.pool)
            .await?;

        info!("Database schema initialized");
        Ok(())
    }

    async fn insert_record(&self, record: &QuoteRecord) -> Result<()> {
        sqlx::query("INSERT INTO quotes (id, bid, created_at) VALUES (?, ?, ?)")
            .bind(&record.id)
            .bind(&record.quote.bid)
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn insert(&self, quote: &Quote, deadline: Duration) -> Result<QuoteRecord> {
        let record = QuoteRecord {
            id: Uuid::new_v4().to_string(),
            quote: quote.clone(),
            created_at: Utc::now(),
        };

        match tokio::time::timeout(deadline, self.insert_record(&record)).await {
            Ok(result) => result.map(|_| record),
            Err(_) => Err(QuoteServerError::PersistTimeout(deadline)),
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<QuoteRecord>> {
        let rows = sqlx::query(
            "SELECT id, bid, created_at FROM quotes ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(QuoteRecord {
                    id: row.try_get("id")?,
                    quote: Quote {
                        bid: row.try_get("bid")?,
                    },
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }
}
