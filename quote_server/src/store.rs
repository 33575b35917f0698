//! Append-only SQLite persistence for fetched quotes.
//!
//! `QuoteStore` wraps an `sqlx` pool shared by every request. SQLite serialises
//! concurrent writers itself, so inserts take no application-level lock. Each `save` is
//! bounded by its own deadline; the store never updates or deletes rows.
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use quote_common::{QuoteError, QuoteRecord, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;

const CREATE_TABLE: &str = r#"CREATE TABLE
    IF NOT EXISTS currency_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT,
        code_in TEXT,
        "name" TEXT,
        high TEXT,
        low TEXT,
        var_bid TEXT,
        pct_change TEXT,
        bid TEXT,
        ask TEXT,
        "timestamp" INTEGER
    )"#;

const INSERT_QUOTE: &str = r#"INSERT INTO currency_data (
        code, code_in, "name", high, low, var_bid, pct_change, bid, ask, "timestamp"
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#;

/// A persisted quote as read back from `currency_data`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredQuote {
    /// Store-assigned identity.
    pub id: i64,
    /// Base currency code.
    pub code: Option<String>,
    /// Quote currency code, NULL when the provider omitted it.
    pub code_in: Option<String>,
    /// Bid price, byte-for-byte as fetched.
    pub bid: Option<String>,
    /// Ask price.
    pub ask: Option<String>,
    /// Provider timestamp, or the fallback substituted at insert time.
    pub timestamp: i64,
}

/// Handle to the quote database. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct QuoteStore {
    pool: SqlitePool,
}

impl QuoteStore {
    /// Open (creating if needed) the database at `database_url`, e.g. `sqlite://sqlite.db`.
    pub async fn open(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                QuoteError::SchemaFatal(format!("invalid database url {}: {}", database_url, e))
            })?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| QuoteError::SchemaFatal(format!("opening {}: {}", database_url, e)))?;

        info!("Quote store opened at {}", database_url);
        Ok(Self { pool })
    }

    /// Create the quote table when absent. Safe to call on every start.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| QuoteError::SchemaFatal(e.to_string()))?;
        Ok(())
    }

    /// Insert one row for `record`, giving up after `deadline`.
    ///
    /// The insert runs in its own transaction. On expiry the transaction is dropped
    /// uncommitted and rolled back, so a timed-out save never leaves a row behind.
    pub async fn save(&self, record: &QuoteRecord, deadline: Duration) -> Result<()> {
        let timestamp = stored_timestamp(&record.timestamp);

        let insert = async {
            let mut tx = self.pool.begin().await?;
            let done = sqlx::query(INSERT_QUOTE)
                .bind(record.code.as_str())
                .bind(record.codein.as_deref())
                .bind(record.name.as_str())
                .bind(record.high.as_str())
                .bind(record.low.as_str())
                .bind(record.var_bid.as_str())
                .bind(record.pct_change.as_str())
                .bind(record.bid.as_str())
                .bind(record.ask.as_str())
                .bind(timestamp)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            Ok::<_, sqlx::Error>(done)
        };

        let done = tokio::time::timeout(deadline, insert)
            .await
            .map_err(|_| QuoteError::Timeout(deadline))?
            .map_err(|e| QuoteError::Unavailable(e.to_string()))?;

        debug!("Stored quote row {}", done.last_insert_rowid());
        Ok(())
    }

    /// Number of stored rows.
    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM currency_data")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| QuoteError::Unavailable(e.to_string()))
    }

    /// All stored rows in insertion order.
    pub async fn rows(&self) -> Result<Vec<StoredQuote>> {
        sqlx::query_as::<_, StoredQuote>(
            r#"SELECT id, code, code_in, bid, ask, "timestamp" FROM currency_data ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| QuoteError::Unavailable(e.to_string()))
    }

    /// Close every pooled connection. Later saves fail with `Unavailable`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Integer timestamp for a row. Unparsable input falls back to the current epoch second.
fn stored_timestamp(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or_else(|e| {
        let fallback = Utc::now().timestamp();
        warn!("Unparsable quote timestamp {:?} ({}), storing {}", raw, e, fallback);
        fallback
    })
}
