use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::application::{AppError, RateStore};
use crate::domain::Rate;

use super::MIGRATION_001_INITIAL;

/// A stored rate together with the time it was last written.
#[derive(Debug, Clone)]
pub struct RateRecord {
    pub rate: Rate,
    pub updated_at: DateTime<Utc>,
}

/// SQLite-backed rate store. Rates arrive here already normalized into
/// canonical pair order; the (code_from, code_to) pair is the primary key
/// and repeated saves replace the stored value.
pub struct SqliteRateStore {
    pool: SqlitePool,
}

impl SqliteRateStore {
    /// Create a new store with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given path.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// List all stored rates, ordered by currency pair.
    pub async fn list_rates(&self) -> Result<Vec<RateRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT code_from, code_to, value, updated_at
            FROM rates
            ORDER BY code_from, code_to
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list rates")?;

        rows.iter().map(Self::row_to_record).collect()
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<RateRecord> {
        let updated_at_str: String = row.get("updated_at");

        Ok(RateRecord {
            rate: Rate {
                code_from: row.get("code_from"),
                code_to: row.get("code_to"),
                value: row.get("value"),
            },
            updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
                .context("Invalid updated_at timestamp")?
                .with_timezone(&Utc),
        })
    }
}

impl RateStore for SqliteRateStore {
    async fn save_rate(&self, rate: &Rate) -> std::result::Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO rates (code_from, code_to, value, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (code_from, code_to)
            DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(&rate.code_from)
        .bind(&rate.code_to)
        .bind(rate.value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to save rate")?;

        Ok(())
    }

    async fn rate(&self, code_from: &str, code_to: &str) -> std::result::Result<Rate, AppError> {
        let row = sqlx::query(
            r#"
            SELECT code_from, code_to, value
            FROM rates
            WHERE code_from = ? AND code_to = ?
            "#,
        )
        .bind(code_from)
        .bind(code_to)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch rate")?;

        match row {
            Some(row) => Ok(Rate {
                code_from: row.get("code_from"),
                code_to: row.get("code_to"),
                value: row.get("value"),
            }),
            None => Err(AppError::RateNotFound {
                code_from: code_from.to_string(),
                code_to: code_to.to_string(),
            }),
        }
    }
}
