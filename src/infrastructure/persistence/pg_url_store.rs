//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ShortCode, UrlDescriptor, UrlRecord};
use crate::domain::repositories::{StoreCounts, UrlStore};
use crate::error::AppError;

const SELECT_COLUMNS: &str = "long_url, url_len, domain, domain_level, base_domain, \
     params_count, params, path_level, path, short_part, expires_time";

/// Row shape of the `urls` table.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    long_url: String,
    url_len: i64,
    domain: String,
    domain_level: i64,
    base_domain: String,
    params_count: i64,
    params: Option<String>,
    path_level: i64,
    path: Option<String>,
    short_part: String,
    expires_time: Option<DateTime<Utc>>,
}

impl TryFrom<UrlRow> for UrlRecord {
    type Error = AppError;

    fn try_from(row: UrlRow) -> Result<Self, Self::Error> {
        let short_part = ShortCode::parse(row.short_part.trim()).ok_or_else(|| {
            AppError::internal(
                "Stored short code is malformed",
                json!({ "short_part": row.short_part }),
            )
        })?;

        let descriptor = UrlDescriptor {
            long_url: row.long_url,
            url_len: from_db_int(row.url_len),
            domain: row.domain,
            domain_level: from_db_int(row.domain_level),
            base_domain: row.base_domain,
            params_count: from_db_int(row.params_count),
            params: row.params,
            path_level: from_db_int(row.path_level),
            path: row.path,
        };

        Ok(UrlRecord::new(descriptor, short_part, row.expires_time))
    }
}

fn to_db_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_db_int(value: i64) -> usize {
    usize::try_from(value).unwrap_or_default()
}

/// PostgreSQL store for URL records.
///
/// Code uniqueness comes from the `urls_short_part_key` unique constraint;
/// a violation surfaces as [`AppError::Conflict`] through
/// [`crate::error::map_sqlx_error`]. The schema lives in `migrations/`.
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlStore for PgUrlStore {
    async fn find(&self, descriptor: &UrlDescriptor) -> Result<Option<UrlRecord>, AppError> {
        let query = format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM urls
            WHERE long_url = $1
              AND url_len = $2
              AND domain = $3
              AND domain_level = $4
              AND base_domain = $5
              AND params_count = $6
              AND params IS NOT DISTINCT FROM $7
              AND path_level = $8
              AND path IS NOT DISTINCT FROM $9
              AND expires_time IS NULL
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, UrlRow>(&query)
            .bind(&descriptor.long_url)
            .bind(to_db_int(descriptor.url_len))
            .bind(&descriptor.domain)
            .bind(to_db_int(descriptor.domain_level))
            .bind(&descriptor.base_domain)
            .bind(to_db_int(descriptor.params_count))
            .bind(descriptor.params.as_deref())
            .bind(to_db_int(descriptor.path_level))
            .bind(descriptor.path.as_deref())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn find_by_code(&self, code: &ShortCode) -> Result<Option<UrlRecord>, AppError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM urls WHERE short_part = $1");

        let row = sqlx::query_as::<_, UrlRow>(&query)
            .bind(code.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn insert(&self, record: &UrlRecord) -> Result<(), AppError> {
        let d = &record.descriptor;

        sqlx::query(
            r#"
            INSERT INTO urls (
                long_url, url_len, domain, domain_level, base_domain,
                params_count, params, path_level, path,
                short_part, short_part_block, expires_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&d.long_url)
        .bind(to_db_int(d.url_len))
        .bind(&d.domain)
        .bind(to_db_int(d.domain_level))
        .bind(&d.base_domain)
        .bind(to_db_int(d.params_count))
        .bind(d.params.as_deref())
        .bind(to_db_int(d.path_level))
        .bind(d.path.as_deref())
        .bind(record.short_part.as_str())
        .bind(record.short_part_block())
        .bind(record.expires_time)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM urls WHERE expires_time IS NOT NULL AND expires_time <= $1",
        )
        .bind(now)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<StoreCounts, AppError> {
        let (total, timed): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(expires_time) FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(StoreCounts {
            total: u64::try_from(total).unwrap_or_default(),
            timed: u64::try_from(timed).unwrap_or_default(),
        })
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
