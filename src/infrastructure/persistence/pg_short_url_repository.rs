//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShortUrl, NewUsage, ShortUrl, UrlHistory};
use crate::domain::repositories::{ShortUrlRepository, Totals};
use crate::error::AppError;

#[derive(FromRow)]
struct ShortUrlRow {
    id: Uuid,
    original_url: String,
    url_id: String,
    short_url: String,
    usages_count: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl::new(
            r.id,
            r.original_url,
            r.url_id,
            r.short_url,
            r.usages_count,
            r.created_at,
        )
    }
}

#[derive(FromRow)]
struct HistoryRow {
    id: Uuid,
    short_url: Uuid,
    client: String,
    use_at: DateTime<Utc>,
}

impl From<HistoryRow> for UrlHistory {
    fn from(r: HistoryRow) -> Self {
        UrlHistory::new(r.id, r.short_url, r.client, r.use_at)
    }
}

const INSERT_SHORT_URL: &str = r#"
    INSERT INTO short_url (id, original_url, url_id, short_url, usages_count)
    VALUES ($1, $2, $3, $4, 0)
    RETURNING id, original_url, url_id, short_url, usages_count, created_at
"#;

/// PostgreSQL repository for short URLs and their redirect history.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(INSERT_SHORT_URL)
            .bind(new_url.id)
            .bind(&new_url.original_url)
            .bind(&new_url.url_id)
            .bind(&new_url.short_url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn create_many(&self, new_urls: Vec<NewShortUrl>) -> Result<Vec<ShortUrl>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(new_urls.len());

        for new_url in &new_urls {
            let row = sqlx::query_as::<_, ShortUrlRow>(INSERT_SHORT_URL)
                .bind(new_url.id)
                .bind(&new_url.original_url)
                .bind(&new_url.url_id)
                .bind(&new_url.short_url)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row.into());
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn find_by_url_id(&self, url_id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, url_id, short_url, usages_count, created_at
            FROM short_url
            WHERE url_id = $1
            "#,
        )
        .bind(url_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn record_usage(
        &self,
        url_id: &str,
        usage: NewUsage,
    ) -> Result<Option<ShortUrl>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            UPDATE short_url
            SET usages_count = usages_count + 1
            WHERE url_id = $1
            RETURNING id, original_url, url_id, short_url, usages_count, created_at
            "#,
        )
        .bind(url_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            r#"
            INSERT INTO short_url_history (id, short_url, client)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(row.id)
        .bind(&usage.client)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into()))
    }

    async fn history(
        &self,
        short_url_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UrlHistory>, AppError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT id, short_url, client, use_at
            FROM short_url_history
            WHERE short_url = $1
            ORDER BY use_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(short_url_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_url_id(&self, url_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_url WHERE url_id = $1")
            .bind(url_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<Totals, AppError> {
        let (urls, history): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM short_url) AS urls,
                (SELECT COUNT(*) FROM short_url_history) AS history
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Totals { urls, history })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
