//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ListFilter, NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

const COLUMNS: &str =
    "id, url, protocol, title, created_at, updated_at, last_visit_at, visits, deleted";

/// Raw row as stored in `short_urls`.
#[derive(Debug, sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    url: String,
    protocol: String,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_visit_at: DateTime<Utc>,
    visits: i64,
    deleted: bool,
}

impl TryFrom<ShortUrlRow> for ShortUrl {
    type Error = AppError;

    fn try_from(row: ShortUrlRow) -> Result<Self, Self::Error> {
        let protocol = row.protocol.parse().map_err(|_| {
            AppError::internal(
                "Stored record has an unknown protocol",
                json!({ "id": row.id, "protocol": row.protocol }),
            )
        })?;

        Ok(ShortUrl {
            id: row.id,
            url: row.url,
            protocol,
            title: row.title,
            created_at: row.created_at,
            updated_at: row.updated_at,
            last_visit_at: row.last_visit_at,
            visits: row.visits,
            deleted: row.deleted,
        })
    }
}

fn into_entity(row: Option<ShortUrlRow>) -> Result<Option<ShortUrl>, AppError> {
    row.map(ShortUrl::try_from).transpose()
}

/// PostgreSQL repository for short URL records.
///
/// Ids come from the `BIGSERIAL` sequence, so concurrent inserts never share
/// an id. Visit counting and delete toggling are single `UPDATE ... RETURNING`
/// statements.
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
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            INSERT INTO short_urls (url, protocol, title, created_at, updated_at, last_visit_at)
            VALUES ($1, $2, $3, $4, $4, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new_short_url.url)
        .bind(new_short_url.protocol.as_str())
        .bind(&new_short_url.title)
        .bind(new_short_url.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {COLUMNS} FROM short_urls WHERE url = $1 ORDER BY id LIMIT 1"
        ))
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        into_entity(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {COLUMNS} FROM short_urls WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        into_entity(row)
    }

    async fn record_visit(
        &self,
        id: i64,
        visited_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            UPDATE short_urls
            SET visits = visits + 1, last_visit_at = $2
            WHERE id = $1 AND deleted = FALSE
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(visited_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        into_entity(row)
    }

    async fn list(&self, filter: ListFilter) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            SELECT {COLUMNS} FROM short_urls
            WHERE ($1 = FALSE OR deleted = FALSE)
            ORDER BY id ASC
            "#
        ))
        .bind(filter == ListFilter::Visible)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ShortUrl::try_from).collect()
    }

    async fn count(&self, filter: ListFilter) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM short_urls WHERE ($1 = FALSE OR deleted = FALSE)",
        )
        .bind(filter == ListFilter::Visible)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn toggle_deleted(
        &self,
        id: i64,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            UPDATE short_urls
            SET deleted = NOT deleted, updated_at = $2
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(updated_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        into_entity(row)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM short_urls")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
