//! Repository trait for short URL storage.

use crate::domain::entities::{ListFilter, NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage collaborator for short URL records.
///
/// Implementations own identifier allocation: `create` must hand out unique,
/// increasing ids even under concurrent calls. "Not found" is reported as
/// `Ok(None)`, never as an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortUrlRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by exact URL match, deleted or not.
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by id, deleted or not.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically increments `visits` and sets `last_visit_at` on a record
    /// that exists and is not deleted.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` with the post-update values
    /// - `Ok(None)` if no visible record has this id
    async fn record_visit(
        &self,
        id: i64,
        visited_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Lists records matching `filter`, ordered by ascending id.
    async fn list(&self, filter: ListFilter) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts records matching `filter`.
    async fn count(&self, filter: ListFilter) -> Result<i64, AppError>;

    /// Atomically flips the `deleted` flag and bumps `updated_at`.
    ///
    /// Returns the updated record, or `Ok(None)` if the id is unknown.
    async fn toggle_deleted(
        &self,
        id: i64,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Physically removes every record. Returns the number removed.
    ///
    /// Only used by administration tooling and tests.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Cheap connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
