//! Listing and soft deletion of stored URLs.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{DeletionState, ListFilter, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Read-side listing and the delete/undelete toggle.
pub struct CatalogService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository + ?Sized> CatalogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists records matching `filter`, ordered by ascending id.
    pub async fn list(&self, filter: ListFilter) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list(filter).await
    }

    /// Counts records matching `filter`.
    pub async fn count(&self, filter: ListFilter) -> Result<i64, AppError> {
        self.repository.count(filter).await
    }

    /// Flips the `deleted` flag of record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn toggle_deleted(&self, id: i64) -> Result<DeletionState, AppError> {
        let record = self
            .repository
            .toggle_deleted(id, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))?;

        let state = DeletionState::from_flag(record.deleted);
        tracing::info!(id, state = state.as_str(), "Toggled short URL");

        Ok(state)
    }

    /// Removes every record from storage.
    pub async fn purge(&self) -> Result<u64, AppError> {
        let removed = self.repository.delete_all().await?;
        tracing::warn!(removed, "Purged all short URLs");
        Ok(removed)
    }

    /// Checks that storage is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewShortUrl, Protocol};
    use crate::domain::repositories::MockShortUrlRepository;

    fn record(id: i64, deleted: bool) -> ShortUrl {
        let mut record = ShortUrl::from_new(
            id,
            NewShortUrl {
                url: format!("https://{id}.example/"),
                protocol: Protocol::Https,
                title: String::new(),
                created_at: Utc::now(),
            },
        );
        record.deleted = deleted;
        record
    }

    #[tokio::test]
    async fn test_toggle_reports_new_state() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_toggle_deleted()
            .withf(|id, _| *id == 1)
            .times(1)
            .returning(|id, _| Ok(Some(record(id, true))));
        repo.expect_toggle_deleted()
            .withf(|id, _| *id == 2)
            .times(1)
            .returning(|id, _| Ok(Some(record(id, false))));

        let service = CatalogService::new(Arc::new(repo));

        assert_eq!(service.toggle_deleted(1).await.unwrap(), DeletionState::Deleted);
        assert_eq!(service.toggle_deleted(2).await.unwrap(), DeletionState::Undeleted);
    }

    #[tokio::test]
    async fn test_toggle_unknown_is_not_found() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_toggle_deleted().returning(|_, _| Ok(None));

        let service = CatalogService::new(Arc::new(repo));

        let err = service.toggle_deleted(9).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_passes_filter() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_list()
            .withf(|filter| *filter == ListFilter::Visible)
            .times(1)
            .returning(|_| Ok(vec![record(1, false), record(3, false)]));

        let service = CatalogService::new(Arc::new(repo));

        let records = service.list(ListFilter::Visible).await.unwrap();
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
