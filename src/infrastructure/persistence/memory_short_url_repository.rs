//! In-process implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{ListFilter, NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(Debug)]
struct Store {
    records: BTreeMap<i64, ShortUrl>,
    /// Last id handed out. Never reused, even after `delete_all`.
    last_id: i64,
}

/// Short URL storage kept in memory.
///
/// The id counter and the records share one lock, so id allocation and
/// visit counting are atomic with respect to each other. Nothing survives a
/// restart; intended for tests and local development.
#[derive(Debug)]
pub struct MemoryShortUrlRepository {
    store: RwLock<Store>,
}

impl MemoryShortUrlRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                records: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for MemoryShortUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let record = ShortUrl::from_new(store.last_id, new_short_url);
        store.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let store = self.store.read().await;
        Ok(store.records.values().find(|r| r.url == url).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortUrl>, AppError> {
        let store = self.store.read().await;
        Ok(store.records.get(&id).cloned())
    }

    async fn record_visit(
        &self,
        id: i64,
        visited_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        let mut store = self.store.write().await;
        let Some(record) = store.records.get_mut(&id).filter(|r| r.is_visible()) else {
            return Ok(None);
        };

        record.visits += 1;
        record.last_visit_at = visited_at;
        Ok(Some(record.clone()))
    }

    async fn list(&self, filter: ListFilter) -> Result<Vec<ShortUrl>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .records
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: ListFilter) -> Result<i64, AppError> {
        let store = self.store.read().await;
        Ok(store.records.values().filter(|r| filter.matches(r)).count() as i64)
    }

    async fn toggle_deleted(
        &self,
        id: i64,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        let mut store = self.store.write().await;
        let Some(record) = store.records.get_mut(&id) else {
            return Ok(None);
        };

        record.deleted = !record.deleted;
        record.updated_at = updated_at;
        Ok(Some(record.clone()))
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut store = self.store.write().await;
        let removed = store.records.len() as u64;
        store.records.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
