//! Short identifier resolution with visit counting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Redirect target produced by a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub url: String,
    /// Visit count after this resolution was recorded.
    pub visits: i64,
}

/// Resolves short identifiers and records each visit.
pub struct ResolutionService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository + ?Sized> ResolutionService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up `id`, increments its visit count and returns the redirect
    /// target.
    ///
    /// The increment happens in one atomic storage call, so concurrent
    /// resolutions never lose a visit. Deleted records resolve like unknown
    /// ones and are not modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no visible record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, id: i64) -> Result<Resolved, AppError> {
        let Some(record) = self.repository.record_visit(id, Utc::now()).await? else {
            tracing::debug!(id, "No visible short URL for id");
            metrics::counter!("shorturl_resolved_total", "outcome" => "miss").increment(1);
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "id": id }),
            ));
        };

        tracing::debug!(id, url = %record.url, visits = record.visits, "Resolved short URL");
        metrics::counter!("shorturl_resolved_total", "outcome" => "hit").increment(1);

        Ok(Resolved {
            url: record.url,
            visits: record.visits,
        })
    }
}
