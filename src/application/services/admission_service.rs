//! Create-or-find admission of new URLs.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::url_parser::parse_url;

/// A URL submitted for shortening.
#[derive(Debug, Clone)]
pub struct AdmitUrl {
    pub url: String,
    pub title: Option<String>,
}

impl AdmitUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Turns raw URLs into stored records, reusing existing records for URLs
/// that were already admitted.
///
/// The lookup and the insert are two separate storage calls. Two concurrent
/// first submissions of the same URL can therefore both insert.
pub struct AdmissionService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository + ?Sized> AdmissionService<R> {
    /// Creates a new admission service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the existing record for `url`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_existing(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let existing = self.repository.find_by_url(url).await?;
        if let Some(ref record) = existing {
            tracing::debug!(url, id = record.id, "URL already admitted");
        }
        Ok(existing)
    }

    /// Finds or creates the record for `request.url`.
    ///
    /// # Behavior
    ///
    /// - Known URL: the stored record is returned untouched (same id, same
    ///   visit count, original title)
    /// - New URL: a record is inserted with `visits = 0`, the title defaulting
    ///   to the URL, and all timestamps set to now
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, lacks `://`, or
    /// uses a protocol other than http, https or ftp. Nothing touches storage
    /// in that case.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn admit(&self, request: AdmitUrl) -> Result<ShortUrl, AppError> {
        let pieces = parse_url(&request.url)?;

        if let Some(existing) = self.find_existing(&request.url).await? {
            metrics::counter!("shorturl_admitted_total", "outcome" => "existing").increment(1);
            return Ok(existing);
        }

        let title = request
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| request.url.clone());

        let new_short_url = NewShortUrl {
            url: request.url,
            protocol: pieces.protocol,
            title,
            created_at: Utc::now(),
        };

        let record = self
            .repository
            .create(new_short_url)
            .await
            .map_err(|e| match e {
                AppError::Internal { details, .. } => AppError::internal(
                    "Failed to create short URL",
                    json!({ "cause": details }),
                ),
                other => other,
            })?;

        tracing::info!(id = record.id, url = %record.url, "Created short URL");
        metrics::counter!("shorturl_admitted_total", "outcome" => "created").increment(1);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Protocol;
    use crate::domain::repositories::MockShortUrlRepository;

    fn stored(id: i64, url: &str, visits: i64) -> ShortUrl {
        let now = Utc::now();
        ShortUrl {
            id,
            url: url.to_string(),
            protocol: Protocol::Https,
            title: url.to_string(),
            created_at: now,
            updated_at: now,
            last_visit_at: now,
            visits,
            deleted: false,
        }
    }

    #[tokio::test]
    async fn test_admit_creates_new_record() {
        let mut repo = MockShortUrlRepository::new();

        repo.expect_find_by_url()
            .withf(|url| url == "https://www.google.com/")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|new| {
                new.url == "https://www.google.com/"
                    && new.protocol == Protocol::Https
                    && new.title == "https://www.google.com/"
            })
            .times(1)
            .returning(|new| Ok(ShortUrl::from_new(1, new)));

        let service = AdmissionService::new(Arc::new(repo));

        let record = service
            .admit(AdmitUrl::new("https://www.google.com/"))
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.protocol, Protocol::Https);
        assert_eq!(record.title, "https://www.google.com/");
        assert_eq!(record.visits, 0);
        assert!(!record.deleted);
    }

    #[tokio::test]
    async fn test_admit_uses_given_title() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_url().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new| new.title == "Gentoo FTP" && new.protocol == Protocol::Ftp)
            .times(1)
            .returning(|new| Ok(ShortUrl::from_new(3, new)));

        let service = AdmissionService::new(Arc::new(repo));

        let record = service
            .admit(AdmitUrl::new("ftp://www.gentoo.org/").with_title("Gentoo FTP"))
            .await
            .unwrap();

        assert_eq!(record.title, "Gentoo FTP");
        assert_eq!(record.protocol, Protocol::Ftp);
    }

    #[tokio::test]
    async fn test_admit_returns_existing_record() {
        let mut repo = MockShortUrlRepository::new();
        let existing = stored(5, "https://www.cnn.com/", 12);

        repo.expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().times(0);

        let service = AdmissionService::new(Arc::new(repo));

        let record = service
            .admit(AdmitUrl::new("https://www.cnn.com/").with_title("CNN"))
            .await
            .unwrap();

        assert_eq!(record.id, 5);
        assert_eq!(record.visits, 12);
        assert_eq!(record.title, "https://www.cnn.com/");
    }

    #[tokio::test]
    async fn test_admit_bad_protocol_never_touches_storage() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_url().times(0);
        repo.expect_create().times(0);

        let service = AdmissionService::new(Arc::new(repo));

        let err = service.admit(AdmitUrl::new("xyz://host/")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_admit_rejects_missing_separator() {
        let repo = MockShortUrlRepository::new();
        let service = AdmissionService::new(Arc::new(repo));

        for input in ["", "test", "https:/www.google.com/"] {
            let err = service.admit(AdmitUrl::new(input)).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "{input:?}");
        }
    }

    #[tokio::test]
    async fn test_admit_storage_failure_is_internal() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_url().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AdmissionService::new(Arc::new(repo));

        let err = service
            .admit(AdmitUrl::new("https://www.google.com/"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_blank_title_falls_back_to_url() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_url().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new| new.title == new.url)
            .times(1)
            .returning(|new| Ok(ShortUrl::from_new(1, new)));

        let service = AdmissionService::new(Arc::new(repo));

        service
            .admit(AdmitUrl::new("http://www.grayfarms.org/").with_title("   "))
            .await
            .unwrap();
    }
}
