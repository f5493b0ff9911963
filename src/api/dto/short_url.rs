//! DTOs for the short URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Protocol, ShortUrl};

/// Request body for `POST /api/shorturl/new`.
///
/// `url` is optional at the serde level so a missing field becomes a
/// validation failure ("invalid URL") rather than a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct NewUrlRequest {
    #[validate(required(message = "`url` is required"))]
    #[validate(length(min = 1, max = 2048))]
    #[validate(url(message = "`url` should be a valid URL"))]
    pub url: Option<String>,

    #[validate(length(max = 512))]
    pub title: Option<String>,
}

/// Full record returned after admission.
///
/// Carries both naming schemes: `original_url`/`short_url` and `url`/`num`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUrlResponse {
    #[serde(rename = "original_url")]
    pub original_url: String,
    #[serde(rename = "short_url")]
    pub short_url: i64,
    pub url: String,
    pub num: i64,
    pub protocol: Protocol,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_visit_at: DateTime<Utc>,
    pub visits: i64,
}

impl From<ShortUrl> for NewUrlResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            original_url: record.url.clone(),
            short_url: record.id,
            url: record.url,
            num: record.id,
            protocol: record.protocol,
            title: record.title,
            created_at: record.created_at,
            updated_at: record.updated_at,
            last_visit_at: record.last_visit_at,
            visits: record.visits,
        }
    }
}

/// One entry of the `all` / `visible` listings.
#[derive(Debug, Serialize)]
pub struct ListItem {
    pub original_url: String,
    pub short_url: i64,
}

impl From<ShortUrl> for ListItem {
    fn from(record: ShortUrl) -> Self {
        Self {
            original_url: record.url,
            short_url: record.id,
        }
    }
}

/// Plain `{ "message": ... }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
