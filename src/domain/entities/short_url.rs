//! Short URL entity representing a stored URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Protocols a stored URL may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Ftp,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Http, Protocol::Https, Protocol::Ftp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Ftp => "ftp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown protocol: {0}")]
pub struct UnknownProtocol(pub String);

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            "ftp" => Ok(Protocol::Ftp),
            other => Err(UnknownProtocol(other.to_string())),
        }
    }
}

/// A stored URL mapping.
///
/// `id` is the public short identifier. It is assigned by storage and never
/// changes; neither do `url` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub url: String,
    pub protocol: Protocol,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_visit_at: DateTime<Utc>,
    pub visits: i64,
    pub deleted: bool,
}

impl ShortUrl {
    /// Builds the stored record for `new` once storage has assigned `id`.
    pub fn from_new(id: i64, new: NewShortUrl) -> Self {
        Self {
            id,
            url: new.url,
            protocol: new.protocol,
            title: new.title,
            created_at: new.created_at,
            updated_at: new.created_at,
            last_visit_at: new.created_at,
            visits: 0,
            deleted: false,
        }
    }

    /// Returns true if the record should be served by redirects and the
    /// visible listing.
    pub fn is_visible(&self) -> bool {
        !self.deleted
    }
}

/// Input data for creating a new record. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub url: String,
    pub protocol: Protocol,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Which records a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    /// Every record, deleted or not.
    All,
    /// Only records that are not deleted.
    Visible,
}

impl ListFilter {
    pub fn matches(&self, record: &ShortUrl) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Visible => record.is_visible(),
        }
    }
}

/// State of a record after its `deleted` flag was toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionState {
    Deleted,
    Undeleted,
}

impl DeletionState {
    pub fn from_flag(deleted: bool) -> Self {
        if deleted {
            DeletionState::Deleted
        } else {
            DeletionState::Undeleted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionState::Deleted => "deleted",
            DeletionState::Undeleted => "undeleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_short_url(url: &str) -> NewShortUrl {
        NewShortUrl {
            url: url.to_string(),
            protocol: Protocol::Https,
            title: url.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_new_sets_defaults() {
        let new = new_short_url("https://www.google.com/");
        let created_at = new.created_at;
        let record = ShortUrl::from_new(7, new);

        assert_eq!(record.id, 7);
        assert_eq!(record.url, "https://www.google.com/");
        assert_eq!(record.visits, 0);
        assert!(!record.deleted);
        assert_eq!(record.updated_at, created_at);
        assert_eq!(record.last_visit_at, created_at);
    }

    #[test]
    fn test_protocol_round_trip() {
        for protocol in Protocol::ALL {
            assert_eq!(protocol.as_str().parse::<Protocol>().unwrap(), protocol);
        }
        assert!("gopher".parse::<Protocol>().is_err());
        assert!("HTTP".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_protocol_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Protocol::Ftp).unwrap(), "\"ftp\"");
    }

    #[test]
    fn test_list_filter() {
        let mut record = ShortUrl::from_new(1, new_short_url("https://www.cnn.com/"));
        assert!(ListFilter::All.matches(&record));
        assert!(ListFilter::Visible.matches(&record));

        record.deleted = true;
        assert!(ListFilter::All.matches(&record));
        assert!(!ListFilter::Visible.matches(&record));
    }

    #[test]
    fn test_deletion_state() {
        assert_eq!(DeletionState::from_flag(true).as_str(), "deleted");
        assert_eq!(DeletionState::from_flag(false).as_str(), "undeleted");
    }
}
