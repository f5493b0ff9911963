//! Host name resolution contract.

use async_trait::async_trait;

/// Errors a resolver may report.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup of {host} failed: {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lookup of {0} returned no addresses")]
    NoAddresses(String),

    #[error("lookup of {0} timed out")]
    Timeout(String),
}

/// Resolves host names before a URL is accepted.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - OS resolver via tokio
/// - [`crate::infrastructure::dns::NullResolver`] - accepts every host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, succeeding if it has at least one address.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
