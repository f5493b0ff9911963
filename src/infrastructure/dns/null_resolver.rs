//! No-op resolver for disabled host verification.

use crate::domain::resolver::{HostResolver, ResolveError};
use async_trait::async_trait;
use tracing::debug;

/// A resolver that reports every host as resolvable.
///
/// Used when `VERIFY_HOSTS=false`, e.g. in offline development environments
/// or tests that must not touch the network.
pub struct NullResolver;

impl NullResolver {
    pub fn new() -> Self {
        debug!("Using NullResolver (host verification disabled)");
        Self
    }
}

impl Default for NullResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for NullResolver {
    async fn resolve(&self, _host: &str) -> Result<(), ResolveError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_resolver_accepts_everything() {
        let resolver = NullResolver::new();
        assert!(resolver.resolve("does-not-exist.invalid").await.is_ok());
        assert!(resolver.resolve("").await.is_ok());
    }
}
