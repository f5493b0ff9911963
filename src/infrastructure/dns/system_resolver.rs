//! Resolver backed by the operating system's name service.

use crate::domain::resolver::{HostResolver, ResolveError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

/// Resolves hosts with `getaddrinfo` on tokio's blocking pool.
///
/// Each lookup is bounded by `timeout`; a lookup that takes longer is reported
/// as [`ResolveError::Timeout`].
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Turns the host part of a URL into something `lookup_host` accepts.
///
/// Strips user info and adds a dummy port when none is present.
fn lookup_target(host: &str) -> String {
    let host = host.rsplit('@').next().unwrap_or(host);

    let has_port = if host.starts_with('[') {
        host.contains("]:")
    } else {
        host.contains(':')
    };

    if has_port {
        host.to_string()
    } else {
        format!("{host}:0")
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        let target = lookup_target(host);

        let mut addrs = tokio::time::timeout(self.timeout, lookup_host(target))
            .await
            .map_err(|_| ResolveError::Timeout(host.to_string()))?
            .map_err(|source| ResolveError::Lookup {
                host: host.to_string(),
                source,
            })?;

        match addrs.next() {
            Some(addr) => {
                debug!(host, %addr, "Host resolved");
                Ok(())
            }
            None => Err(ResolveError::NoAddresses(host.to_string())),
        }
    }
}
