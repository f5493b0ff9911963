//! Host reachability checks for candidate URLs.

use std::sync::Arc;

use crate::domain::resolver::HostResolver;
use crate::utils::url_parser::url_host;

/// Confirms that a URL's host resolves before the URL is admitted.
pub struct ReachabilityService<H: HostResolver + ?Sized> {
    resolver: Arc<H>,
}

impl<H: HostResolver + ?Sized> ReachabilityService<H> {
    pub fn new(resolver: Arc<H>) -> Self {
        Self { resolver }
    }

    /// Returns true only if `url` parses and its host resolves.
    ///
    /// Never fails: parse errors and resolver errors are logged at `debug`
    /// and reported as `false`, so callers can treat an unreachable host as
    /// an ordinary rejection.
    pub async fn verify_host(&self, url: &str) -> bool {
        let host = match url_host(url) {
            Ok(host) => host,
            Err(e) => {
                tracing::debug!(url, error = %e, "verify_host: unparseable URL");
                metrics::counter!("shorturl_host_checks_total", "result" => "unparseable")
                    .increment(1);
                return false;
            }
        };

        match self.resolver.resolve(&host).await {
            Ok(()) => {
                metrics::counter!("shorturl_host_checks_total", "result" => "resolved")
                    .increment(1);
                true
            }
            Err(e) => {
                tracing::debug!(url, host, error = %e, "verify_host: lookup failed");
                metrics::counter!("shorturl_host_checks_total", "result" => "unresolved")
                    .increment(1);
                false
            }
        }
    }
}
