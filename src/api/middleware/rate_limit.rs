//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// How client addresses are determined for rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitMode {
    /// No rate limiting. Used by tests, which have no peer address.
    Disabled,
    /// Key on the socket peer address.
    PeerIp,
    /// Key on `X-Forwarded-For` / `X-Real-IP`, falling back to the peer
    /// address. Only safe behind a trusted reverse proxy.
    BehindProxy,
}

impl RateLimitMode {
    pub fn from_config(enabled: bool, behind_proxy: bool) -> Self {
        match (enabled, behind_proxy) {
            (false, _) => RateLimitMode::Disabled,
            (true, false) => RateLimitMode::PeerIp,
            (true, true) => RateLimitMode::BehindProxy,
        }
    }
}

/// Requests per second replenished for each client.
const PER_SECOND: u64 = 2;
/// Burst allowance for each client.
const BURST_SIZE: u32 = 100;

/// Creates a rate limiter keyed on the socket peer address.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter keyed on proxy-forwarded client addresses.
///
/// Same limits as [`layer`].
pub fn proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_config() {
        assert_eq!(RateLimitMode::from_config(false, true), RateLimitMode::Disabled);
        assert_eq!(RateLimitMode::from_config(true, false), RateLimitMode::PeerIp);
        assert_eq!(RateLimitMode::from_config(true, true), RateLimitMode::BehindProxy);
    }
}
