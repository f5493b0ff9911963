#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;

use shorturl::api::middleware::rate_limit::RateLimitMode;
use shorturl::domain::resolver::{HostResolver, ResolveError};
use shorturl::infrastructure::persistence::MemoryShortUrlRepository;
use shorturl::routes::router;
use shorturl::state::AppState;

/// Resolves every host except those under the reserved `.invalid` TLD.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        if host.ends_with(".invalid") {
            Err(ResolveError::NoAddresses(host.to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryShortUrlRepository::new()),
        Arc::new(StubResolver),
    )
}

pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state(), RateLimitMode::Disabled)).unwrap()
}

/// Shortens `url` and returns its short identifier.
pub async fn shorten(server: &TestServer, url: &str) -> i64 {
    let response = server
        .post("/api/shorturl/new")
        .json(&serde_json::json!({ "url": url }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["short_url"]
        .as_i64()
        .unwrap()
}

pub fn assert_invalid_url(response: &axum_test::TestResponse) {
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "error": "invalid URL" })
    );
}
