//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Home page (form + visible short URLs)
//! - `GET  /health`         - Health check: database
//! - `GET  /api/hello`      - Greeting
//! - `/api/shorturl/*`      - Short URL API
//! - `/public/*`            - Static assets
//! - anything else          - 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api/shorturl` (configurable for proxy deployments)
//! - **Security headers** - CSP, referrer, framing and sniffing policies
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, hello_handler};
use crate::api::middleware::rate_limit::{self, RateLimitMode};
use crate::api::middleware::{security_headers, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/public`.
pub const PUBLIC_DIR: &str = "public";

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit_mode` - how `/api/shorturl` requests are keyed for rate limiting;
///   [`RateLimitMode::BehindProxy`] reads the client IP from `X-Forwarded-For` /
///   `X-Real-IP` and must only be used behind a trusted reverse proxy
pub fn app_router(state: AppState, rate_limit_mode: RateLimitMode) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limit_mode))
}

/// Builds every route and middleware except path normalization.
pub fn router(state: AppState, rate_limit_mode: RateLimitMode) -> Router {
    let shorturl_router = api::routes::shorturl_routes();
    let shorturl_router = match rate_limit_mode {
        RateLimitMode::Disabled => shorturl_router,
        RateLimitMode::PeerIp => shorturl_router.layer(rate_limit::layer()),
        RateLimitMode::BehindProxy => shorturl_router.layer(rate_limit::proxy_layer()),
    };

    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .route("/api/hello", get(hello_handler))
        .nest("/api/shorturl", shorturl_router)
        .nest_service("/public", ServeDir::new(PUBLIC_DIR))
        .fallback(not_found_handler)
        .with_state(state);

    security_headers::apply(router)
        .layer(security_headers::cors_layer())
        .layer(tracing::layer())
}
