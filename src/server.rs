//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, host resolver selection and the
//! Axum server lifecycle.

use crate::api::middleware::rate_limit::RateLimitMode;
use crate::config::Config;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::resolver::HostResolver;
use crate::infrastructure::dns::{NullResolver, SystemResolver};
use crate::infrastructure::persistence::PgShortUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (retried with exponential backoff)
/// - Apply migrations
/// - Host resolver (system DNS, or a no-op when `VERIFY_HOSTS=false`)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after every retry
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let resolver: Arc<dyn HostResolver> = if config.verify_hosts {
        tracing::info!("Host verification enabled");
        Arc::new(SystemResolver::new(config.dns_timeout()))
    } else {
        tracing::info!("Host verification disabled (NullResolver)");
        Arc::new(NullResolver::new())
    };

    let repository: Arc<dyn ShortUrlRepository> =
        Arc::new(PgShortUrlRepository::new(Arc::new(pool)));

    let state = AppState::new(repository, resolver);

    let app = app_router(
        state,
        RateLimitMode::from_config(config.rate_limit, config.behind_proxy),
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the Postgres pool, retrying the initial connection.
///
/// Waits 100ms, 200ms, 400ms... (capped at 5s, with jitter) between
/// `db_connect_retries` attempts.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(50)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    let pool = Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!("Database connection attempt failed: {}", e))
        }
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
