//! CLI administration tool for shorturl.
//!
//! Provides commands for inspecting and maintaining stored short URLs
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every short URL
//! cargo run --bin admin -- list
//!
//! # List only short URLs that are not deleted
//! cargo run --bin admin -- list --visible
//!
//! # Delete or undelete short URL 3
//! cargo run --bin admin -- toggle 3
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Remove every short URL
//! cargo run --bin admin -- purge
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use shorturl::application::services::CatalogService;
use shorturl::config;
use shorturl::domain::entities::{DeletionState, ListFilter};
use shorturl::infrastructure::persistence::PgShortUrlRepository;
use shorturl::server::connect_pool;
use shorturl::utils::short_id::parse_short_id;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Catalog = CatalogService<PgShortUrlRepository>;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List short URLs
    List {
        /// Hide deleted short URLs
        #[arg(long)]
        visible: bool,
    },

    /// Delete a short URL, or undelete it if already deleted
    Toggle {
        /// Short identifier
        num: String,
    },

    /// Show statistics
    Stats,

    /// Remove every short URL
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let catalog = CatalogService::new(Arc::new(PgShortUrlRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::List { visible } => list_urls(&catalog, visible).await?,
        Commands::Toggle { num } => toggle_url(&catalog, &num).await?,
        Commands::Stats => handle_stats(&catalog).await?,
        Commands::Purge { yes } => purge(&catalog, yes).await?,
        Commands::Db { action } => handle_db_action(action, &catalog, &pool).await?,
    }

    Ok(())
}

/// Lists short URLs in id order.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   #    Visits  Status   URL
///   ─────────────────────────────────────────────────────────────
///   1    12      ACTIVE   https://www.google.com/
///   2    0       DELETED  ftp://ftp.gentoo.org/
/// ```
async fn list_urls(catalog: &Catalog, visible_only: bool) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let filter = if visible_only {
        ListFilter::Visible
    } else {
        ListFilter::All
    };

    let urls = catalog
        .list(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if urls.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<7} {:<8} {}",
        "#".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for url in &urls {
        let status = if url.deleted {
            "DELETED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<4} {:<7} {:<8} {}",
            url.id.to_string().bright_black(),
            url.visits,
            status,
            url.url.cyan()
        );
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Flips the deleted flag of one short URL.
async fn toggle_url(catalog: &Catalog, num: &str) -> Result<()> {
    let id = parse_short_id(num).map_err(|_| anyhow::anyhow!("'{}' is not a short identifier", num))?;

    let state = catalog
        .toggle_deleted(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to toggle short URL {}: {}", id, e))?;

    let message = format!("{id} {}", state.as_str());
    match state {
        DeletionState::Deleted => println!("{}", message.yellow().bold()),
        DeletionState::Undeleted => println!("{}", message.green().bold()),
    }

    Ok(())
}

/// Displays record counts.
///
/// Shows:
/// - Total number of short URLs
/// - Number of visible short URLs
/// - Number of deleted short URLs
async fn handle_stats(catalog: &Catalog) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total = catalog
        .count(ListFilter::All)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count short URLs: {}", e))?;
    let visible = catalog
        .count(ListFilter::Visible)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count short URLs: {}", e))?;

    println!("  Short URLs: {}", total.to_string().bright_green().bold());
    println!("  Visible:    {}", visible.to_string().bright_green().bold());
    println!(
        "  Deleted:    {}",
        (total - visible).to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Removes every short URL after confirmation (default: No).
async fn purge(catalog: &Catalog, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Purge Short URLs".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove every short URL? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = catalog
        .purge()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge short URLs: {}", e))?;

    println!(
        "{}",
        format!("✅ Removed {removed} short URLs").green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, catalog: &Catalog, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            catalog
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let max_id: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM short_urls")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Highest id: {}",
                max_id.map_or_else(|| "-".to_string(), |id| id.to_string())
            );
            println!();
        }
    }

    Ok(())
}
