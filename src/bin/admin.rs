//! CLI administration tool for short-url-service.
//!
//! Provides commands for inspecting and managing short URLs and the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- url create https://example.com/some/long/path
//!
//! # Show a short URL and its latest redirects
//! cargo run --bin admin -- url show Xk9mP2qR --limit 20
//!
//! # Delete a short URL and its history
//! cargo run --bin admin -- url delete Xk9mP2qR
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (see `config` module);
//! `DATABASE_URL` and `PROJECT_HOST` are required.

use short_url_service::application::services::{ShortUrlService, StatusQuery, UrlStatus};
use short_url_service::config::{self, Config};
use short_url_service::infrastructure::persistence::PgShortUrlRepository;
use short_url_service::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url-service.
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
    /// Manage short URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Shorten a URL
    Create {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,
    },

    /// Show a short URL with its recent redirects
    Show {
        /// Short code
        url_id: String,

        /// Number of history entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Delete a short URL together with its history
    Delete {
        /// Short code
        url_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn url_service(pool: &PgPool, config: &Config) -> ShortUrlService {
    let repository = Arc::new(PgShortUrlRepository::new(Arc::new(pool.clone())));
    ShortUrlService::new(repository, config.public_base_url.clone())
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = url_service(pool, config);

    match action {
        UrlAction::Create { url } => create_url(&service, url).await?,
        UrlAction::Show { url_id, limit } => show_url(&service, &url_id, limit).await?,
        UrlAction::Delete { url_id, yes } => delete_url(&service, &url_id, yes).await?,
    }

    Ok(())
}

async fn create_url(service: &ShortUrlService, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Short URL".bright_blue().bold());
    println!();

    let original_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL to shorten")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let short_url = service
        .shorten(&original_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short URL: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!();
    println!("  Code:     {}", short_url.url_id.bright_yellow().bold());
    println!("  Short:    {}", short_url.short_url.cyan());
    println!("  Original: {}", short_url.original_url.bright_black());
    println!();

    Ok(())
}

/// Prints a short URL and its oldest `limit` redirects.
///
/// # Output Format
///
/// ```text
/// 🔎 Short URL Xk9mP2qR
///
///   Original: https://example.com/some/long/path
///   Short:    http://localhost:8000/api/v1/Xk9mP2qR
///   Created:  2026-01-15 10:30
///   Usages:   2
///
///   Used at              Client
///   ──────────────────────────────────────────────────
///   2026-01-15 10:31:02  127.0.0.1:53211
///   2026-01-15 11:02:40  10.0.0.7:40112
/// ```
async fn show_url(service: &ShortUrlService, url_id: &str, limit: i64) -> Result<()> {
    let short_url = service
        .get(url_id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, url_id))?;

    println!(
        "{} {}",
        "🔎 Short URL".bright_blue().bold(),
        short_url.url_id.bright_yellow().bold()
    );
    println!();
    println!("  Original: {}", short_url.original_url.cyan());
    println!("  Short:    {}", short_url.short_url.cyan());
    println!(
        "  Created:  {}",
        short_url
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Usages:   {}",
        short_url.usages_count.to_string().bright_green().bold()
    );
    println!();

    let query = StatusQuery {
        full_info: true,
        limit: limit.max(1),
        offset: 0,
    };

    let history = match service
        .status(url_id, query)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load history: {}", e))?
    {
        UrlStatus::History(history) => history,
        UrlStatus::Usages(_) => Vec::new(),
    };

    if history.is_empty() {
        println!("{}", "  No redirects yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<20} {:<30}",
        "Used at".bright_white().bold(),
        "Client".bright_white().bold()
    );
    println!("  {}", "─".repeat(50).bright_black());

    for entry in &history {
        println!(
            "  {:<20} {}",
            entry
                .use_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            entry.client.cyan()
        );
    }

    println!();

    Ok(())
}

/// Deletes a short URL after confirmation (default: No).
async fn delete_url(service: &ShortUrlService, url_id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short URL".bright_blue().bold());
    println!();

    let short_url = service
        .get(url_id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, url_id))?;

    println!("  Code:     {}", short_url.url_id.cyan());
    println!("  Original: {}", short_url.original_url.bright_black());
    println!(
        "  Usages:   {}",
        short_url.usages_count.to_string().bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL and its history?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(url_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete short URL: {}", e))?;

    println!();
    println!("{}", "✅ Short URL deleted".green().bold());
    println!();

    Ok(())
}

/// Displays totals of short URLs and recorded redirects.
async fn handle_stats(pool: &PgPool, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let totals = url_service(pool, config)
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Short URLs: {}",
        totals.urls.to_string().bright_green().bold()
    );
    println!(
        "  Redirects:  {}",
        totals.history.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
