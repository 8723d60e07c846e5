//! CLI administration tool for pushort.
//!
//! Provisions the PostgreSQL schema and inspects the link store without
//! going through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Create the table and indexes
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Delete expired links now
//! cargo run --bin admin -- purge
//!
//! # View record counts
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or the `DB_*` components, as for the server.

use pushort::config::{self, Config, mask_connection_string};
use pushort::domain::repositories::UrlStore;
use pushort::infrastructure::persistence::PgUrlStore;
use pushort::server;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing pushort.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Delete links whose expiry time has passed
    Purge,

    /// Show record counts
    Stats,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create or upgrade the schema and indexes
    Migrate,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL or DB_HOST must be set")?;

    let pool = server::connect_pool(&database_url, &config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
        Commands::Purge => handle_purge(pool).await?,
        Commands::Stats => handle_stats(pool).await?,
    }

    Ok(())
}

/// Handles schema and connectivity commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "Schema is up to date".green().bold());
        }
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());
            if let Some(ref url) = config.database_url {
                println!("  Database: {}", mask_connection_string(url).bright_white());
            }

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}

/// Runs one expiry purge.
async fn handle_purge(pool: PgPool) -> Result<()> {
    let store = PgUrlStore::new(Arc::new(pool));

    let purged = store
        .purge_expired(Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge expired links: {}", e))?;

    println!(
        "  Purged: {}",
        purged.to_string().bright_green().bold()
    );

    Ok(())
}

/// Displays record counts.
async fn handle_stats(pool: PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let store = PgUrlStore::new(Arc::new(pool));
    let counts = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links:     {}",
        counts.total.to_string().bright_green().bold()
    );
    println!(
        "  Permanent: {}",
        (counts.total - counts.timed).to_string().bright_green().bold()
    );
    println!(
        "  Timed:     {}",
        counts.timed.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}
