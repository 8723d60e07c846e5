//! HTTP server initialization and runtime setup.
//!
//! Selects the store backend, starts the hashing pool and the expiry sweeper,
//! and runs the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::expiry_sweeper::spawn_expiry_sweeper;
use crate::domain::generator::CodeGenerator;
use crate::domain::repositories::UrlStore;
use crate::infrastructure::hashing::{HashWorkerPool, PooledCodeGenerator};
use crate::infrastructure::persistence::{MemoryUrlStore, PgUrlStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool sized from the configuration.
///
/// # Errors
///
/// Returns an error if the database is unreachable within
/// `db_connect_timeout`.
pub async fn connect_pool(database_url: &str, config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")
}

/// Builds the configured store: PostgreSQL when a database URL is set,
/// in-memory otherwise.
///
/// # Errors
///
/// Returns an error if the database connection or migrations fail.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.database_url {
        Some(ref database_url) => {
            let pool = connect_pool(database_url, config).await?;
            tracing::info!("Connected to database");

            migrate(&pool).await?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgUrlStore::new(Arc::new(pool))))
        }
        None => {
            tracing::warn!("No database configured, links are kept in memory");
            Ok(Arc::new(MemoryUrlStore::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - URL store (PostgreSQL or in-memory)
/// - Hashing worker pool
/// - Background expiry sweeper
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let pool = HashWorkerPool::new(config.hash_workers);
    tracing::info!(workers = pool.size(), "Hashing pool ready");
    let generator: Arc<dyn CodeGenerator> = Arc::new(PooledCodeGenerator::new(pool));

    let sweeper = spawn_expiry_sweeper(
        store.clone(),
        Duration::from_secs(config.sweep_interval_seconds),
    );

    let state = AppState::new(
        store,
        generator,
        config.short_domain.clone(),
        config.max_code_attempts,
    );

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
