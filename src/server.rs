//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, click worker spawning, and the Axum
//! server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The link store: PostgreSQL (with migrations applied) when
///   `DATABASE_URL` is set, the in-memory store otherwise
/// - The background click worker
/// - The Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migration run, server bind,
/// or server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn LinkRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PgLinkRepository::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, links will not survive a restart");
            Arc::new(MemoryLinkRepository::new())
        }
    };

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, repository.clone()));
    tracing::info!("Click worker started");

    let state = AppState {
        links: Arc::new(LinkService::new(repository)),
        click_tx,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
