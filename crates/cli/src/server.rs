//! # CLI Server
//!
//! Server startup for the KPI CLI.

use std::net::SocketAddr;

use anyhow::anyhow;
use error::{Result, ResultExt};
use migration::{DatabaseConfig, Migrator, MigratorTrait as _};
use server::{create_app_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{commands::ServeArgs, config::parse_socket_addr};

/// Connects to the database, applies pending migrations and serves HTTP until
/// Ctrl+C or SIGTERM.
pub async fn serve(args: &ServeArgs) -> Result<()> {
    info!(target: "serve", host = %args.host, port = %args.port, "Starting API server...");

    let address = parse_socket_addr(&args.host, args.port)
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    let config = DatabaseConfig::from_env()?;
    info!(target: "serve", database = %config.redacted_connection_string(), "Connecting to database...");
    let db = config
        .connect()
        .await
        .context("Failed to connect to database")
        .log_error()?;

    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run database migrations: {}", e))?;
    info!(target: "serve", "Database migrations completed successfully");

    let app = create_app_router(AppState::new(db));
    serve_http(app, &address).await
}

/// Serves the application over plain HTTP
async fn serve_http(app: axum::Router, address: &SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server error: {}", e))?;

    info!(target: "serve", "Server stopped");
    Ok(())
}

/// Waits for shutdown signals (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(target: "serve", error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                warn!(target: "serve", error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(target: "serve", "Received shutdown signal");
}
