//! # CLI Migration Command
//!
//! Database migration handling for the KPI CLI.

use error::{AppError, Result};
use migration::{DatabaseConfig, Migrator, MigratorTrait as _};
use tracing::info;

use crate::commands::MigrateArgs;

/// Runs database migrations
///
/// Applies all pending migrations by default. `--rollback` reverts the most
/// recent one and `--status` only reports.
pub async fn migrate(args: &MigrateArgs) -> Result<()> {
    info!(
        target: "migrate",
        rollback = %args.rollback,
        status = %args.status,
        "Running database migrations..."
    );

    let config = DatabaseConfig::from_env()?;
    info!(target: "migrate", database = %config.redacted_connection_string(), "Connecting to database...");
    let db = config.connect().await?;

    if args.status {
        let applied = Migrator::get_applied_migrations(&db)
            .await
            .map_err(|e| AppError::migration(format!("Failed to read applied migrations: {}", e)))?;
        let pending = Migrator::get_pending_migrations(&db)
            .await
            .map_err(|e| AppError::migration(format!("Failed to read pending migrations: {}", e)))?;

        for m in &applied {
            info!(target: "migrate", migration = %m.name(), "Applied");
        }
        for m in &pending {
            info!(target: "migrate", migration = %m.name(), "Pending");
        }
        info!(
            target: "migrate",
            applied = applied.len(),
            pending = pending.len(),
            "Migration status"
        );
        return Ok(());
    }

    if args.rollback {
        info!(target: "migrate", "Rolling back the last migration...");

        Migrator::down(&db, Some(1))
            .await
            .map_err(|e| AppError::migration(format!("Failed to rollback migration: {}", e)))?;

        info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::migration(format!("Failed to run migrations: {}", e)))?;

    info!(target: "migrate", "Migrations completed successfully");
    Ok(())
}
