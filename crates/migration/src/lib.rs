//! # KPI Schema Migrations
//!
//! Creates the indicator data model on PostgreSQL or SQLite. Foreign keys are
//! declared inside `CREATE TABLE` so the same migrations run on both backends.

use sea_orm::DbBackend;
pub use sea_orm_migration::prelude::*;
use sea_orm_migration::schema;

pub mod db;

mod m20240301_000001_create_reference_tables;
mod m20240301_000002_create_indicators_table;
mod m20240301_000003_create_outcomes_table;
mod m20240301_000004_create_periodic_targets_table;
mod m20240301_000005_create_indicator_sorts_table;

pub use db::{DatabaseConfig, SslMode};

/// `decimal(20, 4)` column for actuals, targets and percentages.
///
/// SQLite rejects a declared precision above 16, so there the column is left
/// unparameterised.
pub(crate) fn amount<T: IntoIden>(manager: &SchemaManager, col: T) -> ColumnDef {
    match manager.get_database_backend() {
        DbBackend::Sqlite => schema::decimal(col),
        _ => schema::decimal_len(col, 20, 4),
    }
}

/// Nullable variant of [`amount`].
pub(crate) fn amount_null<T: IntoIden>(manager: &SchemaManager, col: T) -> ColumnDef {
    match manager.get_database_backend() {
        DbBackend::Sqlite => schema::decimal_null(col),
        _ => schema::decimal_len_null(col, 20, 4),
    }
}

/// The migrator that coordinates all schema changes.
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_reference_tables::Migration),
            Box::new(m20240301_000002_create_indicators_table::Migration),
            Box::new(m20240301_000003_create_outcomes_table::Migration),
            Box::new(m20240301_000004_create_periodic_targets_table::Migration),
            Box::new(m20240301_000005_create_indicator_sorts_table::Migration),
        ]
    }
}
