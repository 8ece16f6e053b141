//! # CLI Commands
//!
//! Implementation of CLI commands for the KPI service.

pub mod completions;
pub mod migrate;
pub mod validate;

use clap::{Args, Subcommand};

/// Available commands for the KPI CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate(ValidateArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "KPI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "KPI_PORT", default_value = "3000")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Rollback the last migration
    #[arg(long, conflicts_with = "status")]
    pub rollback: bool,

    /// List applied and pending migrations without changing anything
    #[arg(long)]
    pub status: bool,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Server host the configuration would bind to
    #[arg(long, env = "KPI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port the configuration would bind to
    #[arg(short, long, env = "KPI_PORT", default_value = "3000")]
    pub port: u16,

    /// Also open a database connection
    #[arg(long)]
    pub connect: bool,
}
