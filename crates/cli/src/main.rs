//! # KPI CLI
//!
//! Command-line interface for the KPI indicator service.
//!
//! ## Usage
//!
//! ```bash
//! kpi serve              # Start the API server (runs migrations automatically)
//! kpi migrate --status   # Show applied and pending migrations
//! kpi validate           # Check configuration without starting anything
//! kpi --help             # Show help
//! ```

mod commands;
mod config;
mod server;

use clap::{CommandFactory as _, Parser};
use commands::Commands;
use error::Result;

/// KPI indicator service
#[derive(Parser, Debug)]
#[command(name = "kpi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level or filter directive (debug, info, `server=debug,sea_orm=warn`)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "KPI_LOG_FORMAT", default_value = "compact")]
    log_format: String,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, env = "KPI_LOG_FILE")]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _guard = logging::init(&cli.log_level, &cli.log_format, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "KPI CLI starting...");

    match cli.command {
        Commands::Serve(args) => server::serve(&args).await?,
        Commands::Migrate(args) => commands::migrate::migrate(&args).await?,
        Commands::Completions(args) => commands::completions::completions(args.shell, &mut Cli::command())?,
        Commands::Validate(args) => commands::validate::validate(&args, &cli.log_format).await?,
    }

    logging::info!(target: "app", "KPI CLI completed successfully");
    Ok(())
}
