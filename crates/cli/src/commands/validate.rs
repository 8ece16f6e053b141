//! # CLI Validate Command
//!
//! Configuration validation for the KPI CLI.

use error::{AppError, Result};
use migration::DatabaseConfig;
use tracing::{info, warn};

use crate::{commands::ValidateArgs, config::parse_socket_addr};

const LOG_FORMATS: [&str; 3] = ["json", "pretty", "compact"];

/// Collect every configuration problem without touching the network.
pub fn check_config(args: &ValidateArgs, log_format: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if let Err(e) = DatabaseConfig::from_env() {
        problems.push(e.message());
    }

    if let Err(e) = parse_socket_addr(&args.host, args.port) {
        problems.push(format!("Invalid bind address {}:{}: {}", args.host, args.port, e));
    }

    if !LOG_FORMATS.contains(&log_format) {
        problems.push(format!(
            "Unknown log format {:?}, expected one of {}",
            log_format,
            LOG_FORMATS.join(", ")
        ));
    }

    problems
}

/// Validates the CLI configuration
///
/// With `--connect`, also opens a database connection.
pub async fn validate(args: &ValidateArgs, log_format: &str) -> Result<()> {
    info!(target: "validate", "Validating configuration...");

    let problems = check_config(args, log_format);
    if !problems.is_empty() {
        for problem in &problems {
            warn!(target: "validate", %problem, "Configuration problem");
        }
        return Err(AppError::config(problems.join("; ")));
    }

    if args.connect {
        let config = DatabaseConfig::from_env()?;
        config.connect().await?;
        info!(target: "validate", database = %config.redacted_connection_string(), "Database reachable");
    }

    info!(target: "validate", "Configuration is valid");
    Ok(())
}
