//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Boxed subscriber plus the guard of its file writer, if any.
pub type BuiltSubscriber = (Box<dyn tracing::Subscriber + Send + Sync>, Option<WorkerGuard>);

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path, rotated daily
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "compact".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      default_format(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// `RUST_LOG`, `KPI_LOG_FORMAT`, `KPI_LOG_FILE` and `KPI_ENV` take precedence
    /// over the supplied values.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level:       std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format:      std::env::var("KPI_LOG_FORMAT").unwrap_or_else(|_| format.to_string()),
            log_file:    std::env::var("KPI_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("KPI_ENV").unwrap_or_else(|_| default_environment()),
        }
    }

    /// Whether this configuration targets a production deployment.
    pub fn is_production(&self) -> bool { self.environment.eq_ignore_ascii_case("production") }

    fn filter(&self) -> EnvFilter { EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info")) }

    /// Build the tracing subscriber from this configuration.
    ///
    /// Unknown formats fall back to JSON.
    pub fn build(&self) -> BuiltSubscriber {
        match self.format.as_str() {
            "pretty" => (self.build_pretty_subscriber(), None),
            "compact" => (self.build_compact_subscriber(), None),
            _ => self.build_json_subscriber(),
        }
    }

    /// Build a JSON subscriber for production logging.
    fn build_json_subscriber(&self) -> BuiltSubscriber {
        let stdout = fmt::layer()
            .json()
            .with_timer(fmt::time::UtcTime::rfc_3339());

        match self.log_file.as_deref() {
            Some(log_file) => {
                let path = Path::new(log_file);
                let directory = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "kpi.log".to_string());

                let appender = tracing_appender::rolling::daily(directory, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = fmt::layer()
                    .json()
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_writer(writer);

                let subscriber = Registry::default()
                    .with(self.filter())
                    .with(stdout)
                    .with(file_layer);
                (Box::new(subscriber), Some(guard))
            },
            None => (Box::new(Registry::default().with(self.filter()).with(stdout)), None),
        }
    }

    /// Build a pretty subscriber for development logging.
    fn build_pretty_subscriber(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let layer = fmt::layer()
            .pretty()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(self.filter()).with(layer))
    }

    /// Build a compact subscriber for terminals and tests.
    fn build_compact_subscriber(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let layer = fmt::layer()
            .compact()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(self.filter()).with(layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "compact");
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
    }

    #[test]
    fn test_config_from_env() {
        // Safe in test context - used to verify environment-based config
        unsafe {
            std::env::set_var("KPI_LOG_FORMAT", "pretty");
            std::env::set_var("KPI_ENV", "production");
        }

        let config = LoggingConfig::from_env("info", "json", None);
        assert_eq!(config.format, "pretty");
        assert!(config.is_production());

        // Safe in test context - cleanup after test
        unsafe {
            std::env::remove_var("KPI_LOG_FORMAT");
            std::env::remove_var("KPI_ENV");
        }
    }

    #[test]
    fn test_build_json_subscriber() {
        let config = LoggingConfig {
            level: "server=debug,sea_orm=warn".to_string(),
            format: "json".to_string(),
            ..Default::default()
        };
        let (_subscriber, guard) = config.build();
        assert!(guard.is_none());
    }

    #[test]
    fn test_build_with_log_file_returns_guard() {
        let dir = std::env::temp_dir().join(format!("kpi-logging-{}", std::process::id()));
        let config = LoggingConfig {
            format: "json".to_string(),
            log_file: Some(dir.join("kpi.log").to_string_lossy().into_owned()),
            ..Default::default()
        };
        let (_subscriber, guard) = config.build();
        assert!(guard.is_some());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "not a [valid directive".to_string(),
            format: "pretty".to_string(),
            ..Default::default()
        };
        let (_subscriber, guard) = config.build();
        assert!(guard.is_none());
    }
}
