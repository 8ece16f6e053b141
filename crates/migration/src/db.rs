//! # Database Connection Management
//!
//! Connection settings for the KPI store and the Sea-ORM connection pool
//! built from them.

use std::time::Duration;

use ::error::AppError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Database connection configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Database host address
    pub host:            String,
    /// Database port number
    pub port:            u16,
    /// Database name
    pub database:        String,
    /// Database username
    pub username:        String,
    /// Database password
    pub password:        String,
    /// SSL mode for connection
    pub ssl_mode:        SslMode,
    /// Maximum connections in pool
    pub pool_size:       u32,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
    /// Full connection URL, used verbatim instead of the fields above
    pub url:             Option<String>,
}

/// SSL mode options for PostgreSQL connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    /// No SSL - only use for development
    Disable,
    /// Prefer SSL if available
    #[default]
    Prefer,
    /// Require SSL connection
    Require,
    /// Verify SSL certificate
    VerifyCa,
    /// Verify full SSL certificate chain
    VerifyFull,
}

impl SslMode {
    /// Converts the SSL mode to a PostgreSQL connection string value
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl std::str::FromStr for SslMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(AppError::config(format!("Invalid SSL mode: {}", other))),
        }
    }
}

impl DatabaseConfig {
    /// Creates a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self {
            host:            "localhost".to_string(),
            port:            5432,
            database:        "kpi".to_string(),
            username:        "kpi".to_string(),
            password:        String::new(),
            ssl_mode:        SslMode::Prefer,
            pool_size:       10,
            connect_timeout: 30,
            url:             None,
        }
    }

    /// Loads the configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `DATABASE_URL` (optional, overrides everything below)
    /// - `KPI_DATABASE_HOST` (default: "localhost")
    /// - `KPI_DATABASE_PORT` (default: "5432")
    /// - `KPI_DATABASE_NAME` (default: "kpi")
    /// - `KPI_DATABASE_USER` (default: "kpi")
    /// - `KPI_DATABASE_PASSWORD` (default: "")
    /// - `KPI_DATABASE_SSL_MODE` (default: "prefer")
    /// - `KPI_DATABASE_POOL_SIZE` (default: "10")
    /// - `KPI_DATABASE_CONNECT_TIMEOUT` (default: "30")
    ///
    /// # Errors
    ///
    /// Returns a config error when a numeric value or the SSL mode does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::new();
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        fn parse<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, AppError> {
            match value {
                Some(raw) => {
                    raw.parse()
                        .map_err(|_| AppError::config(format!("Invalid value for {}: {}", key, raw)))
                },
                None => Ok(default),
            }
        }

        Ok(Self {
            host:            var("KPI_DATABASE_HOST").unwrap_or(defaults.host),
            port:            parse("KPI_DATABASE_PORT", var("KPI_DATABASE_PORT"), defaults.port)?,
            database:        var("KPI_DATABASE_NAME").unwrap_or(defaults.database),
            username:        var("KPI_DATABASE_USER").unwrap_or(defaults.username),
            password:        var("KPI_DATABASE_PASSWORD").unwrap_or_default(),
            ssl_mode:        parse(
                "KPI_DATABASE_SSL_MODE",
                var("KPI_DATABASE_SSL_MODE"),
                defaults.ssl_mode,
            )?,
            pool_size:       parse(
                "KPI_DATABASE_POOL_SIZE",
                var("KPI_DATABASE_POOL_SIZE"),
                defaults.pool_size,
            )?,
            connect_timeout: parse(
                "KPI_DATABASE_CONNECT_TIMEOUT",
                var("KPI_DATABASE_CONNECT_TIMEOUT"),
                defaults.connect_timeout,
            )?,
            url:             var("DATABASE_URL"),
        })
    }

    /// Use a complete connection URL, e.g. `sqlite::memory:`
    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    #[must_use]
    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Builds the connection string
    ///
    /// Username and password are percent-encoded for the URI userinfo part.
    #[must_use]
    pub fn build_connection_string(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            percent_encode_userinfo(&self.username),
            percent_encode_userinfo(&self.password),
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }

    /// Connection string with the password blanked out, for logs.
    #[must_use]
    pub fn redacted_connection_string(&self) -> String {
        match &self.url {
            Some(url) => {
                match (url.find("://"), url.rfind('@')) {
                    (Some(scheme_end), Some(at)) if at > scheme_end => {
                        format!("{}://***{}", &url[.. scheme_end], &url[at ..])
                    },
                    _ => url.clone(),
                }
            },
            None => {
                format!(
                    "postgres://{}:***@{}:{}/{}?sslmode={}",
                    percent_encode_userinfo(&self.username),
                    self.host,
                    self.port,
                    self.database,
                    self.ssl_mode.as_str()
                )
            },
        }
    }

    /// Opens a pooled connection
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection cannot be established.
    pub async fn connect(&self) -> Result<DatabaseConnection, AppError> {
        let mut options = ConnectOptions::new(self.build_connection_string());
        options
            .max_connections(self.pool_size.max(1))
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .sqlx_logging(false);

        tracing::debug!(url = %self.redacted_connection_string(), pool_size = self.pool_size, "Connecting to database");
        Database::connect(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self { Self::new() }
}

/// Percent-encoding for username/password in PostgreSQL URIs.
///
/// Everything except RFC 3986 unreserved characters is encoded byte by byte.
fn percent_encode_userinfo(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut result = String::with_capacity(s.len().saturating_mul(3));
    for byte in s.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            result.push(byte as char);
        }
        else {
            result.push('%');
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    result
}
