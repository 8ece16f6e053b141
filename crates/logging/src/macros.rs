//! # Logging Macros
//!
//! Convenience macros for structured logging with fixed targets.

/// Log an API request with method, path, status and duration.
///
/// # Example
///
/// ```rust
/// use logging::log_api_request;
///
/// log_api_request!("GET", "/api/v1/indicators", 200, 12);
/// ```
#[macro_export]
macro_rules! log_api_request {
    ($method:expr, $path:expr, $status:expr, $duration:expr) => {
        tracing::info!(
            target: "api",
            method = %$method,
            path = %$path,
            status = %$status,
            duration_ms = %$duration,
            "API request"
        )
    };
}

/// Log a change to an indicator for the audit trail.
///
/// # Example
///
/// ```rust
/// use logging::log_history_event;
///
/// log_history_event!("updated", 7, "{\"name\":\"Literacy Rate\"}");
/// ```
#[macro_export]
macro_rules! log_history_event {
    ($action:expr, $indicator_id:expr, $snapshot:expr) => {
        tracing::info!(
            target: "indicator_history",
            action = %$action,
            indicator_id = %$indicator_id,
            snapshot = %$snapshot,
            "Indicator history"
        )
    };
}
