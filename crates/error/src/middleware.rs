//! # Error Handling Middleware
//!
//! Converts [`AppError`] values into JSON HTTP responses.
//!
//! ## Usage
//!
//! ```rust
//! use error::{middleware::ErrorHandler, AppError};
//!
//! let handler = ErrorHandler::new(false);
//! let error = AppError::not_found("Indicator 7 not found");
//! let response = handler.to_response(&error);
//! assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
//! ```

use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{response::ErrorBody, AppError};

/// Error handler that converts errors to HTTP responses.
#[derive(Clone, Debug)]
pub struct ErrorHandler {
    /// Whether to include server-side error details in the response.
    pub include_details: bool,
}

impl ErrorHandler {
    /// Create a new error handler.
    #[inline]
    pub fn new(include_details: bool) -> Self {
        Self {
            include_details,
        }
    }

    /// Convert an error to a response.
    ///
    /// Client errors always carry their message since it names the offending
    /// field or record. Server errors are masked unless `include_details` is set.
    pub fn to_response(&self, err: &AppError) -> Response {
        let status = err.status();
        let message = if self.include_details || err.is_client_error() {
            err.message()
        }
        else {
            "Internal server error".to_string()
        };

        if status.is_server_error() {
            tracing::error!(code = err.code(), error = %err, "Request failed");
        }
        else {
            tracing::debug!(code = err.code(), error = %err, "Request rejected");
        }

        let body = serde_json::to_string(&ErrorBody::new(err.code(), message)).unwrap_or_default();

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(body),
        )
            .into_response()
    }
}

impl Default for ErrorHandler {
    fn default() -> Self { Self::new(false) }
}

/// Decides which request paths are worth an access log line.
#[derive(Clone, Debug)]
pub struct RequestLogger {
    /// Skip logging for these paths.
    pub skip_paths: Vec<&'static str>,
}

impl RequestLogger {
    /// Create a new request logger.
    #[inline]
    pub fn new() -> Self {
        Self {
            skip_paths: vec!["/health"],
        }
    }

    /// Check if a path should be skipped.
    pub fn should_skip(&self, path: &str) -> bool { self.skip_paths.iter().any(|p| path.starts_with(p)) }
}

impl Default for RequestLogger {
    fn default() -> Self { Self::new() }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response { ErrorHandler::default().to_response(&self) }
}
