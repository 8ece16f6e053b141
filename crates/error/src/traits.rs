//! # Error Traits
//!
//! Extension helpers for attaching context to fallible operations.

use std::fmt;

use crate::{AppError, Result};

/// Extension methods for Result types.
pub trait ResultExt<T> {
    /// Prefix the error message with `context`, keeping the error kind.
    fn context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Log the error at `error` level and pass it through.
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn context<C: fmt::Display>(self, context: C) -> Result<T> { self.map_err(|e| e.into().context(context)) }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            tracing::error!(code = err.code(), error = %err, "Operation failed");
            err
        })
    }
}
