//! # Data Transfer Objects
//!
//! Request and response types for the KPI API. One request type per entity
//! serves both create (POST) and full update (PUT); read-only fields (`id`,
//! `indicator_uuid`, `create_date`, `edit_date`) only appear in responses and
//! are ignored when sent in a request body.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

pub mod indicator_sorts;
pub mod indicator_types;
pub mod indicators;
pub mod levels;
pub mod objectives;
pub mod outcomes;
pub mod periodic_targets;

/// Fractional digits of every decimal column.
pub const DECIMAL_PLACES: u32 = 4;

/// Integer digits left over from a `decimal(20, 4)` column.
pub const MAX_INTEGER_DIGITS: u32 = 16;

/// Default page size of list endpoints.
pub const DEFAULT_PER_PAGE: u64 = 20;

/// Largest page size a client may ask for.
pub const MAX_PER_PAGE: u64 = 100;

fn decimal_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Validates that a value fits a `decimal(20, 4)` column.
///
/// Trailing zeros do not count against the fractional digits.
pub fn validate_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > DECIMAL_PLACES {
        return Err(decimal_error(
            "max_decimal_places",
            format!(
                "Ensure that there are no more than {} decimal places.",
                DECIMAL_PLACES
            ),
        ));
    }

    let limit = Decimal::from_i128_with_scale(10_i128.pow(MAX_INTEGER_DIGITS), 0);
    if value.abs().trunc() >= limit {
        return Err(decimal_error(
            "max_whole_digits",
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                MAX_INTEGER_DIGITS
            ),
        ));
    }

    Ok(())
}

/// Rescale a stored decimal to exactly four fractional digits for output.
pub fn fixed4(value: Decimal) -> Decimal {
    let mut value = value;
    value.rescale(DECIMAL_PLACES);
    value
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Paging parameters shared by every list query.
pub trait ListParams {
    /// Raw `page` and `per_page` values as sent by the client.
    fn raw_paging(&self) -> (Option<u64>, Option<u64>);

    /// Get page number (1-based, default: 1)
    fn page(&self) -> u64 { self.raw_paging().0.unwrap_or(1).max(1) }

    /// Get items per page (default: 20, max: 100)
    fn per_page(&self) -> u64 {
        self.raw_paging()
            .1
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }
}

/// Response for a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Human readable confirmation
    pub message: String,
}

impl DeleteResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Response for the health check endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status:         String,
    pub version:        String,
    pub uptime_seconds: u64,
}
