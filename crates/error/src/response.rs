//! # API Response Types
//!
//! Error body and pagination metadata shared by every KPI endpoint.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "status": "error",
//!   "code": "NOT_FOUND",
//!   "message": "Indicator 42 not found"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaginationMeta {
    /// Current page number (1-indexed).
    pub page: u64,

    /// Number of items per page.
    pub per_page: u64,

    /// Total number of items.
    pub total_items: u64,

    /// Total number of pages.
    pub total_pages: u64,

    /// Has next page.
    pub has_next: bool,

    /// Has previous page.
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Maximum allowed page number to prevent integer overflow and excessive memory allocation
    const MAX_PAGE: u64 = 1_000_000;

    /// Create a new pagination meta.
    ///
    /// `page` is clamped into `1..=MAX_PAGE` and `per_page` to at least 1.
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let page = if page > Self::MAX_PAGE {
            tracing::warn!(
                "Page number {} exceeds maximum allowed value {}, clamping to max",
                page,
                Self::MAX_PAGE
            );
            Self::MAX_PAGE
        }
        else {
            page.max(1)
        };
        let per_page = per_page.max(1);

        let total_pages = total_items.div_ceil(per_page);
        Self {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Calculate offset for database queries.
    ///
    /// Returns `None` if the offset calculation would overflow.
    pub fn offset(&self) -> Option<u64> { self.page.checked_sub(1)?.checked_mul(self.per_page) }

    /// Calculate limit.
    pub fn limit(&self) -> u64 { self.per_page }
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename = "error")]
pub struct ErrorBody {
    /// Stable error code.
    pub code:    String,
    /// Human readable message.
    pub message: String,
}

impl ErrorBody {
    #[inline]
    pub fn new(code: impl ToString, message: impl ToString) -> Self {
        Self {
            code:    code.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_first_page() {
        let meta = PaginationMeta::new(1, 20, 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);
        assert_eq!(meta.offset(), Some(0));
        assert_eq!(meta.limit(), 20);
    }

    #[test]
    fn test_pagination_meta_last_page() {
        let meta = PaginationMeta::new(3, 20, 45);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
        assert_eq!(meta.offset(), Some(40));
    }

    #[test]
    fn test_pagination_meta_empty() {
        let meta = PaginationMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_pagination_meta_clamps() {
        let meta = PaginationMeta::new(0, 0, 10);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.per_page, 1);

        let meta = PaginationMeta::new(u64::MAX, 10, 10);
        assert_eq!(meta.page, 1_000_000);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new("NOT_FOUND", "Level 3 not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Level 3 not found");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_error_body_round_trip() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"status":"error","code":"VALIDATION_ERROR","message":"name: This field is required."}"#,
        )
        .unwrap();
        assert_eq!(body, ErrorBody::new("VALIDATION_ERROR", "name: This field is required."));
    }
}
