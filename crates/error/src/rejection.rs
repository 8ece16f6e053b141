//! # Rejection Handlers
//!
//! Maps Axum extractor rejections onto [`AppError`] so malformed requests use
//! the same JSON error envelope as every other failure.
//!
//! A body that parses as JSON but does not fit the payload shape (a missing
//! field, a string where a number belongs) is a validation failure. A body
//! that is not JSON at all is a bad request.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::AppError;

/// Turn serde's "missing field `name`" phrasing into a field-first message.
fn describe_body_error(detail: &str) -> String {
    if let Some(start) = detail.find("missing field `") {
        let rest = &detail[start + "missing field `".len() ..];
        if let Some(end) = rest.find('`') {
            return format!("{}: This field is required", &rest[.. end]);
        }
    }

    // Drop axum's "Failed to deserialize the JSON body into the target type: " lead-in.
    match detail.split_once(": ") {
        Some((_, tail)) if detail.starts_with("Failed to") => tail.to_string(),
        _ => detail.to_string(),
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::validation(describe_body_error(&err.body_text())),
            JsonRejection::JsonSyntaxError(err) => {
                AppError::bad_request(format!("Malformed JSON body: {}", describe_body_error(&err.body_text())))
            },
            JsonRejection::MissingJsonContentType(_) => {
                AppError::bad_request("Expected request with `Content-Type: application/json`")
            },
            other => AppError::bad_request(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}
