//! # HTTP Middleware
//!
//! Access logging for API requests. Request ids are attached by
//! [`logging::request_id_middleware`], which wraps this layer so every access
//! line lands inside the request span.

use std::{sync::OnceLock, time::Instant};

use axum::{extract::Request, middleware::Next, response::Response};
use error::RequestLogger;

fn request_logger() -> &'static RequestLogger {
    static LOGGER: OnceLock<RequestLogger> = OnceLock::new();
    LOGGER.get_or_init(RequestLogger::new)
}

/// Log method, path, status and duration of every request except health checks.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    if !request_logger().should_skip(&path) {
        logging::log_api_request!(
            method,
            path,
            response.status().as_u16(),
            started.elapsed().as_millis()
        );
    }

    response
}
