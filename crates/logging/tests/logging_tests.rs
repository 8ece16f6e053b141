//! # Logging Tests
//!
//! Configuration parsing and the request ID middleware wired into a router.

mod logging_config_tests {
    use logging::LoggingConfig;

    #[test]
    fn test_logging_config_deserializes_kebab_case() {
        let config: LoggingConfig = serde_json::from_str(
            r#"{"level": "debug", "format": "json", "log-file": "/tmp/kpi.log"}"#,
        )
        .unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.log_file.as_deref(), Some("/tmp/kpi.log"));
        assert_eq!(config.environment, "development");
    }
}

mod request_id_middleware_tests {
    use axum::{
        body::Body,
        extract::Extension,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use logging::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/echo",
                get(|Extension(id): Extension<RequestId>| async move { id.to_string() }),
            )
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let response = app()
            .oneshot(Request::get("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let header = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(header.as_bytes(), body.as_ref());
    }

    #[tokio::test]
    async fn test_propagates_incoming_request_id() {
        let response = app()
            .oneshot(
                Request::get("/echo")
                    .header(REQUEST_ID_HEADER, "client-supplied-id-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            "client-supplied-id-42"
        );
    }

    #[tokio::test]
    async fn test_replaces_invalid_request_id() {
        let response = app()
            .oneshot(
                Request::get("/echo")
                    .header(REQUEST_ID_HEADER, "bad id!")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "bad id!");
    }
}
