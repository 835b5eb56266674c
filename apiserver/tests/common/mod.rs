//! Test helper utilities for API server integration tests
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use apiserver::{ApiServer, ApiServerConfig};

/// Router over fresh, unlimited state
pub fn create_test_router() -> Router {
    ApiServer::new(ApiServerConfig::default()).build_router()
}

/// Router with capacity-limited stack and queue
pub fn create_limited_router(stack_capacity: usize, queue_capacity: usize) -> Router {
    let config = ApiServerConfig {
        stack_capacity: Some(stack_capacity),
        queue_capacity: Some(queue_capacity),
        ..ApiServerConfig::default()
    };
    ApiServer::new(config).build_router()
}

/// Issue a GET through the router and decode the JSON body
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
