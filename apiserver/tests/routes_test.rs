//! Router-level tests for every API endpoint

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_limited_router, create_test_router, get_json};

#[tokio::test]
async fn test_stack_push_pop_peek() {
    let router = create_test_router();

    let (status, body) = get_json(&router, "/api/stack/push/EMP001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "item": "EMP001", "size": 1}));

    get_json(&router, "/api/stack/push/EMP002").await;

    let (_, body) = get_json(&router, "/api/stack/peek").await;
    assert_eq!(body, json!({"status": "success", "item": "EMP002"}));

    let (_, body) = get_json(&router, "/api/stack/pop").await;
    assert_eq!(body, json!({"status": "success", "item": "EMP002", "size": 1}));

    let (_, body) = get_json(&router, "/api/stack/size").await;
    assert_eq!(body, json!({"status": "success", "size": 1, "is_empty": false}));
}

#[tokio::test]
async fn test_stack_empty_errors() {
    let router = create_test_router();

    let (status, body) = get_json(&router, "/api/stack/pop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "error", "message": "Stack is empty"}));

    let (_, body) = get_json(&router, "/api/stack/peek").await;
    assert_eq!(body, json!({"status": "error", "message": "Stack is empty"}));

    let (_, body) = get_json(&router, "/api/stack/size").await;
    assert_eq!(body, json!({"status": "success", "size": 0, "is_empty": true}));
}

#[tokio::test]
async fn test_stack_all_is_bottom_to_top() {
    let router = create_test_router();
    for item in ["first", "second", "third"] {
        get_json(&router, &format!("/api/stack/push/{item}")).await;
    }

    let (_, body) = get_json(&router, "/api/stack/all").await;
    assert_eq!(
        body,
        json!({"status": "success", "items": ["first", "second", "third"], "size": 3})
    );
}

#[tokio::test]
async fn test_queue_fifo_order() {
    let router = create_test_router();

    let (_, body) = get_json(&router, "/api/queue/enqueue/Alice").await;
    assert_eq!(body, json!({"status": "success", "item": "Alice", "size": 1}));
    get_json(&router, "/api/queue/enqueue/Bob").await;
    get_json(&router, "/api/queue/enqueue/Charlie").await;

    let (_, body) = get_json(&router, "/api/queue/front").await;
    assert_eq!(body, json!({"status": "success", "item": "Alice"}));

    let (_, body) = get_json(&router, "/api/queue/dequeue").await;
    assert_eq!(body, json!({"status": "success", "item": "Alice", "size": 2}));

    let (_, body) = get_json(&router, "/api/queue/all").await;
    assert_eq!(
        body,
        json!({"status": "success", "items": ["Bob", "Charlie"], "size": 2})
    );
}

#[tokio::test]
async fn test_queue_empty_errors() {
    let router = create_test_router();

    let (_, body) = get_json(&router, "/api/queue/dequeue").await;
    assert_eq!(body, json!({"status": "error", "message": "Queue is empty"}));

    let (_, body) = get_json(&router, "/api/queue/front").await;
    assert_eq!(body, json!({"status": "error", "message": "Queue is empty"}));

    let (_, body) = get_json(&router, "/api/queue/all").await;
    assert_eq!(body, json!({"status": "success", "items": [], "size": 0}));
}

#[tokio::test]
async fn test_stack_and_queue_are_independent() {
    let router = create_test_router();
    get_json(&router, "/api/stack/push/only-on-stack").await;

    let (_, body) = get_json(&router, "/api/queue/size").await;
    assert_eq!(body["size"], 0);
    let (_, body) = get_json(&router, "/api/stack/size").await;
    assert_eq!(body["size"], 1);
}

#[tokio::test]
async fn test_capacity_errors_are_reported_in_body() {
    let router = create_limited_router(1, 1);

    get_json(&router, "/api/stack/push/a").await;
    let (status, body) = get_json(&router, "/api/stack/push/b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "error", "message": "Stack overflow - maximum size reached"})
    );

    get_json(&router, "/api/queue/enqueue/a").await;
    let (_, body) = get_json(&router, "/api/queue/enqueue/b").await;
    assert_eq!(
        body,
        json!({"status": "error", "message": "Queue overflow - maximum size reached"})
    );
}

#[tokio::test]
async fn test_item_path_is_percent_decoded() {
    let router = create_test_router();

    let (_, body) = get_json(&router, "/api/stack/push/John%20Doe").await;
    assert_eq!(body["item"], "John Doe");

    let (_, body) = get_json(&router, "/api/stack/peek").await;
    assert_eq!(body["item"], "John Doe");
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_test_router();
    let (status, body) = get_json(&router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "service": "payroll-data-structures-api"})
    );
}

#[tokio::test]
async fn test_api_info_lists_endpoints() {
    let router = create_test_router();

    for uri in ["/api/", "/api"] {
        let (status, body) = get_json(&router, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Payroll Data Structures API");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["endpoints"]["stack"]["push"], "/api/stack/push/<item>");
        assert_eq!(body["endpoints"]["queue"]["enqueue"], "/api/queue/enqueue/<item>");
        assert_eq!(body["endpoints"]["info"]["health"], "/api/health");
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let router = create_test_router();
    let (status, _) = get_json(&router, "/api/heap/push/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
