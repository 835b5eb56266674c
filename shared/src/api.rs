//! API contract shared by the server and the deploy report
//!
//! The endpoint catalog is served verbatim at `/api/` and echoed by the
//! deployer once the containers are up. Response envelopes always carry a
//! `status` field; errors are reported in the body, not via HTTP status.

use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Payroll Data Structures API";
pub const SERVICE_SLUG: &str = "payroll-data-structures-api";
pub const API_VERSION: &str = "1.0.0";

pub const STACK_EMPTY: &str = "Stack is empty";
pub const QUEUE_EMPTY: &str = "Queue is empty";

/// Value of the `status` field in every response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
    Healthy,
}

/// Push/pop/peek style response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub status: ApiStatus,
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<usize>,
}

impl ItemResponse {
    pub fn with_size(item: String, size: usize) -> Self {
        Self {
            status: ApiStatus::Success,
            item,
            size: Some(size),
        }
    }

    pub fn peeked(item: String) -> Self {
        Self {
            status: ApiStatus::Success,
            item,
            size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResponse {
    pub status: ApiStatus,
    pub size: usize,
    pub is_empty: bool,
}

impl SizeResponse {
    pub fn new(size: usize) -> Self {
        Self {
            status: ApiStatus::Success,
            size,
            is_empty: size == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub status: ApiStatus,
    pub items: Vec<String>,
    pub size: usize,
}

impl ItemsResponse {
    pub fn new(items: Vec<String>) -> Self {
        let size = items.len();
        Self {
            status: ApiStatus::Success,
            items,
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ApiStatus,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: ApiStatus,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: ApiStatus::Healthy,
            service: SERVICE_SLUG.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEndpoints {
    pub push: String,
    pub pop: String,
    pub peek: String,
    pub size: String,
    pub all: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEndpoints {
    pub enqueue: String,
    pub dequeue: String,
    pub front: String,
    pub size: String,
    pub all: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoEndpoints {
    pub health: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointCatalog {
    pub stack: StackEndpoints,
    pub queue: QueueEndpoints,
    pub info: InfoEndpoints,
}

impl EndpointCatalog {
    pub fn standard() -> Self {
        Self {
            stack: StackEndpoints {
                push: "/api/stack/push/<item>".to_string(),
                pop: "/api/stack/pop".to_string(),
                peek: "/api/stack/peek".to_string(),
                size: "/api/stack/size".to_string(),
                all: "/api/stack/all".to_string(),
            },
            queue: QueueEndpoints {
                enqueue: "/api/queue/enqueue/<item>".to_string(),
                dequeue: "/api/queue/dequeue".to_string(),
                front: "/api/queue/front".to_string(),
                size: "/api/queue/size".to_string(),
                all: "/api/queue/all".to_string(),
            },
            info: InfoEndpoints {
                health: "/api/health".to_string(),
                info: "/api/".to_string(),
            },
        }
    }

    /// Flattened `(group, paths)` view for console output
    pub fn groups(&self) -> Vec<(&'static str, Vec<&str>)> {
        vec![
            (
                "Stack",
                vec![
                    self.stack.push.as_str(),
                    self.stack.pop.as_str(),
                    self.stack.peek.as_str(),
                    self.stack.size.as_str(),
                    self.stack.all.as_str(),
                ],
            ),
            (
                "Queue",
                vec![
                    self.queue.enqueue.as_str(),
                    self.queue.dequeue.as_str(),
                    self.queue.front.as_str(),
                    self.queue.size.as_str(),
                    self.queue.all.as_str(),
                ],
            ),
            ("Info", vec![self.info.health.as_str(), self.info.info.as_str()]),
        ]
    }
}

/// Body served at `/api/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub service: String,
    pub version: String,
    pub endpoints: EndpointCatalog,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: API_VERSION.to_string(),
            endpoints: EndpointCatalog::standard(),
        }
    }
}
