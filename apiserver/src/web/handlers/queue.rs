//! Queue endpoints under `/api/queue`

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use shared::api::{ErrorResponse, ItemResponse, ItemsResponse, QUEUE_EMPTY, SizeResponse};
use shared::{ServiceId, service_debug, service_warn};
use std::sync::Arc;

use crate::state::ApiServerState;

/// Add an item at the rear - /api/queue/enqueue/:item
pub async fn enqueue(State(state): State<Arc<ApiServerState>>, Path(item): Path<String>) -> Response {
    let mut queue = state.queue.write().await;
    match queue.enqueue(item.clone()) {
        Ok(size) => {
            service_debug!(ServiceId::current(), "📥 Enqueued '{}' (queue size {})", item, size);
            Json(ItemResponse::with_size(item, size)).into_response()
        }
        Err(e) => {
            service_warn!(ServiceId::current(), "Queue enqueue rejected: {}", e);
            Json(ErrorResponse::new(e.to_string())).into_response()
        }
    }
}

/// Remove the front item - /api/queue/dequeue
pub async fn dequeue(State(state): State<Arc<ApiServerState>>) -> Response {
    let mut queue = state.queue.write().await;
    match queue.dequeue() {
        Ok(item) => {
            let size = queue.size();
            service_debug!(ServiceId::current(), "📤 Dequeued '{}' (queue size {})", item, size);
            Json(ItemResponse::with_size(item, size)).into_response()
        }
        Err(_) => Json(ErrorResponse::new(QUEUE_EMPTY)).into_response(),
    }
}

/// /api/queue/front
pub async fn front(State(state): State<Arc<ApiServerState>>) -> Response {
    let queue = state.queue.read().await;
    match queue.front() {
        Some(item) => Json(ItemResponse::peeked(item.clone())).into_response(),
        None => Json(ErrorResponse::new(QUEUE_EMPTY)).into_response(),
    }
}

/// /api/queue/size
pub async fn size(State(state): State<Arc<ApiServerState>>) -> Json<SizeResponse> {
    Json(SizeResponse::new(state.queue.read().await.size()))
}

/// Every item, front to rear - /api/queue/all
pub async fn all(State(state): State<Arc<ApiServerState>>) -> Json<ItemsResponse> {
    Json(ItemsResponse::new(state.queue.read().await.items()))
}
