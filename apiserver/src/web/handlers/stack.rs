//! Stack endpoints under `/api/stack`

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use shared::api::{ErrorResponse, ItemResponse, ItemsResponse, STACK_EMPTY, SizeResponse};
use shared::{ServiceId, service_debug, service_warn};
use std::sync::Arc;

use crate::state::ApiServerState;

/// Push an item onto the stack - /api/stack/push/:item
pub async fn push(State(state): State<Arc<ApiServerState>>, Path(item): Path<String>) -> Response {
    let mut stack = state.stack.write().await;
    match stack.push(item.clone()) {
        Ok(size) => {
            service_debug!(ServiceId::current(), "📥 Pushed '{}' (stack size {})", item, size);
            Json(ItemResponse::with_size(item, size)).into_response()
        }
        Err(e) => {
            service_warn!(ServiceId::current(), "Stack push rejected: {}", e);
            Json(ErrorResponse::new(e.to_string())).into_response()
        }
    }
}

/// Pop the top item - /api/stack/pop
pub async fn pop(State(state): State<Arc<ApiServerState>>) -> Response {
    let mut stack = state.stack.write().await;
    match stack.pop() {
        Ok(item) => {
            let size = stack.size();
            service_debug!(ServiceId::current(), "📤 Popped '{}' (stack size {})", item, size);
            Json(ItemResponse::with_size(item, size)).into_response()
        }
        Err(_) => Json(ErrorResponse::new(STACK_EMPTY)).into_response(),
    }
}

/// Look at the top item without removing it - /api/stack/peek
pub async fn peek(State(state): State<Arc<ApiServerState>>) -> Response {
    let stack = state.stack.read().await;
    match stack.peek() {
        Some(item) => Json(ItemResponse::peeked(item.clone())).into_response(),
        None => Json(ErrorResponse::new(STACK_EMPTY)).into_response(),
    }
}

/// /api/stack/size
pub async fn size(State(state): State<Arc<ApiServerState>>) -> Json<SizeResponse> {
    Json(SizeResponse::new(state.stack.read().await.size()))
}

/// Every item, bottom to top - /api/stack/all
pub async fn all(State(state): State<Arc<ApiServerState>>) -> Json<ItemsResponse> {
    Json(ItemsResponse::new(state.stack.read().await.items()))
}
