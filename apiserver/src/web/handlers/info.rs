//! Health and service description endpoints

use axum::response::Json;
use shared::api::{ApiInfo, HealthResponse};

/// Liveness probe used by the deploy health check - /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Service name, version and endpoint catalog - /api/
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo::default())
}
