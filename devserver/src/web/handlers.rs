//! Static file serving handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::Response,
};
use std::sync::Arc;

use crate::error::DevServerError;
use crate::traits::StaticFileServer;

/// Serve the root directory's index page
pub async fn serve_index<S>(State(static_server): State<Arc<S>>) -> Result<Response, StatusCode>
where
    S: StaticFileServer,
{
    respond(static_server.as_ref(), "").await
}

/// Serve any file below the root
pub async fn serve_static<S>(
    Path(path): Path<String>,
    State(static_server): State<Arc<S>>,
) -> Result<Response, StatusCode>
where
    S: StaticFileServer,
{
    respond(static_server.as_ref(), &path).await
}

async fn respond<S: StaticFileServer>(static_server: &S, path: &str) -> Result<Response, StatusCode> {
    let file = static_server.serve_file(path).await.map_err(|e| match e {
        DevServerError::StaticFileNotFound { .. } => StatusCode::NOT_FOUND,
        DevServerError::AccessDenied { .. } => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    })?;

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type);

    if let Some(cache_control) = file.cache_control {
        response = response.header(header::CACHE_CONTROL, cache_control);
    }

    response
        .body(Body::from(file.content))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
