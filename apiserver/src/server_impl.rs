//! Main API server implementation
//!
//! Owns the shared state, builds the router and drives the listener until a
//! shutdown signal arrives.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use shared::{ServiceId, service_info};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ApiServerConfig;
use crate::error::{ApiServerError, ApiServerResult};
use crate::state::ApiServerState;
use crate::web::handlers::{info, queue, stack};

#[derive(Clone)]
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<ApiServerState>,
}

impl ApiServer {
    pub fn new(config: ApiServerConfig) -> Self {
        let state = Arc::new(ApiServerState::new(&config));
        Self { config, state }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/api/stack/push/:item", get(stack::push))
            .route("/api/stack/pop", get(stack::pop))
            .route("/api/stack/peek", get(stack::peek))
            .route("/api/stack/size", get(stack::size))
            .route("/api/stack/all", get(stack::all))
            .route("/api/queue/enqueue/:item", get(queue::enqueue))
            .route("/api/queue/dequeue", get(queue::dequeue))
            .route("/api/queue/front", get(queue::front))
            .route("/api/queue/size", get(queue::size))
            .route("/api/queue/all", get(queue::all))
            .route("/api/health", get(info::health))
            .route("/api/", get(info::api_info))
            .route("/api", get(info::api_info))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    // The preview page is served from another port
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(&self) -> ApiServerResult<()> {
        let address = self.config.bind_address;
        let listener = TcpListener::bind(address)
            .await
            .map_err(|e| ApiServerError::startup(address, e))?;

        self.serve(listener, async {
            if tokio::signal::ctrl_c().await.is_ok() {
                shared::logging::log_shutdown(ServiceId::current(), "Received Ctrl+C signal");
            }
        })
        .await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> ApiServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        log_banner(local_addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

fn log_banner(local_addr: SocketAddr) {
    service_info!(ServiceId::current(), "🌐 API server listening on http://{}", local_addr);
    service_info!(ServiceId::current(), "📊 Available endpoints:");
    service_info!(ServiceId::current(), "  Stack:  /api/stack/*");
    service_info!(ServiceId::current(), "  Queue:  /api/queue/*");
    service_info!(ServiceId::current(), "  Health: /api/health");
    service_info!(ServiceId::current(), "  Info:   /api/");
}
