//! Axum server for the preview site

use async_trait::async_trait;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;

use crate::error::{DevServerError, DevServerResult};
use crate::traits::{RunningSite, SiteServer, StaticFileServer};
use crate::web::handlers::{serve_index, serve_static};
use shared::logging::log_shutdown;
use shared::{ServiceId, service_info};

/// Serves files from a [`StaticFileServer`] on all interfaces until Ctrl+C
/// or [`RealSiteServer::shutdown`]
pub struct RealSiteServer<S> {
    files: Arc<S>,
    shutdown: Arc<Notify>,
}

impl<S> RealSiteServer<S>
where
    S: StaticFileServer + 'static,
{
    pub fn new(files: S) -> Self {
        Self {
            files: Arc::new(files),
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_index::<S>))
            .route("/*path", get(serve_static::<S>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.files.clone())
    }

    /// Stop a site started by this server
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

#[async_trait]
impl<S> SiteServer for RealSiteServer<S>
where
    S: StaticFileServer + 'static,
{
    async fn start(&self, port: u16) -> DevServerResult<RunningSite> {
        let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = TcpListener::bind(address)
            .await
            .map_err(|e| DevServerError::startup(address, e))?;
        let local_addr = listener.local_addr()?;
        service_info!(ServiceId::current(), "🌐 Static site listening on http://{}", local_addr);

        let router = self.build_router();
        let notify = self.shutdown.clone();
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let ctrl_c = async {
                        match tokio::signal::ctrl_c().await {
                            Ok(()) => log_shutdown(ServiceId::current(), "Received Ctrl+C signal"),
                            // Without a signal handler only an explicit shutdown stops the site
                            Err(_) => std::future::pending::<()>().await,
                        }
                    };
                    tokio::select! {
                        _ = ctrl_c => {}
                        _ = notify.notified() => {}
                    }
                })
                .await
                .map_err(DevServerError::from)
        });

        Ok(RunningSite::new(local_addr, task))
    }
}
