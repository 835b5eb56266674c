//! Trait definitions with mockall annotations for testing
//!
//! The launcher reaches the host only through these seams.

use async_trait::async_trait;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::task::JoinHandle;
use url::Url;

use crate::error::{DevServerError, DevServerResult};

/// Lists local IPv4 addresses that could be advertised to other machines
#[mockall::automock]
pub trait NetworkInspector: Send + Sync {
    fn ipv4_candidates(&self) -> DevServerResult<Vec<Ipv4Addr>>;
}

/// Best-effort check whether a TCP port can still be bound
#[mockall::automock]
pub trait PortProbe: Send + Sync {
    fn is_available(&self, port: u16) -> bool;
}

/// Opens a URL in the user's default browser
#[mockall::automock]
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn open(&self, url: &Url) -> DevServerResult<()>;
}

/// Starts the static site and hands back the running server
#[mockall::automock]
#[async_trait]
pub trait SiteServer: Send + Sync {
    async fn start(&self, port: u16) -> DevServerResult<RunningSite>;
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Resolve a request path under the site root and read it
    async fn serve_file(&self, path: &str) -> DevServerResult<StaticFileResponse>;

    async fn file_exists(&self, path: &str) -> bool;
}

/// Static file response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    pub fn new(content: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            content,
            content_type: content_type.into(),
            cache_control: None,
        }
    }

    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }
}

/// A bound, serving site
pub struct RunningSite {
    local_addr: SocketAddr,
    task: JoinHandle<DevServerResult<()>>,
}

impl RunningSite {
    pub fn new(local_addr: SocketAddr, task: JoinHandle<DevServerResult<()>>) -> Self {
        Self { local_addr, task }
    }

    /// A site that has already stopped; used where no real server runs
    pub fn finished(local_addr: SocketAddr) -> Self {
        Self::new(local_addr, tokio::spawn(async { Ok(()) }))
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Wait until the server stops
    pub async fn wait(self) -> DevServerResult<()> {
        self.task
            .await
            .map_err(|e| DevServerError::ServerTask(e.to_string()))?
    }
}
