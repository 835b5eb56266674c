//! Local preview server for the static web front end
//!
//! Serves `web/` over HTTP, advertises a LAN address and opens the browser,
//! unless something is already listening on the port.

pub mod config;
pub mod error;
pub mod launcher;
pub mod network;
pub mod services;
pub mod traits;
pub mod web;

pub use config::LaunchConfig;
pub use error::{DevServerError, DevServerResult};
pub use launcher::{LaunchOutcome, Launcher};
pub use traits::{BrowserLauncher, NetworkInspector, PortProbe, RunningSite, SiteServer, StaticFileServer};
