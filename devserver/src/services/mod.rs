//! Service implementations
//!
//! Real implementations of the launcher's service traits.

pub mod browser;
pub mod network_inspector;
pub mod port_probe;
pub mod site_server;
pub mod static_server;

#[cfg(test)]
mod tests;

pub use browser::RealBrowserLauncher;
pub use network_inspector::RealNetworkInspector;
pub use port_probe::RealPortProbe;
pub use site_server::RealSiteServer;
pub use static_server::RealStaticFileServer;
