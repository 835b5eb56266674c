//! Launch sequence for the local preview site
//!
//! Pick an address to advertise, refuse to double-launch on a busy port,
//! then start the site and point the browser at it.

use std::io::Write;
use std::net::Ipv4Addr;

use url::Url;

use crate::config::LaunchConfig;
use crate::error::DevServerResult;
use crate::network::detect_advertised_ip;
use crate::traits::{BrowserLauncher, NetworkInspector, PortProbe, SiteServer};
use shared::logging::{log_success, log_warning};
use shared::{ServiceId, service_info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The port was taken; nothing was started
    AlreadyRunning { url: Url },
    /// A site was served at `url` and has since stopped
    Served { url: Url },
}

pub struct Launcher<N, P, B, S> {
    config: LaunchConfig,
    inspector: N,
    ports: P,
    browser: B,
    site: S,
}

impl<N, P, B, S> Launcher<N, P, B, S>
where
    N: NetworkInspector,
    P: PortProbe,
    B: BrowserLauncher,
    S: SiteServer,
{
    pub fn new(config: LaunchConfig, inspector: N, ports: P, browser: B, site: S) -> Self {
        Self {
            config,
            inspector,
            ports,
            browser,
            site,
        }
    }

    /// Run the launch sequence, writing console output to `out`.
    ///
    /// Returns once the site stops, or immediately when the port is busy.
    pub async fn launch<W: Write>(&self, out: &mut W) -> DevServerResult<LaunchOutcome> {
        let service_id = ServiceId::current();
        let port = self.config.port;

        let ip = detect_advertised_ip(&self.inspector);
        let url = self.config.page_url(ip)?;

        if !self.ports.is_available(port) {
            writeln!(out, "⚠️  Port {port} is already in use.")?;
            writeln!(out, "   A server may already be running at {url}")?;
            log_warning(service_id, "Port check", &format!("port {port} busy, not starting a server"));
            return Ok(LaunchOutcome::AlreadyRunning { url });
        }

        writeln!(out, "🚀 Starting local server for {}", self.config.root.display())?;
        let site = self.site.start(port).await?;
        service_info!(service_id, "Site bound on {}", site.local_addr());

        writeln!(out, "📍 Local:   {}", self.config.page_url(Ipv4Addr::LOCALHOST)?)?;
        writeln!(out, "📍 Network: {url}")?;

        if self.config.open_browser {
            match self.browser.open(&url).await {
                Ok(()) => writeln!(out, "🌐 Opened {url} in your browser")?,
                Err(e) => {
                    writeln!(out, "⚠️  Could not open a browser: {e}")?;
                    log_warning(service_id, "Browser launch", &e.to_string());
                }
            }
        }

        writeln!(out, "Press Ctrl+C to stop the server")?;
        out.flush()?;

        site.wait().await?;
        log_success(service_id, "Static site stopped");
        Ok(LaunchOutcome::Served { url })
    }
}
