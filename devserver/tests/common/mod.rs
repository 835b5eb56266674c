//! Test helpers and builder for launcher tests
#![allow(dead_code)]

use std::net::{Ipv4Addr, SocketAddr};

use devserver::traits::{MockBrowserLauncher, MockNetworkInspector, MockPortProbe, MockSiteServer};
use devserver::{DevServerResult, LaunchConfig, LaunchOutcome, Launcher, RunningSite};

pub type MockLauncher = Launcher<MockNetworkInspector, MockPortProbe, MockBrowserLauncher, MockSiteServer>;

/// Builder for launchers wired to mocks; every mock starts with no expectations
pub struct LauncherBuilder {
    config: LaunchConfig,
    inspector: MockNetworkInspector,
    ports: MockPortProbe,
    browser: MockBrowserLauncher,
    site: MockSiteServer,
}

impl LauncherBuilder {
    pub fn new() -> Self {
        Self {
            config: LaunchConfig::default(),
            inspector: MockNetworkInspector::new(),
            ports: MockPortProbe::new(),
            browser: MockBrowserLauncher::new(),
            site: MockSiteServer::new(),
        }
    }

    pub fn with_config(mut self, config: LaunchConfig) -> Self {
        self.config = config;
        self
    }

    /// Inspector reporting exactly these candidates
    pub fn with_candidates(mut self, candidates: Vec<Ipv4Addr>) -> Self {
        self.inspector
            .expect_ipv4_candidates()
            .returning(move || Ok(candidates.clone()));
        self
    }

    pub fn with_port_available(mut self, available: bool) -> Self {
        self.ports.expect_is_available().returning(move |_| available);
        self
    }

    pub fn with_inspector<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockNetworkInspector),
    {
        setup(&mut self.inspector);
        self
    }

    pub fn with_browser<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockBrowserLauncher),
    {
        setup(&mut self.browser);
        self
    }

    pub fn with_site<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockSiteServer),
    {
        setup(&mut self.site);
        self
    }

    pub fn build(self) -> MockLauncher {
        Launcher::new(self.config, self.inspector, self.ports, self.browser, self.site)
    }
}

/// Site mock that "serves" once and stops immediately
pub fn site_started_once(site: &mut MockSiteServer) {
    site.expect_start().times(1).returning(|port| {
        Ok(RunningSite::finished(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))))
    });
}

pub async fn launch_captured(launcher: &MockLauncher) -> (DevServerResult<LaunchOutcome>, String) {
    let mut out = Vec::new();
    let result = launcher.launch(&mut out).await;
    (result, String::from_utf8_lossy(&out).into_owned())
}
