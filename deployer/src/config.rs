//! Deployment configuration

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{DeployError, DeployResult};

pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
pub const DEFAULT_WEB_URL: &str = "http://localhost:8000/";
pub const DEFAULT_API_HEALTH_URL: &str = "http://localhost:5000/api/health";
pub const DEFAULT_STARTUP_DELAY_SECS: u64 = 10;
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// A named HTTP endpoint checked after the containers start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub name: String,
    pub url: Url,
}

impl ProbeTarget {
    pub fn parse(name: impl Into<String>, url: &str) -> DeployResult<Self> {
        let name = name.into();
        let url = Url::parse(url).map_err(|e| DeployError::config(format!("{name} url"), e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeployError::config(
                format!("{name} url"),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(Self { name, url })
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub compose_file: PathBuf,
    /// Working directory for orchestrator commands, current directory if `None`
    pub project_dir: Option<PathBuf>,
    pub startup_delay: Duration,
    pub probe_timeout: Duration,
    pub web: ProbeTarget,
    pub api_health: ProbeTarget,
}

impl DeployConfig {
    pub fn new(web_url: &str, api_health_url: &str) -> DeployResult<Self> {
        Ok(Self {
            compose_file: PathBuf::from(DEFAULT_COMPOSE_FILE),
            project_dir: None,
            startup_delay: Duration::from_secs(DEFAULT_STARTUP_DELAY_SECS),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            web: ProbeTarget::parse("Web application", web_url)?,
            api_health: ProbeTarget::parse("API service", api_health_url)?,
        })
    }

    pub fn with_compose_file(mut self, compose_file: impl Into<PathBuf>) -> Self {
        self.compose_file = compose_file.into();
        self
    }

    pub fn with_project_dir(mut self, project_dir: Option<PathBuf>) -> Self {
        self.project_dir = project_dir;
        self
    }

    pub fn with_startup_delay(mut self, startup_delay: Duration) -> Self {
        self.startup_delay = startup_delay;
        self
    }

    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    /// Probes in the order they are run
    pub fn probes(&self) -> [&ProbeTarget; 2] {
        [&self.web, &self.api_health]
    }

    /// Base URL of the API, derived from the health endpoint
    pub fn api_base_url(&self) -> Url {
        self.api_health
            .url
            .join("/api/")
            .unwrap_or_else(|_| self.api_health.url.clone())
    }
}
