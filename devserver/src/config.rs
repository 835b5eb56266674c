//! Launcher configuration

use std::net::Ipv4Addr;
use std::path::PathBuf;

use url::Url;

use crate::error::{DevServerError, DevServerResult};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ROOT: &str = "web";
pub const DEFAULT_INDEX: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub port: u16,
    /// Directory served as the site root
    pub root: PathBuf,
    /// Page opened in the browser, relative to the root
    pub index: String,
    pub open_browser: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from(DEFAULT_ROOT),
            index: DEFAULT_INDEX.to_string(),
            open_browser: true,
        }
    }
}

impl LaunchConfig {
    pub fn new(
        port: u16,
        root: impl Into<PathBuf>,
        index: impl Into<String>,
        open_browser: bool,
    ) -> DevServerResult<Self> {
        let config = Self {
            port,
            root: root.into(),
            index: index.into(),
            open_browser,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DevServerResult<()> {
        if self.port == 0 {
            return Err(DevServerError::config("port must be between 1 and 65535"));
        }
        let index = self.index.trim_start_matches('/');
        if index.is_empty() || index.split('/').any(|segment| segment == "..") {
            return Err(DevServerError::config(format!(
                "index page '{}' must be a path inside the site root",
                self.index
            )));
        }
        Ok(())
    }

    /// URL of the index page as reached through `ip`
    pub fn page_url(&self, ip: Ipv4Addr) -> DevServerResult<Url> {
        let base = Url::parse(&format!("http://{}:{}/", ip, self.port))
            .map_err(|e| DevServerError::config(e.to_string()))?;
        base.join(self.index.trim_start_matches('/'))
            .map_err(|e| DevServerError::config(format!("index page '{}': {}", self.index, e)))
    }
}
