//! Platform browser opener

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

use crate::error::{DevServerError, DevServerResult};
use crate::traits::BrowserLauncher;
use shared::{ServiceId, service_debug};

/// Hands the URL to the desktop's default handler
#[derive(Debug, Clone)]
pub struct RealBrowserLauncher {
    program: String,
    args: Vec<String>,
}

impl RealBrowserLauncher {
    /// Opener for the current platform
    pub fn new() -> Self {
        if cfg!(target_os = "windows") {
            // The empty argument is the window title `start` expects first
            Self::with_command("cmd", ["/C", "start", ""])
        } else if cfg!(target_os = "macos") {
            Self::with_command("open", Vec::<String>::new())
        } else {
            Self::with_command("xdg-open", Vec::<String>::new())
        }
    }

    /// Custom opener; the URL is appended after `args`
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for RealBrowserLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrowserLauncher for RealBrowserLauncher {
    async fn open(&self, url: &Url) -> DevServerResult<()> {
        service_debug!(ServiceId::current(), "Opening {} with {}", url, self.program);

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| DevServerError::BrowserLaunch {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DevServerError::BrowserLaunch {
                program: self.program.clone(),
                message: format!("exited with {status}"),
            })
        }
    }
}
