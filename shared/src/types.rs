//! Core types used across the workspace binaries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global service ID singleton - set once at startup
static SERVICE_ID: OnceLock<ServiceId> = OnceLock::new();

/// Reported when no binary has claimed an identity (library use, unit tests)
static EMBEDDED: ServiceId = ServiceId::Embedded;

/// Identifier for the binary emitting log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    /// REST API server for the stack and queue
    ApiServer,
    /// One-shot container deployment and health check
    Deployer,
    /// Local static site launcher
    DevServer,
    /// Code running inside another process (tests, library consumers)
    Embedded,
}

impl ServiceId {
    /// Initialize the global service ID for the API server
    pub fn init_apiserver() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::ApiServer)
    }

    /// Initialize the global service ID for the deployer
    pub fn init_deployer() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::Deployer)
    }

    /// Initialize the global service ID for the dev server launcher
    pub fn init_devserver() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::DevServer)
    }

    /// Get the global service ID, `Embedded` when nothing was initialized
    pub fn current() -> &'static ServiceId {
        SERVICE_ID.get().unwrap_or(&EMBEDDED)
    }

    /// Crate targets whose events this service wants to see
    pub fn log_targets(&self) -> &'static [&'static str] {
        match self {
            ServiceId::ApiServer => &["apiserver", "structures", "shared"],
            ServiceId::Deployer => &["deployer", "shared"],
            ServiceId::DevServer => &["devserver", "shared"],
            ServiceId::Embedded => &["apiserver", "deployer", "devserver", "structures", "shared"],
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceId::ApiServer => write!(f, "apiserver"),
            ServiceId::Deployer => write!(f, "deployer"),
            ServiceId::DevServer => write!(f, "devserver"),
            ServiceId::Embedded => write!(f, "embedded"),
        }
    }
}
