//! Trait definitions with mockall annotations for testing
//!
//! The deploy sequence only talks to the outside world through these two
//! seams: the container orchestrator CLI and HTTP health probes.

use std::fmt;

use crate::config::ProbeTarget;
use crate::error::DeployResult;

/// Result of a single health probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Answered with a 2xx status
    Healthy { status: u16 },
    /// Answered with a non-2xx status, timed out, or refused the connection
    Unhealthy { reason: String },
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Healthy { status } => write!(f, "HTTP {status}"),
            ProbeOutcome::Unhealthy { reason } => write!(f, "{reason}"),
        }
    }
}

/// Container orchestrator lifecycle control
#[mockall::automock]
#[async_trait::async_trait]
pub trait ContainerOrchestrator: Send + Sync {
    /// Fail with `OrchestratorUnavailable` when the daemon cannot be reached
    async fn ensure_running(&self) -> DeployResult<()>;

    /// Build images and start every service in the background
    async fn build_and_start(&self) -> DeployResult<()>;

    /// Human-readable status table of the running services
    async fn status(&self) -> DeployResult<String>;
}

/// Unauthenticated HTTP GET health probe
#[mockall::automock]
#[async_trait::async_trait]
pub trait HealthProber: Send + Sync {
    async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome;
}
