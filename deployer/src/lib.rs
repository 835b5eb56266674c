//! One-shot container deployment with health checks
//!
//! Builds and starts the compose stack, waits for it to settle, then probes
//! the web app and API and prints a report.

pub mod config;
pub mod deploy;
pub mod error;
pub mod report;
pub mod services;
pub mod traits;

pub use config::{DeployConfig, ProbeTarget};
pub use deploy::Deployer;
pub use error::{DeployError, DeployResult, exit_code};
pub use report::{DeployReport, ProbeResult};
pub use traits::{ContainerOrchestrator, HealthProber, ProbeOutcome};
