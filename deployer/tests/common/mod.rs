//! Test helpers for deploy sequence tests
#![allow(dead_code)]

use std::time::Duration;

use deployer::config::{DEFAULT_API_HEALTH_URL, DEFAULT_WEB_URL};
use deployer::traits::{MockContainerOrchestrator, MockHealthProber};
use deployer::{DeployConfig, DeployError, DeployReport, DeployResult, Deployer, ProbeOutcome};

/// Default config with the startup wait disabled
pub fn fast_config() -> DeployConfig {
    DeployConfig::new(DEFAULT_WEB_URL, DEFAULT_API_HEALTH_URL)
        .unwrap()
        .with_startup_delay(Duration::ZERO)
}

/// Orchestrator whose every step succeeds exactly `runs` times
pub fn healthy_orchestrator(runs: usize) -> MockContainerOrchestrator {
    let mut orchestrator = MockContainerOrchestrator::new();
    orchestrator
        .expect_ensure_running()
        .times(runs)
        .returning(|| Ok(()));
    orchestrator
        .expect_build_and_start()
        .times(runs)
        .returning(|| Ok(()));
    orchestrator
        .expect_status()
        .times(runs)
        .returning(|| Ok("NAME   STATUS\napi    Up\nweb    Up".to_string()));
    orchestrator
}

/// Orchestrator with no running daemon; nothing past the check may be called
pub fn absent_orchestrator() -> MockContainerOrchestrator {
    let mut orchestrator = MockContainerOrchestrator::new();
    orchestrator.expect_ensure_running().times(1).returning(|| {
        Err(DeployError::OrchestratorUnavailable {
            message: "Cannot connect to the Docker daemon".to_string(),
        })
    });
    orchestrator.expect_build_and_start().times(0);
    orchestrator.expect_status().times(0);
    orchestrator
}

/// Prober answering every target with the same outcome, `calls` times in total
pub fn prober_with(outcome: ProbeOutcome, calls: usize) -> MockHealthProber {
    let mut prober = MockHealthProber::new();
    prober
        .expect_probe()
        .times(calls)
        .returning(move |_| outcome.clone());
    prober
}

/// Run the sequence once, capturing console output
pub async fn run_captured(
    deployer: &Deployer<MockContainerOrchestrator, MockHealthProber>,
) -> (DeployResult<DeployReport>, String) {
    let mut out = Vec::new();
    let result = deployer.run(&mut out).await;
    (result, String::from_utf8_lossy(&out).into_owned())
}
