//! The deploy sequence
//!
//! Linear steps with two fatal points: the daemon check and the build.
//! Everything after the build only produces warnings.

use std::io::Write;

use crate::config::DeployConfig;
use crate::error::{DeployError, DeployResult};
use crate::report::{DeployReport, ProbeResult, render_summary};
use crate::traits::{ContainerOrchestrator, HealthProber};
use shared::logging::{log_error, log_success, log_warning};
use shared::{ServiceId, service_info};

pub struct Deployer<O, P> {
    orchestrator: O,
    prober: P,
    config: DeployConfig,
}

impl<O, P> Deployer<O, P>
where
    O: ContainerOrchestrator,
    P: HealthProber,
{
    pub fn new(orchestrator: O, prober: P, config: DeployConfig) -> Self {
        Self {
            orchestrator,
            prober,
            config,
        }
    }

    /// Run every step, writing the console report to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> DeployResult<DeployReport> {
        let service_id = ServiceId::current();

        writeln!(out, "🚀 Deploying Payroll Data Structures stack")?;
        writeln!(out)?;

        writeln!(out, "🔍 Checking Docker...")?;
        if let Err(e) = self.orchestrator.ensure_running().await {
            writeln!(out, "❌ Docker is not running. Please start Docker and try again.")?;
            if let DeployError::OrchestratorUnavailable { message } = &e {
                writeln!(out, "   {message}")?;
            }
            log_error(service_id, "Docker check", &e);
            return Err(e);
        }
        writeln!(out, "✅ Docker is running")?;

        writeln!(
            out,
            "🔨 Building and starting containers ({})...",
            self.config.compose_file.display()
        )?;
        if let Err(e) = self.orchestrator.build_and_start().await {
            writeln!(out, "❌ Failed to build and start containers")?;
            log_error(service_id, "Container build", &e);
            return Err(e);
        }
        writeln!(out, "✅ Containers started")?;

        if !self.config.startup_delay.is_zero() {
            writeln!(
                out,
                "⏳ Waiting {}s for services to start...",
                self.config.startup_delay.as_secs()
            )?;
            tokio::time::sleep(self.config.startup_delay).await;
        }

        writeln!(out)?;
        writeln!(out, "📊 Container status:")?;
        let status_output = match self.orchestrator.status().await {
            Ok(status) => {
                writeln!(out, "{status}")?;
                Some(status)
            }
            Err(e) => {
                writeln!(out, "⚠️  Could not query container status: {e}")?;
                log_warning(service_id, "Container status", &e.to_string());
                None
            }
        };

        writeln!(out)?;
        writeln!(out, "🩺 Health checks:")?;
        let mut probes = Vec::with_capacity(2);
        for target in self.config.probes() {
            let outcome = self.prober.probe(target).await;
            if outcome.is_healthy() {
                writeln!(out, "✅ {} is responding ({outcome})", target.name)?;
            } else {
                writeln!(out, "⚠️  {} is not responding yet: {outcome}", target.name)?;
                log_warning(service_id, &target.name, &outcome.to_string());
            }
            probes.push(ProbeResult {
                target: target.clone(),
                outcome,
            });
        }

        render_summary(out, &self.config)?;

        let report = DeployReport {
            status_output,
            probes,
        };
        if report.all_healthy() {
            log_success(service_id, "All health checks passed");
        } else {
            service_info!(service_id, "Deployment finished with failing health checks");
        }
        Ok(report)
    }
}
