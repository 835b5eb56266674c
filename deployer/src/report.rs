//! Human-readable deployment report

use std::io::Write;

use shared::api::EndpointCatalog;

use crate::config::{DeployConfig, ProbeTarget};
use crate::traits::ProbeOutcome;

/// Outcome of one health probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub target: ProbeTarget,
    pub outcome: ProbeOutcome,
}

/// Everything gathered after a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// `None` when the status query failed
    pub status_output: Option<String>,
    pub probes: Vec<ProbeResult>,
}

impl DeployReport {
    pub fn all_healthy(&self) -> bool {
        self.probes.iter().all(|p| p.outcome.is_healthy())
    }
}

/// Print the closing summary: URLs, endpoint catalog and follow-up commands
pub fn render_summary<W: Write>(out: &mut W, config: &DeployConfig) -> std::io::Result<()> {
    let api_base = config.api_base_url();
    let api_root = api_base.as_str().trim_end_matches('/').trim_end_matches("/api");

    writeln!(out)?;
    writeln!(out, "🎉 Deployment complete!")?;
    writeln!(out)?;
    writeln!(out, "📱 Web application: {}", config.web.url)?;
    writeln!(out, "🔌 API service:     {}", api_base)?;
    writeln!(out)?;
    writeln!(out, "📚 Available endpoints:")?;
    for (group, paths) in EndpointCatalog::standard().groups() {
        writeln!(out, "  {group}:")?;
        for path in paths {
            writeln!(out, "    {api_root}{path}")?;
        }
    }
    writeln!(out)?;

    let compose_file = config.compose_file.display();
    writeln!(out, "📋 View logs: docker compose -f {compose_file} logs -f")?;
    writeln!(out, "🛑 Stop:      docker compose -f {compose_file} down")?;
    Ok(())
}
