//! reqwest backed health prober

use async_trait::async_trait;
use std::time::Duration;

use crate::config::ProbeTarget;
use crate::error::{DeployError, DeployResult};
use crate::traits::{HealthProber, ProbeOutcome};
use shared::{ServiceId, service_debug};

/// Issues plain GET requests; any 2xx counts as healthy
#[derive(Clone)]
pub struct RealHttpProber {
    client: reqwest::Client,
}

impl RealHttpProber {
    pub fn new(timeout: Duration) -> DeployResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeployError::config("probe_timeout", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HealthProber for RealHttpProber {
    async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        service_debug!(ServiceId::current(), "🩺 Probing {}", target);

        match self.client.get(target.url.clone()).send().await {
            Ok(response) if response.status().is_success() => ProbeOutcome::Healthy {
                status: response.status().as_u16(),
            },
            Ok(response) => ProbeOutcome::Unhealthy {
                reason: format!("HTTP {}", response.status()),
            },
            Err(e) if e.is_timeout() => ProbeOutcome::Unhealthy {
                reason: "request timed out".to_string(),
            },
            Err(e) if e.is_connect() => ProbeOutcome::Unhealthy {
                reason: "connection refused".to_string(),
            },
            Err(e) => ProbeOutcome::Unhealthy {
                reason: e.to_string(),
            },
        }
    }
}
