//! `docker compose` backed container orchestrator

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{DeployError, DeployResult};
use crate::traits::ContainerOrchestrator;
use shared::{ServiceId, service_debug};

/// Runs the docker CLI against a single compose file
pub struct RealDockerCompose {
    /// Executable to invoke, `docker` unless overridden
    program: String,
    compose_file: PathBuf,
    project_dir: Option<PathBuf>,
}

impl RealDockerCompose {
    pub fn new(compose_file: impl Into<PathBuf>) -> Self {
        Self {
            program: "docker".to_string(),
            compose_file: compose_file.into(),
            project_dir: None,
        }
    }

    /// Configure working directory (fluent API)
    pub fn with_project_dir(mut self, project_dir: Option<PathBuf>) -> Self {
        self.project_dir = project_dir;
        self
    }

    /// Configure the executable (fluent API)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = &self.project_dir {
            cmd.current_dir(dir);
        }
        cmd.kill_on_drop(true);
        cmd
    }

    fn compose_command(&self, args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.arg("compose").arg("-f").arg(&self.compose_file).args(args);
        service_debug!(
            ServiceId::current(),
            "Running {} compose -f {} {}",
            self.program,
            self.compose_file.display(),
            args.join(" ")
        );
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> DeployError {
        DeployError::CommandSpawn {
            program: self.program.clone(),
            source,
        }
    }
}

#[async_trait]
impl ContainerOrchestrator for RealDockerCompose {
    async fn ensure_running(&self) -> DeployResult<()> {
        let output = self
            .command()
            .arg("info")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DeployError::OrchestratorUnavailable {
                message: format!("could not run `{} info`: {}", self.program, e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("daemon not reachable")
                .trim()
                .to_string();
            Err(DeployError::OrchestratorUnavailable { message })
        }
    }

    async fn build_and_start(&self) -> DeployResult<()> {
        // Build output streams straight to the user's terminal
        let status = self
            .compose_command(&["up", "-d", "--build"])
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            Ok(())
        } else {
            Err(DeployError::BuildFailed {
                code: status.code(),
            })
        }
    }

    async fn status(&self) -> DeployResult<String> {
        let output = self
            .compose_command(&["ps"])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
        } else {
            Err(DeployError::StatusFailed {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
