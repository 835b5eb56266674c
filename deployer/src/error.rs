//! Deployer error types

use std::process::ExitCode;

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Docker is not running: {message}")]
    OrchestratorUnavailable { message: String },

    #[error("Failed to build and start containers (exit code {})", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    BuildFailed { code: Option<i32> },

    #[error("Container status query failed: {message}")]
    StatusFailed { message: String },

    #[error("Failed to run `{program}`: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {field}: {message}")]
    ConfigurationError { field: String, message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DeployError {
    pub fn config(field: impl Into<String>, message: impl ToString) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

pub type DeployResult<T> = Result<T, DeployError>;

/// Process exit status for a finished deploy: any error exits 1
pub fn exit_code<T>(result: &DeployResult<T>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
