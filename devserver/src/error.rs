//! Dev server error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevServerError {
    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartupFailed { address: String, message: String },

    #[error("Server task ended abnormally: {0}")]
    ServerTask(String),

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Static root not accessible: {path}")]
    RootNotAccessible { path: String },

    #[error("Failed to open browser with `{program}`: {message}")]
    BrowserLaunch { program: String, message: String },

    #[error("Network address detection failed: {0}")]
    AddressDetection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DevServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn startup(address: impl ToString, err: impl std::fmt::Display) -> Self {
        Self::ServerStartupFailed {
            address: address.to_string(),
            message: err.to_string(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::StaticFileNotFound { path: path.into() }
    }

    pub fn access_denied(path: impl Into<String>) -> Self {
        Self::AccessDenied { path: path.into() }
    }
}

pub type DevServerResult<T> = Result<T, DevServerError>;
