//! API server error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiServerError {
    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartupFailed { address: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ApiServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn startup(address: impl ToString, err: impl std::fmt::Display) -> Self {
        Self::ServerStartupFailed {
            address: address.to_string(),
            message: err.to_string(),
        }
    }
}

pub type ApiServerResult<T> = Result<T, ApiServerError>;
