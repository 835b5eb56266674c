//! REST API over a process-wide stack and queue
//!
//! Every endpoint is a GET returning a JSON envelope, so the API can be
//! exercised straight from a browser address bar.

pub mod config;
pub mod error;
pub mod server_impl;
pub mod state;
pub mod web;

pub use config::ApiServerConfig;
pub use error::{ApiServerError, ApiServerResult};
pub use server_impl::ApiServer;
pub use state::ApiServerState;
