//! Shared types for the payroll data structures workspace
//!
//! Logging setup, the service identity used to tag log events, and the HTTP
//! contract of the data structures API.

pub mod api;
pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::ServiceId;
