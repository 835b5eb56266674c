//! Runtime configuration for the API server

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{ApiServerError, ApiServerResult};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServerConfig {
    pub bind_address: SocketAddr,
    /// Maximum stack size, unlimited when `None`
    pub stack_capacity: Option<usize>,
    /// Maximum queue size, unlimited when `None`
    pub queue_capacity: Option<usize>,
}

impl ApiServerConfig {
    pub fn from_parts(
        host: &str,
        port: u16,
        stack_capacity: Option<usize>,
        queue_capacity: Option<usize>,
    ) -> ApiServerResult<Self> {
        let ip: IpAddr = host
            .parse()
            .map_err(|e| ApiServerError::config(format!("Invalid host '{host}': {e}")))?;

        for (name, capacity) in [("stack", stack_capacity), ("queue", queue_capacity)] {
            if capacity == Some(0) {
                return Err(ApiServerError::config(format!(
                    "{name} capacity must be at least 1"
                )));
            }
        }

        Ok(Self {
            bind_address: SocketAddr::new(ip, port),
            stack_capacity,
            queue_capacity,
        })
    }
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            stack_capacity: None,
            queue_capacity: None,
        }
    }
}
