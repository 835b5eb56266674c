//! Bind-attempt port check

use std::net::{Ipv4Addr, TcpListener};

use crate::traits::PortProbe;
use shared::{ServiceId, service_debug};

/// Treats any bind error on `0.0.0.0:port` as "in use"
#[derive(Debug, Clone, Copy, Default)]
pub struct RealPortProbe;

impl PortProbe for RealPortProbe {
    fn is_available(&self, port: u16) -> bool {
        match TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)) {
            Ok(_listener) => true,
            Err(e) => {
                service_debug!(ServiceId::current(), "Port {} unavailable: {}", port, e);
                false
            }
        }
    }
}
