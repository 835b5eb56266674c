//! Advertised address selection

use std::net::Ipv4Addr;

use crate::traits::NetworkInspector;
use shared::{ServiceId, service_debug};

/// Whether other machines could plausibly reach us at `ip`
pub fn is_advertisable(ip: &Ipv4Addr) -> bool {
    !(ip.is_link_local() || ip.is_loopback() || ip.is_unspecified())
}

/// First advertisable candidate, loopback when there is none
pub fn select_advertised_ip(candidates: &[Ipv4Addr]) -> Ipv4Addr {
    candidates
        .iter()
        .copied()
        .find(is_advertisable)
        .unwrap_or(Ipv4Addr::LOCALHOST)
}

/// Ask the inspector for candidates; any failure falls back to loopback silently
pub fn detect_advertised_ip<N: NetworkInspector + ?Sized>(inspector: &N) -> Ipv4Addr {
    match inspector.ipv4_candidates() {
        Ok(candidates) => select_advertised_ip(&candidates),
        Err(e) => {
            service_debug!(ServiceId::current(), "Address detection failed: {}", e);
            Ipv4Addr::LOCALHOST
        }
    }
}
