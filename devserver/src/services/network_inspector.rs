//! Local address discovery

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use crate::error::{DevServerError, DevServerResult};
use crate::traits::NetworkInspector;
use shared::{ServiceId, service_debug};

/// Public address used only to pick a route; connecting a UDP socket sends nothing
const ROUTE_PROBE_ADDR: &str = "8.8.8.8:80";

/// Lists every interface IPv4 address, the default-route address first
#[derive(Debug, Clone, Copy, Default)]
pub struct RealNetworkInspector;

impl RealNetworkInspector {
    pub fn new() -> Self {
        Self
    }
}

/// IPv4 address of the interface holding the default route, if there is one
fn default_route_ip() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(ROUTE_PROBE_ADDR).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(_) => None,
    }
}

/// `preferred` first, then the IPv4 entries of `addrs` in order, without duplicates
pub fn merge_candidates<I>(preferred: Option<Ipv4Addr>, addrs: I) -> Vec<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut candidates: Vec<Ipv4Addr> = preferred.into_iter().collect();
    for addr in addrs {
        if let IpAddr::V4(ip) = addr {
            if !candidates.contains(&ip) {
                candidates.push(ip);
            }
        }
    }
    candidates
}

impl NetworkInspector for RealNetworkInspector {
    fn ipv4_candidates(&self) -> DevServerResult<Vec<Ipv4Addr>> {
        let route = default_route_ip();

        match if_addrs::get_if_addrs() {
            Ok(interfaces) => Ok(merge_candidates(
                route,
                interfaces.iter().map(|iface| iface.ip()),
            )),
            Err(e) if route.is_some() => {
                service_debug!(ServiceId::current(), "Interface enumeration failed: {}", e);
                Ok(merge_candidates(route, []))
            }
            Err(e) => Err(DevServerError::AddressDetection(e.to_string())),
        }
    }
}
