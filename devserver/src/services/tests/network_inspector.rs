//! Tests for RealNetworkInspector and candidate merging

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::network::select_advertised_ip;
use crate::services::RealNetworkInspector;
use crate::services::network_inspector::merge_candidates;
use crate::traits::NetworkInspector;

fn lan_host_addrs() -> Vec<IpAddr> {
    vec![
        IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(Ipv6Addr::LOCALHOST),
        IpAddr::V4(Ipv4Addr::new(169, 254, 7, 1)),
        IpAddr::V4(Ipv4Addr::new(10, 20, 0, 4)),
        IpAddr::V4(Ipv4Addr::new(192, 168, 50, 9)),
    ]
}

#[test]
fn test_every_interface_address_is_a_candidate() {
    let candidates = merge_candidates(None, lan_host_addrs());

    assert_eq!(
        candidates,
        vec![
            Ipv4Addr::LOCALHOST,
            Ipv4Addr::new(169, 254, 7, 1),
            Ipv4Addr::new(10, 20, 0, 4),
            Ipv4Addr::new(192, 168, 50, 9),
        ]
    );
}

#[test]
fn test_default_route_address_comes_first_once() {
    let route = Ipv4Addr::new(192, 168, 50, 9);
    let candidates = merge_candidates(Some(route), lan_host_addrs());

    assert_eq!(candidates[0], route);
    assert_eq!(candidates.iter().filter(|ip| **ip == route).count(), 1);
    assert_eq!(candidates.len(), 4);
}

#[test]
fn test_lan_address_found_without_default_route() {
    let candidates = merge_candidates(None, lan_host_addrs());

    assert_eq!(select_advertised_ip(&candidates), Ipv4Addr::new(10, 20, 0, 4));
}

#[test]
fn test_host_enumeration_includes_loopback() {
    let candidates = RealNetworkInspector::new().ipv4_candidates().unwrap();

    assert!(candidates.contains(&Ipv4Addr::LOCALHOST));
}
