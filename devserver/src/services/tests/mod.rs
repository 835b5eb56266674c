//! Service-specific tests

mod network_inspector;
