//! Service implementations
//!
//! Real implementations of the deployer's service traits.

pub mod docker_compose;
pub mod http_prober;

#[cfg(test)]
mod tests;

pub use docker_compose::RealDockerCompose;
pub use http_prober::RealHttpProber;
