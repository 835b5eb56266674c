//! HTTP layer: handlers grouped by resource

pub mod handlers;
