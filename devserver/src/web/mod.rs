//! HTTP surface of the preview site

pub mod handlers;
