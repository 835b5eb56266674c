//! Service-specific tests
//!
//! Each real service has its own test file.
