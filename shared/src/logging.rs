//! Shared logging utilities for consistent tracing across all binaries

use crate::errors::{SharedError, SharedResult};
use crate::types::ServiceId;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a log level name, returning it lowercased
pub fn parse_log_level(log_level: &str) -> SharedResult<String> {
    let level = log_level.trim().to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(SharedError::invalid_config("log_level", log_level))
    }
}

/// Build the `EnvFilter` directive string for a service
pub fn filter_directives(service: &ServiceId, base_level: &str) -> String {
    let mut directives: Vec<String> = service
        .log_targets()
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect();

    match service {
        ServiceId::ApiServer | ServiceId::DevServer => {
            directives.push(format!("tower_http={base_level}"));
            directives.push("hyper=warn".to_string());
        }
        ServiceId::Deployer => {
            directives.push("reqwest=warn".to_string());
            directives.push("hyper=warn".to_string());
        }
        ServiceId::Embedded => {}
    }

    directives.join(",")
}

/// Initialize the tracing subscriber for the given service and log level
pub fn init_tracing(service: &ServiceId, log_level: &str) -> SharedResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = parse_log_level(log_level)?;
    let env_filter = EnvFilter::try_new(filter_directives(service, &base_level))
        .map_err(|e| SharedError::LoggingInit { message: e.to_string() })?;

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| SharedError::LoggingInit { message: e.to_string() })
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-aware info logging
#[macro_export]
macro_rules! service_info {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::info!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware warning logging
#[macro_export]
macro_rules! service_warn {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware error logging
#[macro_export]
macro_rules! service_error {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::error!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware debug logging
#[macro_export]
macro_rules! service_debug {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(service_id: &ServiceId, details: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service_id: &ServiceId, reason: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service_id: &ServiceId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = %service_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for non-fatal problems
pub fn log_warning(service_id: &ServiceId, context: &str, details: &str) {
    warn!(
        service = %service_id,
        timestamp = format_timestamp(),
        "⚠️  {}: {}",
        context,
        details
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service_id: &ServiceId, message: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), "info");
        assert_eq!(parse_log_level(" DEBUG ").unwrap(), "debug");
        assert!(matches!(
            parse_log_level("loud"),
            Err(SharedError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_filter_directives_per_service() {
        let api = filter_directives(&ServiceId::ApiServer, "debug");
        assert!(api.contains("apiserver=debug"));
        assert!(api.contains("structures=debug"));
        assert!(api.contains("tower_http=debug"));

        let deploy = filter_directives(&ServiceId::Deployer, "info");
        assert!(deploy.starts_with("deployer=info"));
        assert!(deploy.contains("reqwest=warn"));
        assert!(!deploy.contains("apiserver"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }
}
