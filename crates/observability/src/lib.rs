//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&config::ObservabilityConfig::from_env());
}

/// Environment-driven logging configuration.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
