//! Centralized logging configuration for hedge_bot
//!
//! This module provides structured logging using the `tracing` crate with:
//! - JSON formatted output for production (parseable by log aggregation tools)
//! - Pretty-print format for development (controlled by `LOG_FORMAT=pretty`)
//! - Configurable log levels via `RUST_LOG` environment variable
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUST_LOG` | `hedge_bot=info` | Log level filter (standard tracing format) |
//! | `LOG_FORMAT` | `json` | Output format: `json` or `pretty` |

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt as ts_fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

/// Flag to track if logging has been initialized (prevents double-init)
static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Default log level when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "hedge_bot=info";

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter string (e.g., "hedge_bot=debug")
    pub level_filter: String,
    /// Use pretty format instead of JSON
    pub use_pretty_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level_filter: DEFAULT_LOG_LEVEL.to_string(),
            use_pretty_format: false,
        }
    }
}

impl LoggingConfig {
    /// Create a LoggingConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `RUST_LOG`: Log level filter (defaults to `hedge_bot=info`)
    /// - `LOG_FORMAT`: `pretty` for human-readable, else JSON
    pub fn from_env() -> Self {
        let level_filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let use_pretty_format = env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "pretty")
            .unwrap_or(false);

        Self {
            level_filter,
            use_pretty_format,
        }
    }
}

/// Initialize the logging system with default configuration from environment.
///
/// This function will not panic if called multiple times; subsequent calls
/// are no-ops.
pub fn init_logging() {
    init_logging_with_config(LoggingConfig::from_env());
}

/// Initialize the logging system with a specific configuration.
///
/// # Arguments
///
/// * `config` - The logging configuration to use
pub fn init_logging_with_config(config: LoggingConfig) {
    // Prevent double initialization
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env_filter = EnvFilter::try_new(&config.level_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    if config.use_pretty_format {
        // Human-readable format for development
        tracing_subscriber::registry()
            .with(
                ts_fmt::layer()
                    .pretty()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    } else {
        // JSON format for production (default)
        tracing_subscriber::registry()
            .with(
                ts_fmt::layer()
                    .json()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true)
                    .with_current_span(true),
            )
            .with(env_filter)
            .init();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level_filter, DEFAULT_LOG_LEVEL);
        assert!(!config.use_pretty_format);
    }

    #[test]
    fn test_double_init_is_a_noop() {
        init_logging_with_config(LoggingConfig::default());
        // Second call must not panic on the already-set global subscriber
        init_logging_with_config(LoggingConfig::default());
    }
}
