//! Logging subsystem.
//!
//! Thin wrapper over `tracing-subscriber` so host applications get a
//! single initialization call. Resolvers log capability denials at
//! debug/info and platform inconsistencies at warn; none of them log the
//! raw identifier values themselves.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod level;

pub use error::LoggingError;
pub use level::LogLevel;

/// Configuration for the logging subsystem.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level to emit.
    pub level: LogLevel,
    /// Include the target module path in each line.
    pub with_target: bool,
    /// Emit JSON lines instead of human-readable output.
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: LogLevel::Info,
            with_target: true,
            json_format: false,
        }
    }
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        LogConfig {
            level,
            ..Default::default()
        }
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }
}

/// Initialize logging with the default configuration.
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with_config(LogConfig::default())
}

/// Initialize logging with a custom configuration.
///
/// `RUST_LOG` overrides the configured level when set. Fails if a global
/// subscriber is already installed.
pub fn init_logging_with_config(config: LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    if config.json_format {
        let layer = fmt::layer().json().with_target(config.with_target);
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))
    } else {
        let layer = fmt::layer().with_target(config.with_target);
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new(LogLevel::Debug)
            .with_target(false)
            .json_format(true);
        assert_eq!(config.level, LogLevel::Debug);
        assert!(!config.with_target);
        assert!(config.json_format);
    }

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert!(config.with_target);
        assert!(!config.json_format);
    }
}
