//! Structured logging infrastructure for perfchart

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{PerfChartError, Result};

/// Output format of the console log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Single-line records without timestamps, suited to interactive runs
    #[default]
    Compact,
    /// The default tracing-subscriber record layout
    Full,
    /// Multi-line records with colors
    Pretty,
}

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "perfchart_graphs=trace")
    pub level: String,
    /// Record layout
    pub format: LogFormat,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Optional file path for log output instead of stdout
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            include_targets: false,
            file_path: None,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level).map_err(|e| {
        PerfChartError::config_with_source(format!("invalid log level '{}'", config.level), e)
    })?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let init = match (config.format, &config.file_path) {
        (LogFormat::Compact, None) => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(config.include_targets),
            )
            .try_init(),
        (LogFormat::Full, None) => registry
            .with(fmt::layer().with_target(config.include_targets))
            .try_init(),
        (LogFormat::Pretty, None) => registry
            .with(fmt::layer().pretty().with_target(config.include_targets))
            .try_init(),
        (_, Some(file_path)) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?;
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(config.include_targets)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .try_init()
        }
    };

    init.map_err(|e| PerfChartError::config_with_source("logging already initialized", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.file_path.is_none());
        assert!(!config.include_targets);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "perfchart=loud".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(PerfChartError::Config { .. })
        ));
    }
}
