//! Runtime validation of loaded configuration.

use crate::schema::{BenchSettings, ChartSettings, Config, LoggingSettings};
use perfchart_common::{parse_hex_color, PerfChartError, Result};
use std::ops::RangeInclusive;

/// Accepted image dimension, in pixels.
pub const DIMENSION_RANGE: RangeInclusive<u32> = 200..=4000;

/// Accepted font size, in points.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 6..=72;

/// Accepted benchmark input size.
pub const BENCH_SIZE_RANGE: RangeInclusive<usize> = 1..=1_000_000;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.input_path.as_os_str().is_empty() {
            return Err(PerfChartError::validation_field(
                "input path cannot be empty",
                "input_path",
            ));
        }

        if config.output_dir.as_os_str().is_empty() {
            return Err(PerfChartError::validation_field(
                "output directory cannot be empty",
                "output_dir",
            ));
        }

        Self::validate_chart(&config.chart)?;
        Self::validate_bench(&config.bench)?;
        Self::validate_logging(&config.logging)
    }

    fn validate_bench(bench: &BenchSettings) -> Result<()> {
        if bench.sizes.is_empty() {
            return Err(PerfChartError::validation_field(
                "at least one benchmark size is required",
                "bench.sizes",
            ));
        }

        if let Some(size) = bench.sizes.iter().find(|&&size| !BENCH_SIZE_RANGE.contains(&size)) {
            return Err(PerfChartError::validation_field(
                format!(
                    "bench.sizes must be between {} and {}, got {size}",
                    BENCH_SIZE_RANGE.start(),
                    BENCH_SIZE_RANGE.end()
                ),
                "bench.sizes",
            ));
        }

        Ok(())
    }

    fn validate_chart(chart: &ChartSettings) -> Result<()> {
        check_range("chart.width", chart.width, &DIMENSION_RANGE)?;
        check_range("chart.height", chart.height, &DIMENSION_RANGE)?;
        check_range("chart.title_font_size", chart.title_font_size, &FONT_SIZE_RANGE)?;
        check_range("chart.axis_font_size", chart.axis_font_size, &FONT_SIZE_RANGE)?;
        check_range("chart.line_width", chart.line_width, &(1..=20))?;
        check_range("chart.marker_size", chart.marker_size, &(0..=20))?;

        if parse_hex_color(&chart.background_color).is_none() {
            return Err(PerfChartError::validation_field(
                format!(
                    "background color '{}' must be a #RRGGBB hex color",
                    chart.background_color
                ),
                "chart.background_color",
            ));
        }

        if chart.font_family.trim().is_empty() {
            return Err(PerfChartError::validation_field(
                "font family cannot be empty",
                "chart.font_family",
            ));
        }

        Ok(())
    }

    fn validate_logging(logging: &LoggingSettings) -> Result<()> {
        // Per-target directives are left to the subscriber to parse.
        if logging.level.contains('=') {
            return Ok(());
        }

        if LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(PerfChartError::validation_field(
                format!("unknown log level '{}'", logging.level),
                "logging.level",
            ))
        }
    }
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PerfChartError::validation_field(
            format!(
                "{field} must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
            field,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_paths_are_rejected() {
        let mut config = Config::default();
        config.input_path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(PerfChartError::Validation { field: Some(ref f), .. }) if f == "input_path"
        ));

        let mut config = Config::default();
        config.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chart_ranges() {
        let mut config = Config::default();
        config.chart.width = 50;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chart.width"));

        let mut config = Config::default();
        config.chart.title_font_size = 200;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.chart.marker_size = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_background_color_must_be_hex() {
        let mut config = Config::default();
        config.chart.background_color = "white".to_string();
        assert!(config.validate().is_err());

        config.chart.background_color = "#FAFAFA".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bench_sizes() {
        let mut config = Config::default();
        config.bench.sizes.clear();
        assert!(config.validate().is_err());

        config.bench.sizes = vec![100, 0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("got 0"));

        config.bench.sizes = vec![10, 20];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_levels() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "perfchart_graphs=trace".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }
}
