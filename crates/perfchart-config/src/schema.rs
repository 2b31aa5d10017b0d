//! Configuration schema definitions using serde.

use perfchart_common::{LogFormat, LoggingConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for perfchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Benchmark results CSV.
    pub input_path: PathBuf,
    /// Directory receiving the rendered charts.
    pub output_dir: PathBuf,
    /// Chart rendering settings.
    pub chart: ChartSettings,
    /// How repeated (size, algorithm) measurements are handled.
    pub duplicates: DuplicatePolicy,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Benchmark generator settings.
    pub bench: BenchSettings,
}

/// Chart rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether to draw the light background grid.
    pub show_grid: bool,
    /// Background color in `#RRGGBB` form.
    pub background_color: String,
    /// Font family for all text.
    pub font_family: String,
    /// Title font size.
    pub title_font_size: u32,
    /// Axis description font size.
    pub axis_font_size: u32,
    /// Stroke width of each series line.
    pub line_width: u32,
    /// Radius of the point markers.
    pub marker_size: u32,
}

/// Policy for several measurements of the same algorithm at the same input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Abort the run with a duplicate measurement error.
    #[default]
    Fail,
    /// Plot the arithmetic mean of the measurements.
    Mean,
}

/// Benchmark generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchSettings {
    /// Input sizes to measure, in run order.
    pub sizes: Vec<usize>,
    /// Seed for the random vectors; a fresh seed per run when absent.
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Log level filter directive.
    pub level: String,
    /// Console record layout.
    pub format: LogFormat,
    /// Whether records include the emitting module.
    pub include_targets: bool,
    /// Append records to this file instead of stdout.
    pub file: Option<String>,
}

impl LoggingSettings {
    /// Converts to the subscriber configuration used by `init_logging`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            include_targets: self.include_targets,
            file_path: self.file.clone(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::ConfigValidator::validate(self)
    }
}
