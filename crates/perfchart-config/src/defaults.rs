//! Default values for every configuration section.

use crate::schema::{BenchSettings, ChartSettings, Config, DuplicatePolicy, LoggingSettings};
use perfchart_common::LogFormat;
use std::path::PathBuf;

/// Results file read when no configuration overrides it.
pub const DEFAULT_INPUT_PATH: &str = "resultados.csv";

/// Output directory used when no configuration overrides it.
pub const DEFAULT_OUTPUT_DIR: &str = "graficos";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "perfchart.yaml";

/// Input sizes measured by the benchmark generator.
pub const DEFAULT_BENCH_SIZES: [usize; 5] = [1000, 5000, 10000, 20000, 50000];

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chart: ChartSettings::default(),
            duplicates: DuplicatePolicy::default(),
            logging: LoggingSettings::default(),
            bench: BenchSettings::default(),
        }
    }
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_BENCH_SIZES.to_vec(),
            seed: None,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            show_grid: true,
            background_color: "#ffffff".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
            axis_font_size: 18,
            line_width: 2,
            marker_size: 4,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            include_targets: false,
            file: None,
        }
    }
}
