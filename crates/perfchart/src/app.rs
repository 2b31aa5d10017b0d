//! Application entry points shared by the binary and its tests.

use crate::error::{AppError, AppResult};
use perfchart_config::{Config, ConfigLoader};
use perfchart_graphs::{ChartManager, ChartStyle, LineChartRenderer, RunReport};
use tracing::info;

/// Loads `perfchart.yaml` from the working directory, or the defaults when it is absent.
pub fn load_config() -> AppResult<Config> {
    ConfigLoader::default()
        .load_or_default()
        .map_err(AppError::Config)
}

/// Renders every chart described by `config` with the plotters line renderer.
pub fn run(config: Config) -> AppResult<RunReport> {
    info!(
        input = %config.input_path.display(),
        output = %config.output_dir.display(),
        "Starting perfchart"
    );

    let renderer = LineChartRenderer::new(ChartStyle::from(&config.chart));
    let manager = ChartManager::new(config, renderer);
    Ok(manager.generate_all()?)
}
