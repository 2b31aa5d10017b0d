//! Main entry point for perfchart-bench.

use perfchart_bench::BenchRunner;
use perfchart_common::{init_logging, LoggingConfig};
use perfchart_config::ConfigLoader;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let loaded = ConfigLoader::default().load_or_default();

    let logging = loaded
        .as_ref()
        .map(|config| config.logging.to_logging_config())
        .unwrap_or_else(|_| LoggingConfig::default());
    if let Err(e) = init_logging(&logging) {
        eprintln!("perfchart-bench: {e}");
        return ExitCode::FAILURE;
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match BenchRunner::new(config.bench).run_to_file(&config.input_path) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
