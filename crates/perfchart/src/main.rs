//! Main entry point for perfchart.

use perfchart::{load_config, run};
use perfchart_common::{init_logging, LoggingConfig};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let loaded = load_config();

    // Logging settings live in the configuration, so a bad file still gets default logging.
    let logging = loaded
        .as_ref()
        .map(|config| config.logging.to_logging_config())
        .unwrap_or_else(|_| LoggingConfig::default());
    if let Err(e) = init_logging(&logging) {
        eprintln!("perfchart: {e}");
        return ExitCode::FAILURE;
    }

    let result = loaded.and_then(run);
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_missing_input() {
                error!("{e}. No charts were generated.");
            } else {
                error!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
