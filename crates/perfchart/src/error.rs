//! Application-wide error types using thiserror.

use perfchart_common::PerfChartError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[source] PerfChartError),

    /// Chart generation failed.
    #[error(transparent)]
    Chart(#[from] PerfChartError),
}

impl AppError {
    /// Whether the run stopped because the results file is absent.
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::Chart(e) if e.is_missing_input())
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_reported_verbatim() {
        let error = AppError::from(PerfChartError::missing_input("resultados.csv"));
        assert!(error.is_missing_input());
        assert_eq!(error.to_string(), "Input file 'resultados.csv' not found");
    }

    #[test]
    fn test_config_error_is_not_missing_input() {
        let error = AppError::Config(PerfChartError::config("bad yaml"));
        assert!(!error.is_missing_input());
        assert!(error.to_string().starts_with("Configuration error"));
    }
}
