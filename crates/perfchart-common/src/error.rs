//! Error types and utilities for perfchart

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for perfchart operations
pub type Result<T> = std::result::Result<T, PerfChartError>;

/// Main error type for perfchart operations
#[derive(Error, Debug)]
pub enum PerfChartError {
    /// The benchmark results file does not exist
    #[error("Input file '{}' not found", path.display())]
    MissingInputFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed results table
    #[error("Data error: {message}")]
    Data {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// More than one measurement for the same size and algorithm
    #[error(
        "Duplicate measurement for {algorithm} at n = {input_size} in category '{category}'"
    )]
    DuplicateMeasurement {
        /// Input-vector category
        category: String,
        /// Algorithm identifier
        algorithm: String,
        /// Input size
        input_size: u64,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PerfChartError {
    /// Create a new missing input file error
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInputFile { path: path.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error with source
    pub fn data_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Data {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this is the fatal missing-input condition
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInputFile { .. })
    }
}

/// Convert from serde_yaml::Error to PerfChartError
impl From<serde_yaml::Error> for PerfChartError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to PerfChartError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PerfChartError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let missing = PerfChartError::missing_input("resultados.csv");
        assert!(missing.is_missing_input());
        assert_eq!(missing.to_string(), "Input file 'resultados.csv' not found");

        let config_error = PerfChartError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));
        assert!(!config_error.is_missing_input());

        let validation_error = PerfChartError::validation_field("Invalid width", "chart.width");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid width"));
    }

    #[test]
    fn test_duplicate_measurement_display() {
        let error = PerfChartError::DuplicateMeasurement {
            category: "Random".to_string(),
            algorithm: "QuickSort".to_string(),
            input_size: 1000,
        };
        assert_eq!(
            error.to_string(),
            "Duplicate measurement for QuickSort at n = 1000 in category 'Random'"
        );
    }

    #[test]
    fn test_error_with_source() {
        let wrapped_error = PerfChartError::data_with_source(
            "Failed to parse row",
            io::Error::new(io::ErrorKind::InvalidData, "bad float"),
        );

        assert!(wrapped_error.to_string().contains("Failed to parse row"));
        assert!(wrapped_error.source().is_some());

        let graph_error = PerfChartError::graph("no series");
        assert!(graph_error.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error: PerfChartError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let error: PerfChartError = yaml_error.into();

        assert!(error.to_string().contains("Configuration error"));
        assert!(error.source().is_some());
    }
}
