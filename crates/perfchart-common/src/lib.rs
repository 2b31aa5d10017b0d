//! # Perfchart Common
//!
//! Shared types, utilities, and common functionality for perfchart.
//!
//! This crate provides the foundational types (the algorithm table, chart
//! modes), the error type, and the logging bootstrap used across all other
//! crates in the perfchart workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PerfChartError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
pub use utils::*;
