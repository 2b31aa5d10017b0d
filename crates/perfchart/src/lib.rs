//! # Perfchart
//!
//! Line charts comparing sorting algorithm benchmark results.
//!
//! This is the application crate: it wires the configuration, the chart
//! manager, and the plotters renderer together for the `perfchart` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
