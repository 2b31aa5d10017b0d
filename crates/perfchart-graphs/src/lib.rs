//! # Perfchart Graphs
//!
//! Benchmark table loading, pivoting, and line-chart rendering.
//!
//! The pipeline runs in four stages: [`dataset`] loads and cleans the
//! results table, [`pivot`] filters it to one category and algorithm subset
//! and reshapes it into a chart table, [`renderer`] draws that table with
//! plotters, and [`manager`] drives the stages for every category and mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod manager;
pub mod pivot;
pub mod renderer;
pub mod types;

pub use dataset::*;
pub use manager::*;
pub use pivot::*;
pub use renderer::*;
pub use types::*;
