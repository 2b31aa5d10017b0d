//! # Perfchart Bench
//!
//! Measures insertion sort, merge sort, and quick sort on ascending,
//! descending, and random vectors of each configured size, and writes one
//! results row per measurement in the table layout `perfchart` reads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod runner;
pub mod sorts;
pub mod vectors;

pub use runner::*;
pub use sorts::*;
pub use vectors::*;
