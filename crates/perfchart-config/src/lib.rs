//! # Perfchart Config
//!
//! Type-safe configuration management for perfchart.
//!
//! This crate provides the configuration schema, its defaults, YAML loading,
//! and validation. Every section is optional in the file; missing values fall
//! back to the defaults in [`defaults`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
