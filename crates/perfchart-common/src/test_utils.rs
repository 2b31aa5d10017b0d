//! Test utilities and shared test helpers for perfchart.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` as a results CSV inside `dir` and return its path.
pub fn write_results_csv(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("resultados.csv");
    std::fs::write(&path, contents).expect("Failed to write results fixture");
    path
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Results tables for the documented scenarios, using the benchmark
/// program's own column names.
pub mod csv_fixtures {
    /// Three algorithms, category "Random", sizes 100/500/1000.
    pub fn three_algorithms_random() -> &'static str {
        concat!(
            "algoritmo,tipo_vetor,tamanho_n,tempo_s\n",
            "InsertionSort,Random,100,0.000120\n",
            "MergeSort,Random,100,0.000030\n",
            "QuickSort,Random,100,0.000020\n",
            "InsertionSort,Random,500,0.002900\n",
            "MergeSort,Random,500,0.000170\n",
            "QuickSort,Random,500,0.000110\n",
            "InsertionSort,Random,1000,0.011500\n",
            "MergeSort,Random,1000,0.000360\n",
            "QuickSort,Random,1000,0.000240\n",
        )
    }

    /// Only QuickSort rows, category "Sorted".
    pub fn quicksort_only_sorted() -> &'static str {
        concat!(
            "algoritmo,tipo_vetor,tamanho_n,tempo_s\n",
            "QuickSort,Sorted,100,0.000050\n",
            "QuickSort,Sorted,500,0.001100\n",
            "QuickSort,Sorted,1000,0.004300\n",
        )
    }

    /// Two categories, "Random" and "Reversed", all algorithms.
    pub fn random_and_reversed() -> &'static str {
        concat!(
            "algoritmo,tipo_vetor,tamanho_n,tempo_s\n",
            "InsertionSort,Random,100,0.000120\n",
            "MergeSort,Random,100,0.000030\n",
            "QuickSort,Random,100,0.000020\n",
            "InsertionSort,Reversed,100,0.000240\n",
            "MergeSort,Reversed,100,0.000028\n",
            "QuickSort,Reversed,100,0.000090\n",
            "InsertionSort,Random,1000,0.011500\n",
            "MergeSort,Random,1000,0.000360\n",
            "QuickSort,Random,1000,0.000240\n",
            "InsertionSort,Reversed,1000,0.023000\n",
            "MergeSort,Reversed,1000,0.000330\n",
            "QuickSort,Reversed,1000,0.008100\n",
        )
    }

    /// A zero-time row that is the only measurement at n = 10.
    pub fn zero_time_row() -> &'static str {
        concat!(
            "algoritmo,tipo_vetor,tamanho_n,tempo_s\n",
            "QuickSort,Random,10,0.000000\n",
            "QuickSort,Random,100,0.000020\n",
            "MergeSort,Random,100,0.000030\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// One CSV data line: (algorithm id, category, size, seconds).
    pub type RowTuple = (String, String, u64, f64);

    /// Strategy for algorithm identifiers, including unknown ones.
    pub fn algorithm_id_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("InsertionSort".to_string()),
            Just("MergeSort".to_string()),
            Just("QuickSort".to_string()),
            Just("BubbleSort".to_string()),
        ]
    }

    /// Strategy for elapsed times, with a sizeable share of zero and negative values.
    pub fn elapsed_seconds_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(0.0),
            -1.0f64..0.0,
            0.000_001f64..2.0,
        ]
    }

    /// Strategy for a single results row.
    pub fn row_strategy() -> impl Strategy<Value = RowTuple> {
        (
            algorithm_id_strategy(),
            prop_oneof![Just("Random".to_string()), Just("Sorted".to_string())],
            1u64..5_000,
            elapsed_seconds_strategy(),
        )
    }

    /// Render rows as CSV text with a header line.
    pub fn rows_to_csv(rows: &[RowTuple]) -> String {
        let mut out = String::from("algorithm,category,input_size,elapsed_seconds\n");
        for (algorithm, category, size, seconds) in rows {
            out.push_str(&format!("{algorithm},{category},{size},{seconds}\n"));
        }
        out
    }
}
