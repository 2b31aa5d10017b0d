//! Timed benchmark runs written as a results table.

use crate::sorts::{sort_fn, SortFn};
use crate::vectors::VectorKind;
use fastrand::Rng;
use perfchart_common::{Algorithm, PerfChartError, Result};
use perfchart_config::BenchSettings;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// One results row, serialized with the table's column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchRecord {
    /// Algorithm identifier.
    #[serde(rename = "algoritmo")]
    pub algorithm: &'static str,
    /// Input-vector category.
    #[serde(rename = "tipo_vetor")]
    pub category: &'static str,
    /// Number of elements sorted.
    #[serde(rename = "tamanho_n")]
    pub input_size: usize,
    /// Wall-clock time of the sort in seconds.
    #[serde(rename = "tempo_s")]
    pub elapsed_seconds: f64,
}

/// Sorts `data` in place and returns the elapsed seconds.
pub fn time_sort(sort: SortFn, data: &mut [i32]) -> f64 {
    let start = Instant::now();
    sort(data);
    start.elapsed().as_secs_f64()
}

/// Runs every (size, vector kind, algorithm) combination.
pub struct BenchRunner {
    settings: BenchSettings,
}

impl BenchRunner {
    /// Creates a runner for the given settings.
    pub const fn new(settings: BenchSettings) -> Self {
        Self { settings }
    }

    /// Writes one CSV row per measurement to `writer` and returns the row count.
    ///
    /// Each algorithm sorts its own copy of the same generated vector. Rows are
    /// flushed as they are written so an interrupted run keeps what it measured.
    pub fn run<W: io::Write>(&self, writer: W) -> Result<usize> {
        let mut rng = self.settings.seed.map_or_else(Rng::new, Rng::with_seed);
        let mut table = csv::Writer::from_writer(writer);
        let mut written = 0;

        for &n in &self.settings.sizes {
            info!("Measuring n = {n}");

            for kind in VectorKind::ALL {
                let original = kind.generate(n, &mut rng);
                let mut work = original.clone();

                for algorithm in Algorithm::ALL {
                    work.copy_from_slice(&original);
                    let elapsed_seconds = time_sort(sort_fn(algorithm), &mut work);
                    debug!(%algorithm, %kind, n, elapsed_seconds, "Measured");

                    table
                        .serialize(BenchRecord {
                            algorithm: algorithm.id(),
                            category: kind.label(),
                            input_size: n,
                            elapsed_seconds,
                        })
                        .map_err(|e| {
                            PerfChartError::data_with_source("failed to write results row", e)
                        })?;
                    table.flush()?;
                    written += 1;
                }
            }
        }

        Ok(written)
    }

    /// Runs the benchmark into a new results file at `path`.
    pub fn run_to_file(&self, path: &Path) -> Result<usize> {
        info!("Writing benchmark results to '{}'", path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let rows = self.run(File::create(path)?)?;
        info!("Finished! {rows} measurement(s) saved in {}", path.display());
        Ok(rows)
    }
}
