//! Filtering and reshaping of result rows into chart tables.

use crate::dataset::ResultRow;
use perfchart_common::{Algorithm, PerfChartError, Result};
use perfchart_config::DuplicatePolicy;
use std::collections::{BTreeMap, BTreeSet};

/// One input size and its per-algorithm times in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// Input size of this row.
    pub input_size: u64,
    /// One cell per table column; `None` when that algorithm was not measured at this size.
    pub cells: Vec<Option<f64>>,
}

/// Row-per-size, column-per-algorithm table for a single category.
///
/// Rows are sorted by input size ascending and columns follow
/// [`Algorithm`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    category: String,
    algorithms: Vec<Algorithm>,
    rows: Vec<ChartRow>,
}

impl ChartTable {
    /// Input-vector category the table was built for.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Table columns.
    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Table rows, ascending by input size.
    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    /// Measured `(input_size, ms)` points of one column, skipping gaps.
    pub fn series(&self, algorithm: Algorithm) -> Vec<(u64, f64)> {
        let Some(column) = self.algorithms.iter().position(|a| *a == algorithm) else {
            return Vec::new();
        };

        self.rows
            .iter()
            .filter_map(|row| row.cells[column].map(|ms| (row.input_size, ms)))
            .collect()
    }

    /// Cell value at `input_size` for `algorithm`.
    pub fn value(&self, input_size: u64, algorithm: Algorithm) -> Option<f64> {
        let column = self.algorithms.iter().position(|a| *a == algorithm)?;
        self.rows
            .iter()
            .find(|row| row.input_size == input_size)
            .and_then(|row| row.cells[column])
    }
}

/// Result of a pivot: a table to draw, or nothing for this combination.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotOutcome {
    /// At least one requested algorithm has data.
    Table(ChartTable),
    /// No row matched the category and algorithm subset.
    NoData,
}

/// Restricts `rows` to `category` and `algorithms` and reshapes them into a [`ChartTable`].
///
/// Rows whose algorithm identifier is unknown are ignored. Requested
/// algorithms without rows get no column. Several rows for the same size and
/// algorithm are resolved by `policy`.
pub fn pivot(
    rows: &[ResultRow],
    category: &str,
    algorithms: &[Algorithm],
    policy: DuplicatePolicy,
) -> Result<PivotOutcome> {
    let mut by_size: BTreeMap<u64, BTreeMap<Algorithm, Vec<f64>>> = BTreeMap::new();
    let mut present = BTreeSet::new();

    for row in rows.iter().filter(|row| row.category == category) {
        let Some(algorithm) = Algorithm::parse(&row.algorithm) else {
            continue;
        };
        if !algorithms.contains(&algorithm) {
            continue;
        }

        let samples = by_size
            .entry(row.input_size)
            .or_default()
            .entry(algorithm)
            .or_default();

        if policy == DuplicatePolicy::Fail && !samples.is_empty() {
            return Err(PerfChartError::DuplicateMeasurement {
                category: category.to_string(),
                algorithm: algorithm.id().to_string(),
                input_size: row.input_size,
            });
        }

        samples.push(row.elapsed_ms);
        present.insert(algorithm);
    }

    if present.is_empty() {
        return Ok(PivotOutcome::NoData);
    }

    let columns: Vec<Algorithm> = present.into_iter().collect();
    let table_rows = by_size
        .into_iter()
        .map(|(input_size, measured)| ChartRow {
            input_size,
            cells: columns
                .iter()
                .map(|algorithm| measured.get(algorithm).map(|samples| mean(samples)))
                .collect(),
        })
        .collect();

    Ok(PivotOutcome::Table(ChartTable {
        category: category.to_string(),
        algorithms: columns,
        rows: table_rows,
    }))
}

#[allow(clippy::cast_precision_loss)]
fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}
