//! Benchmark results loading.

use perfchart_common::{seconds_to_ms, PerfChartError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// One measurement from the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Algorithm identifier as written in the table.
    pub algorithm: String,
    /// Number of elements sorted.
    pub input_size: u64,
    /// Input-vector category, e.g. "Random" or "Reversed".
    pub category: String,
    /// Measured time in seconds.
    pub elapsed_seconds: f64,
    /// Measured time in milliseconds.
    pub elapsed_ms: f64,
}

/// On-disk record; accepts both the English and the benchmark program's column names.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "algoritmo")]
    algorithm: String,
    #[serde(alias = "tipo_vetor")]
    category: String,
    #[serde(alias = "tamanho_n")]
    input_size: u64,
    #[serde(alias = "tempo_s")]
    elapsed_seconds: f64,
}

impl From<RawRow> for ResultRow {
    fn from(raw: RawRow) -> Self {
        Self {
            elapsed_ms: seconds_to_ms(raw.elapsed_seconds),
            algorithm: raw.algorithm,
            input_size: raw.input_size,
            category: raw.category,
            elapsed_seconds: raw.elapsed_seconds,
        }
    }
}

/// Loads the results table at `path`.
///
/// Fails with [`PerfChartError::MissingInputFile`] when the file does not
/// exist. Rows whose elapsed time is not strictly positive are dropped.
pub fn load_results(path: &Path) -> Result<Vec<ResultRow>> {
    info!("Loading results from '{}'", path.display());

    if !path.exists() {
        return Err(PerfChartError::missing_input(path));
    }

    let file = std::fs::File::open(path)?;
    read_results(file).map_err(|e| match e {
        PerfChartError::Data { message, source } => PerfChartError::Data {
            message: format!("{}: {message}", path.display()),
            source,
        },
        other => other,
    })
}

/// Reads a results table from any CSV source.
pub fn read_results<R: io::Read>(reader: R) -> Result<Vec<ResultRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut discarded = 0usize;

    for record in reader.deserialize::<RawRow>() {
        let raw = record.map_err(|e| PerfChartError::data_with_source("malformed results row", e))?;

        // NaN fails this comparison too.
        if raw.elapsed_seconds > 0.0 {
            rows.push(ResultRow::from(raw));
        } else {
            discarded += 1;
        }
    }

    debug!(kept = rows.len(), discarded, "Results table read");
    Ok(rows)
}

/// Distinct categories in order of first appearance.
pub fn categories(rows: &[ResultRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.category.as_str()))
        .map(|row| row.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_portuguese_headers() {
        let csv = "algoritmo,tipo_vetor,tamanho_n,tempo_s\nQuickSort,Random,100,0.5\n";
        let rows = read_results(csv.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![ResultRow {
                algorithm: "QuickSort".to_string(),
                input_size: 100,
                category: "Random".to_string(),
                elapsed_seconds: 0.5,
                elapsed_ms: 500.0,
            }]
        );
    }

    #[test]
    fn test_reads_english_headers_in_any_order_with_extra_columns() {
        let csv = "elapsed_seconds,run,category,algorithm,input_size\n0.002, 1 ,Sorted, MergeSort ,50\n";
        let rows = read_results(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].algorithm, "MergeSort");
        assert_eq!(rows[0].category, "Sorted");
        assert_eq!(rows[0].input_size, 50);
        assert_eq!(rows[0].elapsed_ms, 0.002 * 1000.0);
    }

    #[test]
    fn test_non_positive_and_nan_times_are_dropped() {
        let csv = concat!(
            "algorithm,category,input_size,elapsed_seconds\n",
            "QuickSort,Random,10,0\n",
            "QuickSort,Random,20,-0.1\n",
            "QuickSort,Random,30,NaN\n",
            "QuickSort,Random,40,0.001\n",
        );
        let rows = read_results(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].input_size, 40);
    }

    #[test]
    fn test_malformed_row_is_a_data_error() {
        let csv = "algorithm,category,input_size,elapsed_seconds\nQuickSort,Random,lots,0.1\n";
        let err = read_results(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PerfChartError::Data { .. }));
    }

    #[test]
    fn test_missing_column_is_a_data_error() {
        let csv = "algorithm,category,input_size\nQuickSort,Random,10\n";
        assert!(read_results(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_categories_keep_first_appearance_order() {
        let csv = concat!(
            "algorithm,category,input_size,elapsed_seconds\n",
            "QuickSort,Reversed,10,0.1\n",
            "QuickSort,Random,10,0.1\n",
            "MergeSort,Reversed,10,0.1\n",
            "MergeSort,Sorted,10,0.1\n",
        );
        let rows = read_results(csv.as_bytes()).unwrap();
        assert_eq!(categories(&rows), vec!["Reversed", "Random", "Sorted"]);
    }
}
