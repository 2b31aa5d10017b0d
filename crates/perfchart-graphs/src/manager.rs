//! Chart manager orchestrating generation for every category and mode.

use crate::dataset::{categories, load_results, ResultRow};
use crate::pivot::{pivot, PivotOutcome};
use crate::renderer::ChartRenderer;
use crate::types::{chart_path, file_stems};
use perfchart_common::{slugify, ChartMode, Result};
use perfchart_config::Config;
use std::path::PathBuf;
use tracing::{info, info_span, warn};

/// A (category, mode) combination that had nothing to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChart {
    /// Input-vector category.
    pub category: String,
    /// Chart mode.
    pub mode: ChartMode,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Images written, in generation order.
    pub written: Vec<PathBuf>,
    /// Combinations skipped for lack of data.
    pub skipped: Vec<SkippedChart>,
}

/// Drives load, pivot, and render for every category found in the results.
pub struct ChartManager<R> {
    config: Config,
    renderer: R,
}

impl<R: ChartRenderer> ChartManager<R> {
    /// Creates a new chart manager.
    pub const fn new(config: Config, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// The renderer charts are drawn with.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Generates the general and zoom charts for every category.
    ///
    /// A missing input file aborts before the output directory is touched.
    pub fn generate_all(&self) -> Result<RunReport> {
        let rows = load_results(&self.config.input_path)?;

        std::fs::create_dir_all(&self.config.output_dir)?;

        let found = categories(&rows);
        info!("Categories found: {}", found.join(", "));
        info!("Starting chart generation");

        let stems = file_stems(&found);
        let mut report = RunReport::default();
        for (category, stem) in found.iter().zip(&stems) {
            self.generate_for_category(&rows, category, stem, &mut report)?;
        }

        info!(
            "Finished! {} chart(s) saved in {}",
            report.written.len(),
            self.config.output_dir.display()
        );
        Ok(report)
    }

    /// Generates both modes for one category, appending to `report`.
    ///
    /// `stem` names the output files; see [`file_stems`].
    pub fn generate_for_category(
        &self,
        rows: &[ResultRow],
        category: &str,
        stem: &str,
        report: &mut RunReport,
    ) -> Result<()> {
        let _span = info_span!("category", name = category).entered();
        info!("Processing category: {category}");
        if stem != slugify(category) {
            warn!("Category '{category}' shares a file name with another category, writing it as '{stem}'");
        }

        for mode in ChartMode::ALL {
            let algorithms = mode.algorithms();

            match pivot(rows, category, &algorithms, self.config.duplicates)? {
                PivotOutcome::Table(table) => {
                    let path = chart_path(&self.config.output_dir, stem, mode);
                    self.renderer.render(&table, mode, &path)?;
                    report.written.push(path);
                }
                PivotOutcome::NoData => {
                    let ids: Vec<&str> = algorithms.iter().map(|a| a.id()).collect();
                    warn!("No data found for [{}] ({category})", ids.join(", "));
                    report.skipped.push(SkippedChart {
                        category: category.to_string(),
                        mode,
                    });
                }
            }
        }

        Ok(())
    }
}
