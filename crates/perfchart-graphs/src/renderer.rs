//! Chart rendering trait and the plotters line chart implementation.

use crate::pivot::ChartTable;
use crate::types::{chart_title, ChartStyle, X_LABEL, Y_LABEL};
use perfchart_common::{Algorithm, ChartMode, PerfChartError, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info};

/// Trait for rendering a chart table to an image file.
pub trait ChartRenderer {
    /// Render `table` for `mode` and write the image to `path`.
    fn render(&self, table: &ChartTable, mode: ChartMode, path: &Path) -> Result<()>;
}

/// One drawable line: legend label, color and points in axis units.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    /// Column the series was taken from.
    pub algorithm: Algorithm,
    /// Legend label.
    pub label: &'static str,
    /// Line and marker color.
    pub color: RGBColor,
    /// `(n, ms)` points, ascending by `n`, gaps skipped.
    pub points: Vec<(f64, f64)>,
}

/// Builds one series per table column, in column order.
pub fn prepare_series(table: &ChartTable) -> Vec<SeriesSpec> {
    table
        .algorithms()
        .iter()
        .map(|&algorithm| {
            let descriptor = algorithm.descriptor();
            let (r, g, b) = descriptor.color;

            #[allow(clippy::cast_precision_loss)]
            let points = table
                .series(algorithm)
                .into_iter()
                .map(|(n, ms)| (n as f64, ms))
                .collect();

            SeriesSpec {
                algorithm,
                label: descriptor.display_name,
                color: RGBColor(r, g, b),
                points,
            }
        })
        .collect()
}

/// Multi-series line chart rendered with plotters' bitmap backend.
pub struct LineChartRenderer {
    style: ChartStyle,
}

impl LineChartRenderer {
    /// Creates a renderer with the given style.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// The style this renderer draws with.
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }
}

impl Default for LineChartRenderer {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

impl ChartRenderer for LineChartRenderer {
    fn render(&self, table: &ChartTable, mode: ChartMode, path: &Path) -> Result<()> {
        if table.algorithms().is_empty() {
            return Err(PerfChartError::graph("chart table has no series"));
        }

        let style = &self.style;
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();

        let (r, g, b) = style.background;
        root.fill(&RGBColor(r, g, b))?;

        let (x_range, y_range) = calculate_data_ranges(table);
        let title_font = (style.font_family.as_str(), f64::from(style.title_font_size));
        let axis_font = (style.font_family.as_str(), f64::from(style.axis_font_size));

        let mut chart = ChartBuilder::on(&root)
            .caption(chart_title(table.category(), mode), title_font)
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d(x_range, y_range)?;

        let (light, bold) = if style.show_grid {
            (BLACK.mix(0.05), BLACK.mix(0.12))
        } else {
            (TRANSPARENT, TRANSPARENT)
        };

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style(axis_font)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.2}"))
            .light_line_style(&light)
            .bold_line_style(&bold)
            .draw()?;

        let stroke = style.line_width;
        #[allow(clippy::cast_possible_wrap)]
        let marker = style.marker_size as i32;

        let series = prepare_series(table);
        debug!(count = series.len(), "Drawing series");

        for spec in &series {
            let color = spec.color;

            chart
                .draw_series(LineSeries::new(
                    spec.points.iter().copied(),
                    color.stroke_width(stroke),
                ))?
                .label(spec.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(stroke))
                });

            if marker > 0 {
                chart.draw_series(
                    spec.points
                        .iter()
                        .map(|&point| Circle::new(point, marker, color.filled())),
                )?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(axis_font)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .draw()?;

        root.present()?;

        info!("Chart saved to {}", path.display());
        Ok(())
    }
}

/// Axis ranges covering every cell, padded by 5% on each side.
///
/// The y axis never extends below zero. Degenerate (single value) ranges are
/// widened so the chart stays drawable.
pub fn calculate_data_ranges(table: &ChartTable) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for row in table.rows() {
        for ms in row.cells.iter().flatten() {
            #[allow(clippy::cast_precision_loss)]
            let n = row.input_size as f64;
            x_min = x_min.min(n);
            x_max = x_max.max(n);
            y_min = y_min.min(*ms);
            y_max = y_max.max(*ms);
        }
    }

    if !x_min.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }

    (pad(x_min, x_max, false), pad(y_min, y_max, true))
}

fn pad(min: f64, max: f64, clamp_at_zero: bool) -> Range<f64> {
    let span = max - min;
    let padding = if span > 0.0 {
        span * 0.05
    } else {
        (max.abs() * 0.1).max(1.0)
    };

    let low = if clamp_at_zero {
        (min - padding).max(0.0)
    } else {
        min - padding
    };
    low..max + padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ResultRow;
    use crate::pivot::{pivot, PivotOutcome};
    use perfchart_config::DuplicatePolicy;

    fn table_from(points: &[(&str, u64, f64)]) -> ChartTable {
        let rows: Vec<ResultRow> = points
            .iter()
            .map(|&(algorithm, n, seconds)| ResultRow {
                algorithm: algorithm.to_string(),
                input_size: n,
                category: "Random".to_string(),
                elapsed_seconds: seconds,
                elapsed_ms: seconds * 1000.0,
            })
            .collect();

        match pivot(&rows, "Random", &Algorithm::ALL, DuplicatePolicy::Fail).unwrap() {
            PivotOutcome::Table(table) => table,
            PivotOutcome::NoData => panic!("expected a table"),
        }
    }

    #[test]
    fn test_data_range_calculation() {
        let table = table_from(&[("QuickSort", 100, 0.001), ("QuickSort", 1000, 0.004)]);

        let (x, y) = calculate_data_ranges(&table);
        assert!(x.start < 100.0); // Should have padding
        assert!(x.end > 1000.0);
        assert!(y.start >= 0.0);
        assert!(y.start < 1.0);
        assert!(y.end > 4.0);
    }

    #[test]
    fn test_single_point_range_is_widened() {
        let table = table_from(&[("MergeSort", 500, 0.002)]);

        let (x, y) = calculate_data_ranges(&table);
        assert!(x.start < 500.0 && x.end > 500.0);
        assert!(y.start < 2.0 && y.end > 2.0);
    }

    #[test]
    fn test_series_follow_column_order_with_descriptor_styling() {
        let table = table_from(&[
            ("QuickSort", 100, 0.001),
            ("InsertionSort", 100, 0.004),
            ("MergeSort", 100, 0.002),
        ]);

        let series = prepare_series(&table);
        let labels: Vec<&str> = series.iter().map(|spec| spec.label).collect();
        assert_eq!(
            labels,
            vec![
                "Insertion Sort (O(n²))",
                "Merge Sort (O(n log n))",
                "Quick Sort (O(n log n))",
            ]
        );
        assert_eq!(series[0].color, RGBColor(255, 0, 0));
        assert_eq!(series[1].color, RGBColor(0, 0, 255));
        assert_eq!(series[2].color, RGBColor(0, 128, 0));
        assert_eq!(series[0].points, vec![(100.0, 4.0)]);
    }

    #[test]
    fn test_series_skip_gaps_and_absent_algorithms() {
        let table = table_from(&[
            ("MergeSort", 100, 0.001),
            ("MergeSort", 1000, 0.01),
            ("QuickSort", 500, 0.003),
        ]);

        let series = prepare_series(&table);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].algorithm, Algorithm::MergeSort);
        assert_eq!(series[0].points, vec![(100.0, 1.0), (1000.0, 10.0)]);
        assert_eq!(series[1].algorithm, Algorithm::QuickSort);
        assert_eq!(series[1].points, vec![(500.0, 3.0)]);
    }

    #[test]
    fn test_renderer_uses_given_style() {
        let style = ChartStyle {
            width: 640,
            ..ChartStyle::default()
        };
        let renderer = LineChartRenderer::new(style);
        assert_eq!(renderer.style().width, 640);
        assert_eq!(LineChartRenderer::default().style(), &ChartStyle::default());
    }
}
