//! Chart styling and naming.

use perfchart_common::{parse_hex_color, slugify, ChartMode};
use perfchart_config::ChartSettings;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// X axis description.
pub const X_LABEL: &str = "Input size (n)";

/// Y axis description.
pub const Y_LABEL: &str = "Time (ms)";

/// Margin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginConfig {
    /// Outer margin around the plot.
    pub outer: u32,
    /// Space reserved for the x axis labels.
    pub x_label_area: u32,
    /// Space reserved for the y axis labels.
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 20,
            x_label_area: 60,
            y_label_area: 80,
        }
    }
}

/// Resolved rendering style for a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Background RGB color.
    pub background: (u8, u8, u8),
    /// Font family for all text.
    pub font_family: String,
    /// Title font size.
    pub title_font_size: u32,
    /// Axis description font size.
    pub axis_font_size: u32,
    /// Whether the light grid is drawn.
    pub show_grid: bool,
    /// Series stroke width.
    pub line_width: u32,
    /// Point marker radius; zero disables markers.
    pub marker_size: u32,
    /// Plot margins.
    pub margins: MarginConfig,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartSettings::default())
    }
}

impl From<&ChartSettings> for ChartStyle {
    fn from(settings: &ChartSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            background: parse_hex_color(&settings.background_color).unwrap_or((255, 255, 255)),
            font_family: settings.font_family.clone(),
            title_font_size: settings.title_font_size,
            axis_font_size: settings.axis_font_size,
            show_grid: settings.show_grid,
            line_width: settings.line_width,
            marker_size: settings.marker_size,
            margins: MarginConfig::default(),
        }
    }
}

/// Chart title for a category and mode.
pub fn chart_title(category: &str, mode: ChartMode) -> String {
    format!("{} performance - {category} input", mode.title())
}

/// File-name stems for `categories`, one per category and all distinct.
///
/// Each stem is the slug of its category. When two categories share a slug,
/// later ones get the first free `_<n>` suffix (n >= 2) that is neither taken
/// nor another category's own slug.
pub fn file_stems(categories: &[String]) -> Vec<String> {
    let slugs: Vec<String> = categories.iter().map(|category| slugify(category)).collect();
    let reserved: HashSet<&str> = slugs.iter().map(String::as_str).collect();
    let mut taken: HashSet<String> = HashSet::new();

    slugs
        .iter()
        .map(|slug| {
            let mut stem = slug.clone();
            let mut suffix = 2u32;
            while taken.contains(&stem) {
                stem = format!("{slug}_{suffix}");
                suffix += 1;
                if reserved.contains(stem.as_str()) {
                    stem.clone_from(slug);
                }
            }
            taken.insert(stem.clone());
            stem
        })
        .collect()
}

/// Output path for a file stem and mode: `chart_<stem>_<mode>.png`.
pub fn chart_path(output_dir: &Path, stem: &str, mode: ChartMode) -> PathBuf {
    output_dir.join(format!("chart_{stem}_{}.png", mode.slug()))
}
