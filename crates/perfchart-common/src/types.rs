//! Common type definitions: the benchmarked algorithms and chart modes.

use std::fmt;
use std::str::FromStr;

/// Asymptotic complexity class of a benchmarked algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// O(n²).
    Quadratic,
    /// O(n log n).
    LogLinear,
}

/// Display metadata for an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    /// Name shown in chart legends.
    pub display_name: &'static str,
    /// Line color as RGB.
    pub color: (u8, u8, u8),
    /// Complexity class, used to pick the zoom subset.
    pub complexity: Complexity,
}

/// A sorting algorithm that can appear in the results table.
///
/// Declaration order is the column order of every chart table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// Insertion sort.
    InsertionSort,
    /// Top-down merge sort.
    MergeSort,
    /// Quick sort with last-element pivot.
    QuickSort,
}

const INSERTION_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    display_name: "Insertion Sort (O(n²))",
    color: (255, 0, 0),
    complexity: Complexity::Quadratic,
};

const MERGE_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    display_name: "Merge Sort (O(n log n))",
    color: (0, 0, 255),
    complexity: Complexity::LogLinear,
};

const QUICK_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    display_name: "Quick Sort (O(n log n))",
    color: (0, 128, 0),
    complexity: Complexity::LogLinear,
};

impl Algorithm {
    /// Every known algorithm, in column order.
    pub const ALL: [Self; 3] = [Self::InsertionSort, Self::MergeSort, Self::QuickSort];

    /// The identifier used in the results table.
    pub const fn id(self) -> &'static str {
        match self {
            Self::InsertionSort => "InsertionSort",
            Self::MergeSort => "MergeSort",
            Self::QuickSort => "QuickSort",
        }
    }

    /// Static display metadata for this algorithm.
    pub const fn descriptor(self) -> &'static AlgorithmDescriptor {
        match self {
            Self::InsertionSort => &INSERTION_SORT,
            Self::MergeSort => &MERGE_SORT,
            Self::QuickSort => &QUICK_SORT,
        }
    }

    /// Parses a results-table identifier, returning `None` for unknown names.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.id() == id.trim())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = crate::PerfChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::PerfChartError::validation_field(format!("unknown algorithm '{s}'"), "algorithm")
        })
    }
}

/// Which algorithm subset a chart compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMode {
    /// Every configured algorithm.
    General,
    /// Only the log-linear algorithms.
    Zoom,
}

impl ChartMode {
    /// Modes rendered for every category, in order.
    pub const ALL: [Self; 2] = [Self::General, Self::Zoom];

    /// Algorithms compared in this mode, in column order.
    pub fn algorithms(self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|algorithm| match self {
                Self::General => true,
                Self::Zoom => algorithm.descriptor().complexity == Complexity::LogLinear,
            })
            .collect()
    }

    /// Label used in chart titles.
    pub const fn title(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Zoom => "ZOOM (O(n log n))",
        }
    }

    /// Label used in output file names.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Zoom => "zoom",
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
