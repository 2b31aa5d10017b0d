//! Input vectors for the benchmark.

use fastrand::Rng;
use std::fmt;

/// Exclusive upper bound of random vector values.
pub const RANDOM_VALUE_BOUND: i32 = 1_000_000;

/// Shape of a benchmark input vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    /// `0, 1, .., n - 1`.
    Ascending,
    /// `n - 1, .., 1, 0`.
    Descending,
    /// Uniform values in `0..RANDOM_VALUE_BOUND`.
    Random,
}

impl VectorKind {
    /// Every kind, in the order the benchmark measures them.
    pub const ALL: [Self; 3] = [Self::Ascending, Self::Descending, Self::Random];

    /// Category written to the results table.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Crescente",
            Self::Descending => "Decrescente",
            Self::Random => "Aleatorio",
        }
    }

    /// Builds a vector of `n` elements of this shape.
    pub fn generate(self, n: usize, rng: &mut Rng) -> Vec<i32> {
        match self {
            Self::Ascending => (0..i32::MAX).take(n).collect(),
            Self::Descending => {
                let mut data: Vec<i32> = (0..i32::MAX).take(n).collect();
                data.reverse();
                data
            }
            Self::Random => (0..n).map(|_| rng.i32(0..RANDOM_VALUE_BOUND)).collect(),
        }
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
