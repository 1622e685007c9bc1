//! Benchmark alignment domain models.

use serde::{Deserialize, Serialize};

use crate::portfolio::valuation::DailyValue;

/// Why a benchmark could not be aligned. A recoverable condition, not an
/// error: portfolio-only results still stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BenchmarkUnavailableReason {
    /// No benchmark price exists on (or within the lookback window before)
    /// the portfolio's first date.
    NoStartingPrice,
    /// Fewer than half of the portfolio's dates had a usable benchmark
    /// price - too little overlap to support statistics.
    InsufficientOverlap,
}

impl std::fmt::Display for BenchmarkUnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchmarkUnavailableReason::NoStartingPrice => {
                write!(f, "no benchmark price on the portfolio's first date")
            }
            BenchmarkUnavailableReason::InsufficientOverlap => {
                write!(f, "benchmark covers fewer than half of the portfolio's dates")
            }
        }
    }
}

/// Outcome of benchmark alignment: a rescaled daily curve on the
/// portfolio's date grid, or a typed unavailability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "detail")]
pub enum BenchmarkAlignment {
    Aligned(Vec<DailyValue>),
    Unavailable(BenchmarkUnavailableReason),
}

impl BenchmarkAlignment {
    pub fn is_aligned(&self) -> bool {
        matches!(self, BenchmarkAlignment::Aligned(_))
    }
}
