//! Performance domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RISK_FREE_RATE, DEFAULT_VAR_CONFIDENCE};
use crate::errors::{Result, ValidationError};
use crate::portfolio::benchmark::BenchmarkUnavailableReason;
use crate::portfolio::drawdown::DrawdownReport;
use crate::portfolio::valuation::ReplayWarning;

/// Caller-supplied knobs for a metrics run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Annual risk-free rate as a fraction (0.015 = 1.5%)
    pub risk_free_rate: Decimal,
    /// Confidence level for historical VaR/CVaR (0.95 = 95%)
    pub var_confidence: Decimal,
    /// Benchmark to align against; `None` skips the relative section
    pub benchmark_symbol: Option<String>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            var_confidence: DEFAULT_VAR_CONFIDENCE,
            benchmark_symbol: None,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.var_confidence <= Decimal::ZERO || self.var_confidence >= Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "VaR confidence must be strictly between 0 and 1, got {}",
                self.var_confidence
            ))
            .into());
        }
        Ok(())
    }
}

/// Statistics measured against an aligned benchmark.
///
/// Every ratio that needs variance, covariance, or a meaningful beta is
/// optional: `None` means "not computable from this much data", which is
/// different from zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkMetrics {
    pub symbol: String,
    pub annualized_return: Decimal,
    pub annualized_std_dev: Option<Decimal>,
    pub beta: Option<Decimal>,
    pub alpha: Option<Decimal>,
    pub correlation: Option<Decimal>,
    pub r_squared: Option<Decimal>,
    pub treynor_ratio: Option<Decimal>,
    pub m_squared: Option<Decimal>,
    pub tracking_error: Option<Decimal>,
    pub information_ratio: Option<Decimal>,
    /// Percentages: 100 means the portfolio matched the benchmark's
    /// compounded move in its up (resp. down) months.
    pub upside_capture: Option<Decimal>,
    pub downside_capture: Option<Decimal>,
}

/// The full statistics battery for one ledger.
///
/// Recomputed from scratch on every request; nothing here has persisted
/// identity. Monthly samples drive the distribution and risk statistics,
/// yearly samples drive best/worst year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub period_start_date: Option<NaiveDate>,
    pub period_end_date: Option<NaiveDate>,

    // Return measures
    pub cumulative_return: Decimal,
    pub annualized_return: Decimal,
    pub arithmetic_mean_return: Option<Decimal>,
    pub geometric_mean_return: Option<Decimal>,
    pub best_year: Option<Decimal>,
    pub worst_year: Option<Decimal>,
    pub positive_periods_pct: Option<Decimal>,
    pub gain_loss_ratio: Option<Decimal>,

    // Risk measures
    pub annualized_std_dev: Option<Decimal>,
    pub downside_deviation: Option<Decimal>,
    pub sharpe_ratio: Option<Decimal>,
    pub sortino_ratio: Option<Decimal>,
    pub calmar_ratio: Option<Decimal>,
    pub skewness: Option<Decimal>,
    pub excess_kurtosis: Option<Decimal>,

    // Tail risk
    pub var_confidence: Decimal,
    pub historical_var: Option<Decimal>,
    pub historical_cvar: Option<Decimal>,
    pub analytical_var_90: Option<Decimal>,
    pub analytical_var_95: Option<Decimal>,
    pub analytical_var_99: Option<Decimal>,

    // Withdrawal rates
    pub safe_withdrawal_rate: Decimal,
    pub perpetual_withdrawal_rate: Decimal,

    pub drawdown: DrawdownReport,

    // Relative section; `benchmark_unavailable` explains a `None` benchmark
    // when one was requested
    pub benchmark: Option<BenchmarkMetrics>,
    pub benchmark_unavailable: Option<BenchmarkUnavailableReason>,

    /// Data-quality gaps hit during the underlying replay
    pub warnings: Vec<ReplayWarning>,
}

impl MetricsReport {
    /// The "nothing to compute" report for an empty or unfunded ledger.
    pub fn empty(var_confidence: Decimal, warnings: Vec<ReplayWarning>) -> Self {
        Self {
            var_confidence,
            warnings,
            ..Default::default()
        }
    }

    pub fn has_benchmark(&self) -> bool {
        self.benchmark.is_some()
    }
}
