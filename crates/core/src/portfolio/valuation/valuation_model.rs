//! Valuation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total portfolio value (stock market value + cash) at the close of one
/// calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyValue {
    pub date: NaiveDate,
    pub value: Decimal,
}

impl DailyValue {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// A non-fatal data-quality issue hit during replay. Valuation continued,
/// but the named holding contributed nothing on that date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplayWarning {
    pub symbol: String,
    pub date: NaiveDate,
    pub message: String,
}

impl std::fmt::Display for ReplayWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}: {}", self.symbol, self.date, self.message)
    }
}

/// Result of a full ledger replay. The curve is always returned, even when
/// some holdings could not be priced on some days; `warnings` records every
/// such gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayResult {
    pub daily_values: Vec<DailyValue>,
    pub warnings: Vec<ReplayWarning>,
}

impl ReplayResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
