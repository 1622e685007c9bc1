//! Resampling domain models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sampling granularity for period-end curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Granularity {
    Month,
    Year,
}

impl Granularity {
    /// Period key for a date: `YYYY-MM` for months, `YYYY` for years.
    /// Both sort lexicographically in chronological order.
    pub fn period_key(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Month => format!("{:04}-{:02}", date.year(), date.month()),
            Granularity::Year => format!("{:04}", date.year()),
        }
    }

    /// Samples per year at this granularity.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Granularity::Month => 12,
            Granularity::Year => 1,
        }
    }
}

/// Portfolio value standing in for the end of a month or year: the value on
/// the last day inside the period that has data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodValue {
    pub period_key: String,
    pub date: NaiveDate,
    pub value: Decimal,
}
