//! Market data domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single historical closing price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub symbol: String,
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(symbol: impl Into<String>, date: NaiveDate, close: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            date,
            close,
        }
    }
}
