//! Income domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated dividend income over a ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub total: Decimal,
    /// year -> total credited that year
    pub by_year: BTreeMap<i32, Decimal>,
    /// symbol -> total credited by that holding
    pub by_symbol: BTreeMap<String, Decimal>,
}

impl IncomeSummary {
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}
