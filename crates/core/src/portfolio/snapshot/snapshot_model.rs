//! Holdings state domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::QUANTITY_THRESHOLD;

/// Share holdings plus cash balance at a point in the replay.
///
/// Ephemeral by design: rebuilt from the transaction history on every call
/// and never persisted, so no previous error can poison a later one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsState {
    /// symbol -> signed share count
    #[serde(default)]
    pub positions: HashMap<String, Decimal>,
    #[serde(default)]
    pub cash: Decimal,
}

impl HoldingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed share count for `symbol`, zero when the position is closed.
    pub fn quantity(&self, symbol: &str) -> Decimal {
        self.positions.get(symbol).copied().unwrap_or(Decimal::ZERO)
    }

    /// True when no position is open and no cash is held.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.cash == Decimal::ZERO
    }

    /// Drops the entry for `symbol` once it is float-noise around zero.
    pub(crate) fn purge_dust(&mut self, symbol: &str) {
        if let Some(quantity) = self.positions.get(symbol) {
            if quantity.abs() < QUANTITY_THRESHOLD {
                self.positions.remove(symbol);
            }
        }
    }
}
