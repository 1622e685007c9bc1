//! Drawdown domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Terminal output of the drawdown state machine.
///
/// `max_drawdown_pct` is a fraction (0.25 = a 25% decline from peak).
/// `recovery_date` is set only when the curve regained the peak that
/// started the maximum drawdown; until then `recovery_days` stays `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownReport {
    pub max_drawdown_pct: Decimal,
    pub max_drawdown_start: Option<NaiveDate>,
    pub max_drawdown_end: Option<NaiveDate>,
    pub recovery_date: Option<NaiveDate>,
    pub recovery_days: Option<i64>,
}

impl DrawdownReport {
    pub fn is_in_drawdown(&self) -> bool {
        self.max_drawdown_pct > Decimal::ZERO && self.recovery_date.is_none()
    }
}
