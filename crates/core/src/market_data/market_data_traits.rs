use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;

/// Point-lookup capability over a historical close-price series.
///
/// Implementations search backward from `date` up to their lookback window
/// for the latest available close. `Ok(None)` means "no valuation possible
/// for this symbol on this date"; callers must exclude the holding's
/// contribution and surface a diagnostic rather than substitute zero
/// silently. `Err` is reserved for the capability itself failing.
pub trait PriceSeriesTrait: Send + Sync {
    fn price_on_or_before(&self, symbol: &str, date: NaiveDate) -> Result<Option<Decimal>>;

    /// Whether any history at all exists for `symbol`.
    fn has_prices_for(&self, symbol: &str) -> bool;
}
