use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::market_data::PriceSeriesTrait;
use crate::portfolio::snapshot::HoldingsState;
use crate::portfolio::valuation::ReplayWarning;

/// Market value of every open position on `date`, in ledger currency.
///
/// A symbol with no price inside the lookback window contributes zero for
/// the day; the gap is recorded as a warning so the rest of the portfolio
/// still values. Cash is not included here.
pub fn calculate_stock_value(
    state: &HoldingsState,
    prices: &dyn PriceSeriesTrait,
    date: NaiveDate,
    warnings: &mut Vec<ReplayWarning>,
) -> Result<Decimal> {
    let mut total = Decimal::ZERO;

    for (symbol, quantity) in &state.positions {
        match prices.price_on_or_before(symbol, date)? {
            Some(close) => {
                total += *quantity * close;
            }
            None => {
                warn!(
                    "No price for {} within lookback window of {}. Position valued at zero for the day.",
                    symbol, date
                );
                warnings.push(ReplayWarning {
                    symbol: symbol.clone(),
                    date,
                    message: "no price within lookback window".to_string(),
                });
            }
        }
    }

    Ok(total)
}
