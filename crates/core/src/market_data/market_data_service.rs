use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::errors::Result;
use crate::market_data::market_data_constants::DEFAULT_PRICE_LOOKBACK_DAYS;
use crate::market_data::market_data_model::PricePoint;
use crate::market_data::market_data_traits::PriceSeriesTrait;

/// In-memory price series with backward-fill lookup.
///
/// Prices are indexed per symbol in a date-ordered map, so a lookup is a
/// single bounded range scan backward from the requested date. The series
/// is read-only once built; there is no fetching or caching strategy here -
/// that is the provider's concern upstream.
pub struct HistoricalPriceSeries {
    prices: HashMap<String, BTreeMap<NaiveDate, Decimal>>,
    lookback_days: i64,
}

impl HistoricalPriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self::with_lookback(points, DEFAULT_PRICE_LOOKBACK_DAYS)
    }

    pub fn with_lookback(points: Vec<PricePoint>, lookback_days: i64) -> Self {
        let mut prices: HashMap<String, BTreeMap<NaiveDate, Decimal>> = HashMap::new();
        for point in points {
            prices
                .entry(point.symbol)
                .or_default()
                .insert(point.date, point.close);
        }
        Self {
            prices,
            lookback_days,
        }
    }

    pub fn lookback_days(&self) -> i64 {
        self.lookback_days
    }

    pub fn symbol_count(&self) -> usize {
        self.prices.len()
    }
}

impl PriceSeriesTrait for HistoricalPriceSeries {
    fn price_on_or_before(&self, symbol: &str, date: NaiveDate) -> Result<Option<Decimal>> {
        let series = match self.prices.get(symbol) {
            Some(series) => series,
            None => return Ok(None),
        };

        let window_start = date - Duration::days(self.lookback_days);
        let price = series
            .range(window_start..=date)
            .next_back()
            .map(|(_, close)| *close);

        Ok(price)
    }

    fn has_prices_for(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }
}
