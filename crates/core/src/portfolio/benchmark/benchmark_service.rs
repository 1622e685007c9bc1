use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::Result;
use crate::market_data::PriceSeriesTrait;
use crate::portfolio::benchmark::{BenchmarkAlignment, BenchmarkUnavailableReason};
use crate::portfolio::valuation::DailyValue;

/// Fraction of portfolio dates that must have a usable benchmark price
const DEFAULT_MIN_OVERLAP: Decimal = rust_decimal_macros::dec!(0.5);

/// Rescales a benchmark price series onto the portfolio's starting value
/// and date grid: "what if the same amount had gone into the benchmark on
/// day one".
pub struct BenchmarkService {
    price_series: Arc<dyn PriceSeriesTrait>,
    min_overlap: Decimal,
}

impl BenchmarkService {
    pub fn new(price_series: Arc<dyn PriceSeriesTrait>) -> Self {
        Self {
            price_series,
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }

    /// Overrides the coverage fraction below which alignment is reported
    /// unavailable.
    pub fn with_min_overlap(mut self, min_overlap: Decimal) -> Self {
        self.min_overlap = min_overlap;
        self
    }

    /// Aligns `symbol` onto the portfolio curve. Dates without a benchmark
    /// price are dropped rather than interpolated; when fewer than half of
    /// the portfolio's dates survive, the whole alignment is reported
    /// unavailable.
    pub fn align(
        &self,
        symbol: &str,
        portfolio_values: &[DailyValue],
    ) -> Result<BenchmarkAlignment> {
        let first = match portfolio_values.first() {
            Some(first) => first,
            None => {
                return Ok(BenchmarkAlignment::Unavailable(
                    BenchmarkUnavailableReason::NoStartingPrice,
                ))
            }
        };

        let start_price = match self.price_series.price_on_or_before(symbol, first.date)? {
            Some(price) if price > Decimal::ZERO => price,
            _ => {
                warn!(
                    "Benchmark {}: no usable price on portfolio start date {}",
                    symbol, first.date
                );
                return Ok(BenchmarkAlignment::Unavailable(
                    BenchmarkUnavailableReason::NoStartingPrice,
                ));
            }
        };

        let mut aligned = Vec::with_capacity(portfolio_values.len());
        for dv in portfolio_values {
            match self.price_series.price_on_or_before(symbol, dv.date)? {
                Some(price) => {
                    let scaled = first.value * (price / start_price);
                    aligned.push(DailyValue::new(dv.date, scaled));
                }
                None => {
                    debug!(
                        "Benchmark {}: no price for {}, date dropped from alignment",
                        symbol, dv.date
                    );
                }
            }
        }

        let coverage_floor = self.min_overlap * Decimal::from(portfolio_values.len());
        if Decimal::from(aligned.len()) < coverage_floor {
            warn!(
                "Benchmark {}: only {}/{} portfolio dates usable, reporting unavailable",
                symbol,
                aligned.len(),
                portfolio_values.len()
            );
            return Ok(BenchmarkAlignment::Unavailable(
                BenchmarkUnavailableReason::InsufficientOverlap,
            ));
        }

        Ok(BenchmarkAlignment::Aligned(aligned))
    }
}
