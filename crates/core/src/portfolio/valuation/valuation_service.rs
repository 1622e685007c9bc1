use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use crate::constants::VALUE_THRESHOLD;
use crate::errors::Result;
use crate::ledger::Transaction;
use crate::market_data::PriceSeriesTrait;
use crate::portfolio::snapshot::{apply_transaction, validate_transaction, HoldingsState};
use crate::portfolio::valuation::valuation_calculator::calculate_stock_value;
use crate::portfolio::valuation::{DailyValue, ReplayResult};

/// Replays a transaction ledger into a daily valuation curve.
///
/// Stateless per call: every replay starts from an empty holdings state and
/// walks the full history, so no cached intermediate can poison a later
/// request. Callers wanting memoization add it outside this service.
pub struct ValuationService {
    price_series: Arc<dyn PriceSeriesTrait>,
}

impl ValuationService {
    pub fn new(price_series: Arc<dyn PriceSeriesTrait>) -> Self {
        Self { price_series }
    }

    /// One `DailyValue` per calendar day in the ledger's date span, leading
    /// unfunded days removed. An empty ledger yields an empty result.
    pub fn replay(&self, transactions: &[Transaction]) -> Result<ReplayResult> {
        if transactions.is_empty() {
            return Ok(ReplayResult::default());
        }

        for tx in transactions {
            validate_transaction(tx)?;
        }

        // Stable sort: same-day rows keep their input order.
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by_key(|tx| tx.date);

        let start_date = sorted[0].date;
        let end_date = sorted[sorted.len() - 1].date;

        debug!(
            "Replaying {} transactions over {} -> {}",
            sorted.len(),
            start_date,
            end_date
        );

        let mut state = HoldingsState::new();
        let mut cursor = 0usize;
        let mut daily_values = Vec::new();
        let mut warnings = Vec::new();

        let mut current_date = start_date;
        loop {
            // The ledger is sorted, so a moving cursor applies each row
            // exactly once; no rescans from the start.
            while cursor < sorted.len() && sorted[cursor].date == current_date {
                apply_transaction(&mut state, sorted[cursor]);
                cursor += 1;
            }

            let stock_value =
                calculate_stock_value(&state, self.price_series.as_ref(), current_date, &mut warnings)?;
            daily_values.push(DailyValue::new(current_date, stock_value + state.cash));

            if current_date >= end_date {
                break;
            }
            current_date = match current_date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        // Days before the portfolio was funded carry no meaning.
        let first_funded = daily_values
            .iter()
            .position(|dv| dv.value > VALUE_THRESHOLD);
        let daily_values = match first_funded {
            Some(index) => daily_values.split_off(index),
            None => Vec::new(),
        };

        Ok(ReplayResult {
            daily_values,
            warnings,
        })
    }

    /// End-of-day valuation for a single date, including cash.
    pub fn value_on(
        &self,
        transactions: &[Transaction],
        date: NaiveDate,
    ) -> Result<Option<DailyValue>> {
        let replay = self.replay(transactions)?;
        Ok(replay
            .daily_values
            .into_iter()
            .find(|dv| dv.date == date))
    }
}
