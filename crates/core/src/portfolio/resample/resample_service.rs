use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::portfolio::resample::{Granularity, PeriodValue};
use crate::portfolio::valuation::DailyValue;

/// Reduces a date-ascending daily curve to one sample per period.
///
/// Later days overwrite earlier ones inside the same period, so each
/// period's sample is the value on its last day with data - an
/// approximation of the period-end close when the ledger has a gap right
/// at the boundary.
pub fn to_period(daily_values: &[DailyValue], granularity: Granularity) -> Vec<PeriodValue> {
    let mut by_period: BTreeMap<String, PeriodValue> = BTreeMap::new();

    for dv in daily_values {
        let period_key = granularity.period_key(dv.date);
        by_period.insert(
            period_key.clone(),
            PeriodValue {
                period_key,
                date: dv.date,
                value: dv.value,
            },
        );
    }

    by_period.into_values().collect()
}

/// Simple returns between consecutive period samples. A non-positive
/// denominator yields a zero return for that step rather than failing.
pub fn period_returns(samples: &[PeriodValue]) -> Vec<Decimal> {
    samples
        .windows(2)
        .map(|pair| {
            let prev = pair[0].value;
            let curr = pair[1].value;
            if prev <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                curr / prev - Decimal::ONE
            }
        })
        .collect()
}
