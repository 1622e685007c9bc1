use crate::portfolio::resample::{period_returns, to_period, Granularity};
use crate::portfolio::valuation::DailyValue;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn curve() -> Vec<DailyValue> {
    vec![
        DailyValue::new(day(2023, 1, 10), dec!(100)),
        DailyValue::new(day(2023, 1, 31), dec!(110)),
        DailyValue::new(day(2023, 2, 5), dec!(105)),
        // February ends mid-month in the data
        DailyValue::new(day(2023, 2, 20), dec!(120)),
        DailyValue::new(day(2024, 1, 2), dec!(130)),
    ]
}

#[test]
fn monthly_sample_is_last_day_with_data() {
    let monthly = to_period(&curve(), Granularity::Month);

    assert_eq!(monthly.len(), 3);
    assert_eq!(monthly[0].period_key, "2023-01");
    assert_eq!(monthly[0].date, day(2023, 1, 31));
    assert_eq!(monthly[0].value, dec!(110));
    assert_eq!(monthly[1].period_key, "2023-02");
    assert_eq!(monthly[1].value, dec!(120));
    assert_eq!(monthly[2].period_key, "2024-01");
}

#[test]
fn yearly_sample_is_last_day_with_data() {
    let yearly = to_period(&curve(), Granularity::Year);

    assert_eq!(yearly.len(), 2);
    assert_eq!(yearly[0].period_key, "2023");
    assert_eq!(yearly[0].value, dec!(120));
    assert_eq!(yearly[1].period_key, "2024");
    assert_eq!(yearly[1].value, dec!(130));
}

#[test]
fn empty_curve_resamples_to_nothing() {
    assert!(to_period(&[], Granularity::Month).is_empty());
}

#[test]
fn period_returns_are_simple_returns() {
    let monthly = to_period(&curve(), Granularity::Month);
    let returns = period_returns(&monthly);

    assert_eq!(returns.len(), 2);
    // 110 -> 120
    assert_eq!(returns[0].round_dp(6), dec!(0.090909));
    // 120 -> 130
    assert_eq!(returns[1].round_dp(6), dec!(0.083333));
}

#[test]
fn zero_denominator_yields_zero_return() {
    let samples = to_period(
        &[
            DailyValue::new(day(2023, 1, 31), dec!(0)),
            DailyValue::new(day(2023, 2, 28), dec!(50)),
        ],
        Granularity::Month,
    );
    let returns = period_returns(&samples);
    assert_eq!(returns, vec![dec!(0)]);
}
