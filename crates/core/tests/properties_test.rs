use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use statfolio_core::ledger::{Transaction, TransactionAction};
use statfolio_core::market_data::{HistoricalPriceSeries, PricePoint};
use statfolio_core::portfolio::drawdown::DrawdownAnalyzer;
use statfolio_core::portfolio::performance::MetricsEngine;
use statfolio_core::portfolio::valuation::ValuationService;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

fn cash_tx(offset: i64, cents: i64) -> Transaction {
    Transaction {
        date: start_date() + Duration::days(offset),
        symbol: String::new(),
        action: TransactionAction::CashMisc,
        quantity: Decimal::ZERO,
        price: Decimal::ZERO,
        cash_amount: Decimal::new(cents, 2),
    }
}

proptest! {
    #[test]
    fn historical_var_is_monotone_in_confidence(
        returns_bp in proptest::collection::vec(-5000i64..5000, 1..40),
        c1 in 80u32..100,
        c2 in 80u32..100,
    ) {
        let returns: Vec<Decimal> = returns_bp.iter().map(|bp| Decimal::new(*bp, 4)).collect();
        let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };

        let var_lo = MetricsEngine::historical_var(&returns, Decimal::new(lo as i64, 2)).unwrap();
        let var_hi = MetricsEngine::historical_var(&returns, Decimal::new(hi as i64, 2)).unwrap();
        prop_assert!(var_hi >= var_lo);
    }

    #[test]
    fn cvar_is_at_least_var(
        returns_bp in proptest::collection::vec(-5000i64..5000, 1..40),
        confidence in 80u32..100,
    ) {
        let returns: Vec<Decimal> = returns_bp.iter().map(|bp| Decimal::new(*bp, 4)).collect();
        let confidence = Decimal::new(confidence as i64, 2);

        let var = MetricsEngine::historical_var(&returns, confidence).unwrap();
        let cvar = MetricsEngine::historical_cvar(&returns, confidence).unwrap();
        prop_assert!(cvar >= var);
    }

    #[test]
    fn analyzer_peak_is_the_running_maximum(
        values_cents in proptest::collection::vec(1i64..100_000_000, 1..60),
    ) {
        let mut analyzer = DrawdownAnalyzer::new();
        let mut running_max = Decimal::MIN;

        for (i, cents) in values_cents.iter().enumerate() {
            let value = Decimal::new(*cents, 2);
            analyzer.observe(start_date() + Duration::days(i as i64), value);
            running_max = running_max.max(value);
            prop_assert_eq!(analyzer.peak_value(), running_max);
        }
    }

    #[test]
    fn cash_only_ledger_replays_to_a_cumulative_sum(
        deposits in proptest::collection::vec((0i64..90, 1i64..10_000_000), 1..20),
    ) {
        let transactions: Vec<Transaction> = deposits
            .iter()
            .map(|(offset, cents)| cash_tx(*offset, *cents))
            .collect();

        let service = ValuationService::new(Arc::new(HistoricalPriceSeries::new(vec![])));
        let replay = service.replay(&transactions).unwrap();

        prop_assert!(replay.warnings.is_empty());
        for dv in &replay.daily_values {
            let expected: Decimal = transactions
                .iter()
                .filter(|tx| tx.date <= dv.date)
                .map(|tx| tx.cash_amount)
                .sum();
            prop_assert_eq!(dv.value, expected);
        }
    }

    #[test]
    fn replay_is_deterministic(
        deposits in proptest::collection::vec((0i64..60, 1i64..10_000_000), 1..10),
        buys in proptest::collection::vec((0i64..60, 1i64..500), 0..6),
    ) {
        let mut transactions: Vec<Transaction> = deposits
            .iter()
            .map(|(offset, cents)| cash_tx(*offset, *cents))
            .collect();
        for (offset, shares) in &buys {
            transactions.push(Transaction {
                date: start_date() + Duration::days(*offset),
                symbol: "ABC".to_string(),
                action: TransactionAction::Buy,
                quantity: Decimal::from(*shares),
                price: Decimal::from(10),
                cash_amount: Decimal::from(-10 * shares),
            });
        }

        let mut points = Vec::new();
        let mut date = start_date();
        while date <= start_date() + Duration::days(90) {
            points.push(PricePoint::new("ABC", date, Decimal::from(10)));
            date = date.succ_opt().unwrap();
        }
        let service = ValuationService::new(Arc::new(HistoricalPriceSeries::new(points)));

        let first = service.replay(&transactions).unwrap();
        let second = service.replay(&transactions).unwrap();
        prop_assert_eq!(first.daily_values, second.daily_values);
    }
}
