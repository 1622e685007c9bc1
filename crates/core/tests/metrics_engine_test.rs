use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use statfolio_core::ledger::{Transaction, TransactionAction};
use statfolio_core::market_data::{HistoricalPriceSeries, PricePoint};
use statfolio_core::portfolio::benchmark::{BenchmarkAlignment, BenchmarkService};
use statfolio_core::portfolio::performance::{MetricsConfig, MetricsEngine};
use statfolio_core::portfolio::valuation::ValuationService;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(
    date: NaiveDate,
    symbol: &str,
    action: TransactionAction,
    quantity: Decimal,
    price: Decimal,
    cash_amount: Decimal,
) -> Transaction {
    Transaction {
        date,
        symbol: symbol.to_string(),
        action,
        quantity,
        price,
        cash_amount,
    }
}

/// Deposit 10k, buy 100 ABC at 50, sell them all at 60 a month later.
fn scenario_ledger() -> Vec<Transaction> {
    vec![
        tx(
            day(2023, 1, 3),
            "",
            TransactionAction::CashMisc,
            dec!(0),
            dec!(0),
            dec!(10000),
        ),
        tx(
            day(2023, 1, 4),
            "ABC",
            TransactionAction::Buy,
            dec!(100),
            dec!(50),
            dec!(-5000),
        ),
        tx(
            day(2023, 2, 1),
            "ABC",
            TransactionAction::Sell,
            dec!(100),
            dec!(60),
            dec!(6000),
        ),
    ]
}

/// ABC rises linearly 50 -> 60 over the span; SPY rises 400 -> 420.
fn scenario_prices() -> Arc<HistoricalPriceSeries> {
    let mut points = Vec::new();
    let start = day(2023, 1, 3);
    let end = day(2023, 2, 1);
    let span = (end - start).num_days();
    let mut date = start;
    while date <= end {
        let offset = (date - start).num_days();
        let abc = dec!(50) + dec!(10) * Decimal::from(offset) / Decimal::from(span);
        let spy = dec!(400) + dec!(20) * Decimal::from(offset) / Decimal::from(span);
        points.push(PricePoint::new("ABC", date, abc));
        points.push(PricePoint::new("SPY", date, spy));
        date = date.succ_opt().unwrap();
    }
    Arc::new(HistoricalPriceSeries::new(points))
}

#[test]
fn replay_matches_the_worked_scenario() {
    let service = ValuationService::new(scenario_prices());
    let result = service.replay(&scenario_ledger()).unwrap();

    let buy_day = result
        .daily_values
        .iter()
        .find(|dv| dv.date == day(2023, 1, 4))
        .unwrap();
    // 100 shares near 50 plus 5000 cash; price grid gives 50.34 on the 4th
    assert!(buy_day.value > dec!(10000) && buy_day.value < dec!(10100));

    let sale_day = result
        .daily_values
        .iter()
        .find(|dv| dv.date == day(2023, 2, 1))
        .unwrap();
    assert_eq!(sale_day.value, dec!(11000));
    assert!(!result.has_warnings());
}

#[test]
fn benchmark_scales_to_the_portfolio_start() {
    let service = ValuationService::new(scenario_prices());
    let replay = service.replay(&scenario_ledger()).unwrap();

    let benchmark = BenchmarkService::new(scenario_prices());
    let alignment = benchmark.align("SPY", &replay.daily_values).unwrap();
    let curve = match alignment {
        BenchmarkAlignment::Aligned(curve) => curve,
        BenchmarkAlignment::Unavailable(reason) => panic!("unexpected: {}", reason),
    };

    assert_eq!(curve.first().unwrap().value, dec!(10000));
    // 10000 * 420/400 on the last day
    assert_eq!(curve.last().unwrap().value, dec!(10500));
}

#[test]
fn full_report_over_a_multi_year_ledger() {
    // Hold 100 shares of a steadily rising stock for two years
    let mut points = Vec::new();
    let start = day(2021, 1, 4);
    let end = day(2023, 1, 4);
    let span = (end - start).num_days();
    let mut date = start;
    while date <= end {
        let offset = (date - start).num_days();
        let abc = dec!(100) + dec!(50) * Decimal::from(offset) / Decimal::from(span);
        let spy = dec!(400) + dec!(100) * Decimal::from(offset) / Decimal::from(span);
        points.push(PricePoint::new("ABC", date, abc));
        points.push(PricePoint::new("SPY", date, spy));
        date = date.succ_opt().unwrap();
    }
    let prices = Arc::new(HistoricalPriceSeries::new(points));

    let ledger = vec![
        tx(
            day(2021, 1, 4),
            "",
            TransactionAction::CashMisc,
            dec!(0),
            dec!(0),
            dec!(10000),
        ),
        tx(
            day(2021, 1, 4),
            "ABC",
            TransactionAction::Buy,
            dec!(100),
            dec!(100),
            dec!(-10000),
        ),
        tx(
            day(2022, 3, 10),
            "ABC",
            TransactionAction::DividendCredit,
            dec!(0),
            dec!(0),
            dec!(120),
        ),
    ];

    let engine = MetricsEngine::new(prices);
    let config = MetricsConfig {
        benchmark_symbol: Some("SPY".to_string()),
        ..Default::default()
    };
    let report = engine.calculate(&ledger, &config).unwrap();

    assert_eq!(report.period_start_date, Some(day(2021, 1, 4)));
    assert_eq!(report.period_end_date, Some(day(2023, 1, 4)));

    // 10000 -> 15120 over ~2 years
    assert_eq!(report.cumulative_return, dec!(0.512));
    assert!(report.annualized_return > dec!(0.20) && report.annualized_return < dec!(0.25));

    // A steady riser has volatility but no meaningful drawdown
    assert!(report.annualized_std_dev.is_some());
    assert_eq!(report.drawdown.max_drawdown_pct, dec!(0));
    assert!(report.calmar_ratio.is_none());

    // 25 monthly samples -> 24 returns, all positive
    assert_eq!(report.positive_periods_pct, Some(dec!(100)));
    assert_eq!(report.gain_loss_ratio, None);
    assert_eq!(report.downside_deviation, Some(dec!(0)));
    assert!(report.sortino_ratio.is_none());
    assert!(report.sharpe_ratio.unwrap() > dec!(0));

    assert!(report.historical_var.is_some());
    assert!(report.skewness.is_some());
    assert!(report.excess_kurtosis.is_some());
    assert!(report.best_year.is_some());

    let benchmark = report.benchmark.as_ref().expect("benchmark section");
    assert_eq!(benchmark.symbol, "SPY");
    assert!(benchmark.beta.is_some());
    assert!(benchmark.correlation.unwrap() > dec!(0.99));
    assert!(benchmark.upside_capture.is_some());
    assert!(report.benchmark_unavailable.is_none());
    assert!(report.warnings.is_empty());
}

#[test]
fn empty_ledger_reports_nothing_to_compute() {
    let engine = MetricsEngine::new(scenario_prices());
    let report = engine
        .calculate(&[], &MetricsConfig::default())
        .unwrap();

    assert_eq!(report.period_start_date, None);
    assert_eq!(report.cumulative_return, dec!(0));
    assert_eq!(report.annualized_std_dev, None);
    assert!(report.benchmark.is_none());
}

#[test]
fn unknown_benchmark_keeps_portfolio_results() {
    let engine = MetricsEngine::new(scenario_prices());
    let config = MetricsConfig {
        benchmark_symbol: Some("NOPE".to_string()),
        ..Default::default()
    };
    let report = engine.calculate(&scenario_ledger(), &config).unwrap();

    assert!(report.benchmark.is_none());
    assert!(report.benchmark_unavailable.is_some());
    // Portfolio-only section still complete
    assert!(report.cumulative_return > dec!(0));
}

#[test]
fn invalid_confidence_is_a_validation_error() {
    let engine = MetricsEngine::new(scenario_prices());
    let config = MetricsConfig {
        var_confidence: dec!(1.5),
        ..Default::default()
    };
    assert!(engine.calculate(&scenario_ledger(), &config).is_err());
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let engine = MetricsEngine::new(scenario_prices());
    let report = engine
        .calculate(&scenario_ledger(), &MetricsConfig::default())
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"cumulativeReturn\""));
    assert!(json.contains("\"annualizedStdDev\""));
    assert!(json.contains("\"maxDrawdownPct\""));
}
