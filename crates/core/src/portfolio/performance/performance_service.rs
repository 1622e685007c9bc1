use chrono::NaiveDate;
use log::warn;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::{BETA_THRESHOLD, DAYS_PER_YEAR, DECIMAL_PRECISION, MONTHS_PER_YEAR};
use crate::errors::Result;
use crate::ledger::Transaction;
use crate::market_data::PriceSeriesTrait;
use crate::portfolio::benchmark::{BenchmarkAlignment, BenchmarkService};
use crate::portfolio::drawdown::DrawdownAnalyzer;
use crate::portfolio::performance::{BenchmarkMetrics, MetricsConfig, MetricsReport};
use crate::portfolio::resample::{period_returns, to_period, Granularity, PeriodValue};
use crate::portfolio::valuation::{DailyValue, ValuationService};

// One-sided z-scores for parametric VaR
const Z_SCORE_90: Decimal = dec!(1.2816);
const Z_SCORE_95: Decimal = dec!(1.6449);
const Z_SCORE_99: Decimal = dec!(2.3263);

/// Annuity horizon for the safe withdrawal rate, in years
const SAFE_WITHDRAWAL_HORIZON_YEARS: u32 = 30;

/// Computes the full risk/return battery for a transaction ledger.
///
/// Every statistic is a pure function of period samples; this struct only
/// wires replay, resampling, and benchmark alignment together. Statistics
/// that need more history than the ledger provides come back `None` while
/// the rest of the report still completes.
pub struct MetricsEngine {
    valuation_service: ValuationService,
    benchmark_service: BenchmarkService,
}

impl MetricsEngine {
    pub fn new(price_series: Arc<dyn PriceSeriesTrait>) -> Self {
        Self {
            valuation_service: ValuationService::new(price_series.clone()),
            benchmark_service: BenchmarkService::new(price_series),
        }
    }

    pub fn calculate(
        &self,
        transactions: &[Transaction],
        config: &MetricsConfig,
    ) -> Result<MetricsReport> {
        config.validate()?;

        let replay = self.valuation_service.replay(transactions)?;
        if replay.daily_values.is_empty() {
            return Ok(MetricsReport::empty(config.var_confidence, replay.warnings));
        }
        let daily = &replay.daily_values;

        let monthly = to_period(daily, Granularity::Month);
        let yearly = to_period(daily, Granularity::Year);
        let monthly_returns = period_returns(&monthly);
        let yearly_returns = period_returns(&yearly);

        let first = &daily[0];
        let last = &daily[daily.len() - 1];
        let years = Self::years_between(first.date, last.date);

        let cumulative_return = Self::cumulative_return(first.value, last.value);
        let annualized_return = Self::cagr(first.value, last.value, years);
        let annualized_std_dev = Self::annualized_std_dev(&monthly_returns, MONTHS_PER_YEAR);
        let downside_deviation = Self::downside_deviation(&monthly_returns, MONTHS_PER_YEAR);
        let sharpe_ratio =
            Self::sharpe_ratio(annualized_return, config.risk_free_rate, annualized_std_dev);
        let sortino_ratio =
            Self::sortino_ratio(annualized_return, config.risk_free_rate, downside_deviation);

        let drawdown = DrawdownAnalyzer::analyze(daily);
        let calmar_ratio = Self::calmar_ratio(annualized_return, drawdown.max_drawdown_pct);

        let benchmark_section = match &config.benchmark_symbol {
            Some(symbol) => Some(self.benchmark_metrics(
                symbol,
                daily,
                &monthly,
                annualized_return,
                sharpe_ratio,
                config,
            )?),
            None => None,
        };
        let (benchmark, benchmark_unavailable) = match benchmark_section {
            Some(Ok(metrics)) => (Some(metrics), None),
            Some(Err(reason)) => {
                warn!("Benchmark section skipped: {}", reason);
                (None, Some(reason))
            }
            None => (None, None),
        };

        Ok(MetricsReport {
            period_start_date: Some(first.date),
            period_end_date: Some(last.date),
            cumulative_return: cumulative_return.round_dp(DECIMAL_PRECISION),
            annualized_return: annualized_return.round_dp(DECIMAL_PRECISION),
            arithmetic_mean_return: Self::arithmetic_mean_return(&monthly_returns)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            geometric_mean_return: Self::geometric_mean_return(&monthly_returns)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            best_year: Self::best_period(&yearly_returns),
            worst_year: Self::worst_period(&yearly_returns),
            positive_periods_pct: Self::positive_periods_pct(&monthly_returns),
            gain_loss_ratio: Self::gain_loss_ratio(&monthly_returns),
            annualized_std_dev: annualized_std_dev.map(|v| v.round_dp(DECIMAL_PRECISION)),
            downside_deviation: downside_deviation.map(|v| v.round_dp(DECIMAL_PRECISION)),
            sharpe_ratio: sharpe_ratio.map(|v| v.round_dp(DECIMAL_PRECISION)),
            sortino_ratio: sortino_ratio.map(|v| v.round_dp(DECIMAL_PRECISION)),
            calmar_ratio: calmar_ratio.map(|v| v.round_dp(DECIMAL_PRECISION)),
            skewness: Self::skewness(&monthly_returns).map(|v| v.round_dp(DECIMAL_PRECISION)),
            excess_kurtosis: Self::excess_kurtosis(&monthly_returns)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            var_confidence: config.var_confidence,
            historical_var: Self::historical_var(&monthly_returns, config.var_confidence)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            historical_cvar: Self::historical_cvar(&monthly_returns, config.var_confidence)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            analytical_var_90: Self::analytical_var(&monthly_returns, Z_SCORE_90)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            analytical_var_95: Self::analytical_var(&monthly_returns, Z_SCORE_95)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            analytical_var_99: Self::analytical_var(&monthly_returns, Z_SCORE_99)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            safe_withdrawal_rate: Self::safe_withdrawal_rate(annualized_return)
                .round_dp(DECIMAL_PRECISION),
            perpetual_withdrawal_rate: Self::perpetual_withdrawal_rate(annualized_return)
                .round_dp(DECIMAL_PRECISION),
            drawdown,
            benchmark,
            benchmark_unavailable,
            warnings: replay.warnings,
        })
    }

    fn benchmark_metrics(
        &self,
        symbol: &str,
        daily: &[DailyValue],
        monthly: &[PeriodValue],
        portfolio_annualized: Decimal,
        portfolio_sharpe: Option<Decimal>,
        config: &MetricsConfig,
    ) -> Result<std::result::Result<BenchmarkMetrics, crate::portfolio::benchmark::BenchmarkUnavailableReason>>
    {
        let curve = match self.benchmark_service.align(symbol, daily)? {
            BenchmarkAlignment::Aligned(curve) => curve,
            BenchmarkAlignment::Unavailable(reason) => return Ok(Err(reason)),
        };

        let first = &curve[0];
        let last = &curve[curve.len() - 1];
        let years = Self::years_between(first.date, last.date);
        let benchmark_annualized = Self::cagr(first.value, last.value, years);

        let benchmark_monthly = to_period(&curve, Granularity::Month);
        let paired = Self::paired_period_returns(monthly, &benchmark_monthly);
        let portfolio_returns: Vec<Decimal> = paired.iter().map(|(p, _)| *p).collect();
        let benchmark_returns: Vec<Decimal> = paired.iter().map(|(_, b)| *b).collect();

        let beta = Self::beta(&portfolio_returns, &benchmark_returns);
        let alpha = beta.map(|beta| {
            Self::alpha(
                portfolio_annualized,
                benchmark_annualized,
                beta,
                config.risk_free_rate,
            )
        });
        let correlation = Self::correlation(&portfolio_returns, &benchmark_returns);
        let benchmark_std_dev = Self::annualized_std_dev(&benchmark_returns, MONTHS_PER_YEAR);
        let tracking_error =
            Self::tracking_error(&portfolio_returns, &benchmark_returns, MONTHS_PER_YEAR);

        Ok(Ok(BenchmarkMetrics {
            symbol: symbol.to_string(),
            annualized_return: benchmark_annualized.round_dp(DECIMAL_PRECISION),
            annualized_std_dev: benchmark_std_dev.map(|v| v.round_dp(DECIMAL_PRECISION)),
            beta: beta.map(|v| v.round_dp(DECIMAL_PRECISION)),
            alpha: alpha.map(|v| v.round_dp(DECIMAL_PRECISION)),
            correlation: correlation.map(|v| v.round_dp(DECIMAL_PRECISION)),
            r_squared: correlation.map(|c| (c * c).round_dp(DECIMAL_PRECISION)),
            treynor_ratio: Self::treynor_ratio(portfolio_annualized, config.risk_free_rate, beta)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            m_squared: Self::m_squared(portfolio_sharpe, config.risk_free_rate, benchmark_std_dev)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            tracking_error: tracking_error.map(|v| v.round_dp(DECIMAL_PRECISION)),
            information_ratio: Self::information_ratio(
                portfolio_annualized,
                benchmark_annualized,
                tracking_error,
            )
            .map(|v| v.round_dp(DECIMAL_PRECISION)),
            upside_capture: Self::capture_ratio(&paired, true)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
            downside_capture: Self::capture_ratio(&paired, false)
                .map(|v| v.round_dp(DECIMAL_PRECISION)),
        }))
    }

    /// Month-key-matched simple returns for portfolio and benchmark.
    /// Returns are taken across consecutive *common* months so both sides
    /// of every pair cover the same interval.
    fn paired_period_returns(
        portfolio: &[PeriodValue],
        benchmark: &[PeriodValue],
    ) -> Vec<(Decimal, Decimal)> {
        let benchmark_by_key: HashMap<&str, Decimal> = benchmark
            .iter()
            .map(|sample| (sample.period_key.as_str(), sample.value))
            .collect();

        let common: Vec<(Decimal, Decimal)> = portfolio
            .iter()
            .filter_map(|sample| {
                benchmark_by_key
                    .get(sample.period_key.as_str())
                    .map(|benchmark_value| (sample.value, *benchmark_value))
            })
            .collect();

        common
            .windows(2)
            .map(|pair| {
                let (prev_p, prev_b) = pair[0];
                let (curr_p, curr_b) = pair[1];
                let portfolio_return = if prev_p <= Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    curr_p / prev_p - Decimal::ONE
                };
                let benchmark_return = if prev_b <= Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    curr_b / prev_b - Decimal::ONE
                };
                (portfolio_return, benchmark_return)
            })
            .collect()
    }

    // === Return measures ===

    pub fn years_between(start: NaiveDate, end: NaiveDate) -> Decimal {
        let days = (end - start).num_days();
        if days <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(days) / DAYS_PER_YEAR
    }

    /// Compound annual growth rate `(end/start)^(1/years) - 1`.
    /// A non-positive start or span resolves to zero; a wiped-out end value
    /// caps at -100%.
    pub fn cagr(start_value: Decimal, end_value: Decimal, years: Decimal) -> Decimal {
        if start_value <= Decimal::ZERO || years <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let base = end_value / start_value;
        if base <= Decimal::ZERO {
            return dec!(-1);
        }

        base.powd(Decimal::ONE / years) - Decimal::ONE
    }

    pub fn cumulative_return(start_value: Decimal, end_value: Decimal) -> Decimal {
        if start_value <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        end_value / start_value - Decimal::ONE
    }

    pub fn arithmetic_mean_return(returns: &[Decimal]) -> Option<Decimal> {
        Self::mean(returns)
    }

    /// Geometric mean via the product of `(1+r)` growth factors. A
    /// non-positive product means the capital was wiped out somewhere along
    /// the way (or an even-length negative product would need a complex
    /// root); both collapse to -100%.
    pub fn geometric_mean_return(returns: &[Decimal]) -> Option<Decimal> {
        if returns.is_empty() {
            return None;
        }

        let product = returns
            .iter()
            .fold(Decimal::ONE, |acc, r| acc * (Decimal::ONE + r));
        if product <= Decimal::ZERO {
            return Some(dec!(-1));
        }

        let exponent = Decimal::ONE / Decimal::from(returns.len());
        Some(product.powd(exponent) - Decimal::ONE)
    }

    pub fn best_period(returns: &[Decimal]) -> Option<Decimal> {
        returns.iter().copied().max()
    }

    pub fn worst_period(returns: &[Decimal]) -> Option<Decimal> {
        returns.iter().copied().min()
    }

    /// Share of periods with a strictly positive return, as a percentage.
    pub fn positive_periods_pct(returns: &[Decimal]) -> Option<Decimal> {
        if returns.is_empty() {
            return None;
        }
        let positive = returns.iter().filter(|r| **r > Decimal::ZERO).count();
        Some(Decimal::from(positive) / Decimal::from(returns.len()) * dec!(100))
    }

    /// Mean gain over mean loss magnitude. `None` without any losing
    /// period - an all-gain series has no loss to divide by.
    pub fn gain_loss_ratio(returns: &[Decimal]) -> Option<Decimal> {
        let gains: Vec<Decimal> = returns
            .iter()
            .copied()
            .filter(|r| *r > Decimal::ZERO)
            .collect();
        let losses: Vec<Decimal> = returns
            .iter()
            .copied()
            .filter(|r| *r < Decimal::ZERO)
            .collect();

        let mean_loss = Self::mean(&losses)?.abs();
        if mean_loss.is_zero() {
            return None;
        }
        let mean_gain = Self::mean(&gains).unwrap_or(Decimal::ZERO);
        Some(mean_gain / mean_loss)
    }

    // === Risk measures ===

    pub fn annualized_std_dev(returns: &[Decimal], periods_per_year: u32) -> Option<Decimal> {
        let std_dev = Self::sample_std_dev(returns)?;
        let factor = Decimal::from(periods_per_year)
            .sqrt()
            .unwrap_or(Decimal::ZERO);
        Some(std_dev * factor)
    }

    /// Deviation of below-zero returns from the 0% target, annualized like
    /// the full stdev. All-gain series report zero downside.
    pub fn downside_deviation(returns: &[Decimal], periods_per_year: u32) -> Option<Decimal> {
        if returns.is_empty() {
            return None;
        }

        let below: Vec<Decimal> = returns
            .iter()
            .copied()
            .filter(|r| *r < Decimal::ZERO)
            .collect();
        if below.is_empty() {
            return Some(Decimal::ZERO);
        }

        let sum_squared: Decimal = below.iter().map(|r| r * r).sum();
        let variance = sum_squared / Decimal::from(below.len());
        let deviation = variance.sqrt().unwrap_or(Decimal::ZERO);
        let factor = Decimal::from(periods_per_year)
            .sqrt()
            .unwrap_or(Decimal::ZERO);
        Some(deviation * factor)
    }

    pub fn sharpe_ratio(
        annualized_return: Decimal,
        risk_free_rate: Decimal,
        annualized_std_dev: Option<Decimal>,
    ) -> Option<Decimal> {
        let std_dev = annualized_std_dev?;
        if std_dev.is_zero() {
            return None;
        }
        Some((annualized_return - risk_free_rate) / std_dev)
    }

    pub fn sortino_ratio(
        annualized_return: Decimal,
        risk_free_rate: Decimal,
        downside_deviation: Option<Decimal>,
    ) -> Option<Decimal> {
        let downside = downside_deviation?;
        if downside.is_zero() {
            return None;
        }
        Some((annualized_return - risk_free_rate) / downside)
    }

    pub fn calmar_ratio(annualized_return: Decimal, max_drawdown: Decimal) -> Option<Decimal> {
        if max_drawdown <= Decimal::ZERO {
            return None;
        }
        Some(annualized_return / max_drawdown)
    }

    /// Fisher skewness with the small-sample bias correction
    /// `n/((n-1)(n-2)) * sum(z^3)`.
    pub fn skewness(returns: &[Decimal]) -> Option<Decimal> {
        let n = returns.len();
        if n < 3 {
            return None;
        }

        let mean = Self::mean(returns)?;
        let std_dev = Self::sample_std_dev(returns)?;
        if std_dev.is_zero() {
            return None;
        }

        let sum_cubed: Decimal = returns
            .iter()
            .map(|r| ((r - mean) / std_dev).powi(3))
            .sum();

        let n = Decimal::from(n);
        let correction = n / ((n - Decimal::ONE) * (n - dec!(2)));
        Some(correction * sum_cubed)
    }

    /// Excess kurtosis with the Fisher small-sample bias correction.
    pub fn excess_kurtosis(returns: &[Decimal]) -> Option<Decimal> {
        let n = returns.len();
        if n < 4 {
            return None;
        }

        let mean = Self::mean(returns)?;
        let std_dev = Self::sample_std_dev(returns)?;
        if std_dev.is_zero() {
            return None;
        }

        let sum_fourth: Decimal = returns
            .iter()
            .map(|r| ((r - mean) / std_dev).powi(4))
            .sum();

        let n = Decimal::from(n);
        let one = Decimal::ONE;
        let lead = n * (n + one) / ((n - one) * (n - dec!(2)) * (n - dec!(3)));
        let tail = dec!(3) * (n - one) * (n - one) / ((n - dec!(2)) * (n - dec!(3)));
        Some(lead * sum_fourth - tail)
    }

    // === Tail risk ===

    /// Empirical VaR: the loss at the `(1-c)` quantile of the sorted return
    /// distribution, reported as a positive number for a loss.
    pub fn historical_var(returns: &[Decimal], confidence: Decimal) -> Option<Decimal> {
        let sorted = Self::sorted_returns(returns)?;
        let index = Self::var_index(sorted.len(), confidence);
        Some(-sorted[index])
    }

    /// Mean loss across the tail at and beyond the VaR observation.
    pub fn historical_cvar(returns: &[Decimal], confidence: Decimal) -> Option<Decimal> {
        let sorted = Self::sorted_returns(returns)?;
        let index = Self::var_index(sorted.len(), confidence);
        let tail = &sorted[..=index];
        Self::mean(tail).map(|m| -m)
    }

    /// Parametric VaR `-(mean - z * stdev)` under a normal assumption.
    pub fn analytical_var(returns: &[Decimal], z_score: Decimal) -> Option<Decimal> {
        let mean = Self::mean(returns)?;
        let std_dev = Self::sample_std_dev(returns)?;
        Some(-(mean - z_score * std_dev))
    }

    fn sorted_returns(returns: &[Decimal]) -> Option<Vec<Decimal>> {
        if returns.is_empty() {
            return None;
        }
        let mut sorted = returns.to_vec();
        sorted.sort();
        Some(sorted)
    }

    fn var_index(count: usize, confidence: Decimal) -> usize {
        let index = (Decimal::from(count) * (Decimal::ONE - confidence))
            .floor()
            .to_usize()
            .unwrap_or(0);
        index.min(count - 1)
    }

    // === Benchmark-relative measures ===

    /// Systematic exposure: population covariance over population variance
    /// of the paired period returns.
    pub fn beta(portfolio_returns: &[Decimal], benchmark_returns: &[Decimal]) -> Option<Decimal> {
        let covariance = Self::population_covariance(portfolio_returns, benchmark_returns)?;
        let variance = Self::population_covariance(benchmark_returns, benchmark_returns)?;
        if variance.is_zero() {
            return None;
        }
        Some(covariance / variance)
    }

    /// CAPM alpha: return in excess of what beta alone would earn.
    pub fn alpha(
        portfolio_return: Decimal,
        benchmark_return: Decimal,
        beta: Decimal,
        risk_free_rate: Decimal,
    ) -> Decimal {
        portfolio_return - (risk_free_rate + beta * (benchmark_return - risk_free_rate))
    }

    pub fn correlation(
        portfolio_returns: &[Decimal],
        benchmark_returns: &[Decimal],
    ) -> Option<Decimal> {
        let covariance = Self::population_covariance(portfolio_returns, benchmark_returns)?;
        let portfolio_var = Self::population_covariance(portfolio_returns, portfolio_returns)?;
        let benchmark_var = Self::population_covariance(benchmark_returns, benchmark_returns)?;

        let denominator = (portfolio_var.sqrt().unwrap_or(Decimal::ZERO))
            * (benchmark_var.sqrt().unwrap_or(Decimal::ZERO));
        if denominator.is_zero() {
            return None;
        }
        Some(covariance / denominator)
    }

    pub fn treynor_ratio(
        annualized_return: Decimal,
        risk_free_rate: Decimal,
        beta: Option<Decimal>,
    ) -> Option<Decimal> {
        let beta = beta?;
        if beta.abs() < BETA_THRESHOLD {
            return None;
        }
        Some((annualized_return - risk_free_rate) / beta)
    }

    /// Modigliani risk-adjusted return: what the portfolio would have
    /// earned at the benchmark's volatility.
    pub fn m_squared(
        sharpe_ratio: Option<Decimal>,
        risk_free_rate: Decimal,
        benchmark_std_dev: Option<Decimal>,
    ) -> Option<Decimal> {
        Some(risk_free_rate + sharpe_ratio? * benchmark_std_dev?)
    }

    pub fn tracking_error(
        portfolio_returns: &[Decimal],
        benchmark_returns: &[Decimal],
        periods_per_year: u32,
    ) -> Option<Decimal> {
        if portfolio_returns.len() != benchmark_returns.len() {
            return None;
        }
        let diffs: Vec<Decimal> = portfolio_returns
            .iter()
            .zip(benchmark_returns)
            .map(|(p, b)| p - b)
            .collect();
        Self::annualized_std_dev(&diffs, periods_per_year)
    }

    pub fn information_ratio(
        portfolio_annualized: Decimal,
        benchmark_annualized: Decimal,
        tracking_error: Option<Decimal>,
    ) -> Option<Decimal> {
        let tracking_error = tracking_error?;
        if tracking_error.is_zero() {
            return None;
        }
        Some((portfolio_annualized - benchmark_annualized) / tracking_error)
    }

    /// Compounded portfolio move over the benchmark's up (or down) months,
    /// relative to the benchmark's own compounded move, as a percentage.
    pub fn capture_ratio(
        paired_returns: &[(Decimal, Decimal)],
        upside: bool,
    ) -> Option<Decimal> {
        let selected: Vec<(Decimal, Decimal)> = paired_returns
            .iter()
            .copied()
            .filter(|(_, benchmark)| {
                if upside {
                    *benchmark > Decimal::ZERO
                } else {
                    *benchmark < Decimal::ZERO
                }
            })
            .collect();
        if selected.is_empty() {
            return None;
        }

        let portfolio_compound = selected
            .iter()
            .fold(Decimal::ONE, |acc, (p, _)| acc * (Decimal::ONE + p))
            - Decimal::ONE;
        let benchmark_compound = selected
            .iter()
            .fold(Decimal::ONE, |acc, (_, b)| acc * (Decimal::ONE + b))
            - Decimal::ONE;

        if benchmark_compound.is_zero() {
            return None;
        }
        Some(portfolio_compound / benchmark_compound * dec!(100))
    }

    // === Withdrawal rates ===

    /// Fraction of the portfolio withdrawable at the start of each year
    /// while preserving principal forever: `g/(1+g)`. Zero when growth is
    /// non-positive.
    pub fn perpetual_withdrawal_rate(annualized_return: Decimal) -> Decimal {
        if annualized_return <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        annualized_return / (Decimal::ONE + annualized_return)
    }

    /// Annuity amortization over a 30-year horizon:
    /// `g*(1+g)^30 / ((1+g)^30 - 1)`, approaching 1/30 as growth goes to
    /// zero. Negative growth reports zero rather than a guaranteed
    /// depletion schedule.
    pub fn safe_withdrawal_rate(annualized_return: Decimal) -> Decimal {
        let horizon = Decimal::from(SAFE_WITHDRAWAL_HORIZON_YEARS);
        if annualized_return.is_sign_negative() {
            return Decimal::ZERO;
        }
        if annualized_return.is_zero() {
            return Decimal::ONE / horizon;
        }

        let growth = (Decimal::ONE + annualized_return).powd(horizon);
        if growth <= Decimal::ONE {
            return Decimal::ONE / horizon;
        }
        annualized_return * growth / (growth - Decimal::ONE)
    }

    // === Moment helpers ===

    fn mean(values: &[Decimal]) -> Option<Decimal> {
        if values.is_empty() {
            return None;
        }
        let sum: Decimal = values.iter().sum();
        Some(sum / Decimal::from(values.len()))
    }

    fn sample_std_dev(values: &[Decimal]) -> Option<Decimal> {
        if values.len() < 2 {
            return None;
        }

        let mean = Self::mean(values)?;
        let sum_squared_diff: Decimal = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum();
        let variance = sum_squared_diff / Decimal::from(values.len() - 1);
        Some(variance.sqrt().unwrap_or(Decimal::ZERO))
    }

    fn population_covariance(x: &[Decimal], y: &[Decimal]) -> Option<Decimal> {
        if x.is_empty() || x.len() != y.len() {
            return None;
        }

        let mean_x = Self::mean(x)?;
        let mean_y = Self::mean(y)?;
        let sum: Decimal = x
            .iter()
            .zip(y)
            .map(|(a, b)| (a - mean_x) * (b - mean_y))
            .sum();
        Some(sum / Decimal::from(x.len()))
    }
}
