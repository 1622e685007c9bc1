use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::portfolio::drawdown::DrawdownReport;
use crate::portfolio::valuation::DailyValue;

/// Incremental peak/trough/recovery state machine.
///
/// Feed values in date order via [`observe`](Self::observe); the running
/// peak always equals the maximum value seen so far. The maximum drawdown
/// window is re-anchored whenever a deeper decline appears, which also
/// clears any previously recorded recovery. Recovery is recorded on the
/// first value that regains the peak from which the maximum drawdown
/// started.
#[derive(Debug, Clone, Default)]
pub struct DrawdownAnalyzer {
    peak_value: Decimal,
    peak_date: Option<NaiveDate>,
    in_drawdown: bool,
    current_drawdown_start: Option<NaiveDate>,
    max_drawdown_pct: Decimal,
    max_drawdown_start: Option<NaiveDate>,
    max_drawdown_end: Option<NaiveDate>,
    max_drawdown_peak_value: Decimal,
    recovery_date: Option<NaiveDate>,
    observations: usize,
}

impl DrawdownAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the whole curve through a fresh analyzer.
    pub fn analyze(daily_values: &[DailyValue]) -> DrawdownReport {
        let mut analyzer = Self::new();
        for dv in daily_values {
            analyzer.observe(dv.date, dv.value);
        }
        analyzer.report()
    }

    pub fn observe(&mut self, date: NaiveDate, value: Decimal) {
        self.observations += 1;

        if self.observations == 1 {
            self.peak_value = value;
            self.peak_date = Some(date);
            return;
        }

        if value > self.peak_value {
            let regained_max_drawdown_peak = self.in_drawdown
                && self.current_drawdown_start == self.max_drawdown_start
                && self.recovery_date.is_none()
                && value >= self.max_drawdown_peak_value;
            if regained_max_drawdown_peak {
                self.recovery_date = Some(date);
            }
            self.in_drawdown = false;
            self.current_drawdown_start = None;
            self.peak_value = value;
            self.peak_date = Some(date);
            return;
        }

        if self.peak_value <= Decimal::ZERO {
            return;
        }

        let drawdown = (self.peak_value - value) / self.peak_value;
        if !self.in_drawdown && drawdown > Decimal::ZERO {
            self.in_drawdown = true;
            self.current_drawdown_start = self.peak_date;
        }
        if drawdown > self.max_drawdown_pct {
            self.max_drawdown_pct = drawdown;
            self.max_drawdown_start = self.current_drawdown_start;
            self.max_drawdown_end = Some(date);
            self.max_drawdown_peak_value = self.peak_value;
            self.recovery_date = None;
        }
    }

    /// Running peak of every value observed so far.
    pub fn peak_value(&self) -> Decimal {
        self.peak_value
    }

    pub fn report(&self) -> DrawdownReport {
        if self.observations < 2 {
            return DrawdownReport::default();
        }

        let recovery_days = match (self.recovery_date, self.max_drawdown_end) {
            (Some(recovery), Some(end)) => Some((recovery - end).num_days()),
            _ => None,
        };

        DrawdownReport {
            max_drawdown_pct: self.max_drawdown_pct,
            max_drawdown_start: self.max_drawdown_start,
            max_drawdown_end: self.max_drawdown_end,
            recovery_date: self.recovery_date,
            recovery_days,
        }
    }
}
