use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation and statistic results
pub const DECIMAL_PRECISION: u32 = 6;

/// Share-count threshold below which a position is considered closed
pub const QUANTITY_THRESHOLD: Decimal = dec!(0.000001);

/// Portfolio values at or below this are treated as "not yet funded"
pub const VALUE_THRESHOLD: Decimal = dec!(0.000001);

/// Beta magnitudes below this make ratio-of-beta statistics meaningless
pub const BETA_THRESHOLD: Decimal = dec!(0.0001);

/// Average calendar days per year, used for annualization
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Monthly samples per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Default annual risk-free rate (1.5%)
pub const DEFAULT_RISK_FREE_RATE: Decimal = dec!(0.015);

/// Default confidence level for VaR/CVaR
pub const DEFAULT_VAR_CONFIDENCE: Decimal = dec!(0.95);
