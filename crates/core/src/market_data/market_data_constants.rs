/// How many calendar days `price_on_or_before` walks back to bridge
/// weekends, holidays, and gaps before giving up on a date.
pub const DEFAULT_PRICE_LOOKBACK_DAYS: i64 = 7;
