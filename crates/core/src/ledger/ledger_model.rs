//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of ledger row. Only `Buy` and `Sell` move share holdings; the cash
/// effect of every row, whatever its action, travels in
/// [`Transaction::cash_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionAction {
    Buy,
    Sell,
    DividendCredit,
    CashMisc,
}

impl TransactionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Buy => "BUY",
            TransactionAction::Sell => "SELL",
            TransactionAction::DividendCredit => "DIVIDEND_CREDIT",
            TransactionAction::CashMisc => "CASH_MISC",
        }
    }
}

impl From<TransactionAction> for String {
    fn from(action: TransactionAction) -> Self {
        action.as_str().to_string()
    }
}

/// A single row of the brokerage ledger.
///
/// Invariant: `cash_amount` is the authoritative cash-balance delta for
/// every row regardless of action - buy/sell proceeds, dividends, deposits
/// and withdrawals all flow through it. `quantity` and `price` only matter
/// for share holdings. An empty `symbol` marks a pure cash event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(default)]
    pub symbol: String,
    pub action: TransactionAction,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub cash_amount: Decimal,
}

impl Transaction {
    /// True when this row carries no share movement.
    pub fn is_cash_only(&self) -> bool {
        self.symbol.is_empty()
            || matches!(
                self.action,
                TransactionAction::DividendCredit | TransactionAction::CashMisc
            )
    }
}

/// Stable sort by date. Ties keep their input order, which for file-sourced
/// ledgers is the original file order.
pub fn sort_transactions(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|tx| tx.date);
}

/// Inclusive `[start, end]` date span of a ledger, or `None` when empty.
pub fn date_span(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let start = transactions.iter().map(|tx| tx.date).min()?;
    let end = transactions.iter().map(|tx| tx.date).max()?;
    Some((start, end))
}
