use chrono::Datelike;
use rust_decimal::Decimal;

use crate::ledger::{Transaction, TransactionAction};
use crate::portfolio::income::IncomeSummary;

/// Sums every `DividendCredit` row into yearly and per-symbol totals.
/// Rows without a symbol land under the empty key, which callers usually
/// present as account-level interest.
pub fn summarize_income(transactions: &[Transaction]) -> IncomeSummary {
    let mut summary = IncomeSummary::default();

    for tx in transactions {
        if tx.action != TransactionAction::DividendCredit {
            continue;
        }

        summary.total += tx.cash_amount;
        *summary
            .by_year
            .entry(tx.date.year())
            .or_insert(Decimal::ZERO) += tx.cash_amount;
        *summary
            .by_symbol
            .entry(tx.symbol.clone())
            .or_insert(Decimal::ZERO) += tx.cash_amount;
    }

    summary
}
