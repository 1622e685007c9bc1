//! The pure transaction fold: one ledger row in, the next holdings state out.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};
use crate::ledger::{Transaction, TransactionAction};
use crate::portfolio::snapshot::HoldingsState;

/// Applies a single transaction to a holdings state.
///
/// `Buy` adds shares, `Sell` removes them; every row, whatever its action,
/// moves cash by `cash_amount` - that field is the single source of truth
/// for buy/sell proceeds, dividends, deposits, and withdrawals alike.
/// Positions whose share count falls inside the float-noise threshold are
/// removed.
pub fn apply_transaction(state: &mut HoldingsState, tx: &Transaction) {
    match tx.action {
        TransactionAction::Buy if !tx.symbol.is_empty() => {
            *state
                .positions
                .entry(tx.symbol.clone())
                .or_insert(Decimal::ZERO) += tx.quantity;
            state.purge_dust(&tx.symbol);
        }
        TransactionAction::Sell if !tx.symbol.is_empty() => {
            *state
                .positions
                .entry(tx.symbol.clone())
                .or_insert(Decimal::ZERO) -= tx.quantity;
            state.purge_dust(&tx.symbol);
        }
        // Dividends and miscellaneous cash rows carry no share movement;
        // Buy/Sell with an empty symbol should have been rejected upstream.
        _ => {}
    }

    state.cash += tx.cash_amount;
}

/// Rejects rows that can never be replayed meaningfully.
pub fn validate_transaction(tx: &Transaction) -> Result<()> {
    if tx.quantity.is_sign_negative() {
        return Err(CalculatorError::InvalidTransaction(format!(
            "negative quantity {} on {}",
            tx.quantity, tx.date
        ))
        .into());
    }
    if tx.price.is_sign_negative() {
        return Err(CalculatorError::InvalidTransaction(format!(
            "negative price {} on {}",
            tx.price, tx.date
        ))
        .into());
    }
    if tx.symbol.is_empty()
        && matches!(
            tx.action,
            TransactionAction::Buy | TransactionAction::Sell
        )
    {
        return Err(CalculatorError::InvalidTransaction(format!(
            "{} without a symbol on {}",
            tx.action.as_str(),
            tx.date
        ))
        .into());
    }
    Ok(())
}

/// End-of-day holdings after replaying every transaction dated on or before
/// `cutoff`. Input order is preserved for same-day ties.
pub fn holdings_as_of(transactions: &[Transaction], cutoff: NaiveDate) -> Result<HoldingsState> {
    let mut applicable: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.date <= cutoff)
        .collect();
    applicable.sort_by_key(|tx| tx.date);

    let mut state = HoldingsState::new();
    for tx in &applicable {
        validate_transaction(tx)?;
        apply_transaction(&mut state, tx);
    }

    debug!(
        "Holdings as of {}: {} open positions, cash {}",
        cutoff,
        state.positions.len(),
        state.cash
    );

    Ok(state)
}
