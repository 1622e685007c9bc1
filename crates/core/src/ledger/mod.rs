//! Ledger module - brokerage transaction domain model.

mod ledger_model;

pub use ledger_model::*;
