//! Statfolio Core - portfolio valuation replay and risk/return analytics.
//!
//! This crate turns an ordered brokerage transaction ledger plus a
//! historical price series into a daily valuation curve and a full set of
//! risk/return statistics comparable against a benchmark. It is a pure
//! computation core: storage, transport, and price providers live behind
//! the traits defined here and are supplied by the caller.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod market_data;
pub mod portfolio;

// Re-export common types from the ledger and portfolio modules
pub use ledger::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
