//! Portfolio snapshot module - holdings state and the transaction fold.

pub mod holdings_calculator;
mod snapshot_model;

pub use holdings_calculator::*;
pub use snapshot_model::*;
