//! Drawdown module - peak/trough/recovery tracking over a daily curve.

mod drawdown_analyzer;
mod drawdown_model;

pub use drawdown_analyzer::DrawdownAnalyzer;
pub use drawdown_model::*;
