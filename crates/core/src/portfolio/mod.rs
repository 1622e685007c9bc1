//! Portfolio analytics: ledger replay, resampling, benchmark alignment,
//! drawdown tracking, and the risk/return metrics battery.

pub mod benchmark;
pub mod drawdown;
pub mod income;
pub mod performance;
pub mod resample;
pub mod snapshot;
pub mod valuation;

pub use benchmark::*;
pub use drawdown::*;
pub use income::*;
pub use performance::*;
pub use resample::*;
pub use snapshot::*;
pub use valuation::*;
