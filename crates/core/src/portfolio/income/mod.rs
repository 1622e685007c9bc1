//! Income module - dividend and cash-income aggregation.

mod income_model;
mod income_service;

pub use income_model::*;
pub use income_service::*;
