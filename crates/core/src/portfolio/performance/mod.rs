//! Performance module - the risk/return statistics battery.

pub mod performance_model;
pub mod performance_service;

pub use performance_model::*;
pub use performance_service::MetricsEngine;
