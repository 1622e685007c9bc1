//! Resample module - reduce a daily curve to period-end samples.

mod resample_model;
mod resample_service;

pub use resample_model::*;
pub use resample_service::*;

#[cfg(test)]
mod resample_service_tests;
