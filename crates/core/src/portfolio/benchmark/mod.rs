//! Benchmark module - rescale a benchmark price series onto the
//! portfolio's value axis and date grid.

mod benchmark_model;
mod benchmark_service;

pub use benchmark_model::*;
pub use benchmark_service::BenchmarkService;
