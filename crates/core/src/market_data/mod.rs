//! Market data module - the price-series capability consumed by valuation.

mod market_data_constants;
mod market_data_errors;
mod market_data_model;
mod market_data_service;
mod market_data_traits;

pub use market_data_constants::*;
pub use market_data_model::PricePoint;
pub use market_data_service::HistoricalPriceSeries;
pub use market_data_traits::PriceSeriesTrait;

pub use market_data_errors::MarketDataError;
