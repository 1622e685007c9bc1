use thiserror::Error;

/// Capability-level failures of a price source.
///
/// A missing price inside the lookback window is NOT an error - lookups
/// return `Ok(None)` for that. These variants are for a source that cannot
/// answer at all (bad credentials, unreachable backend, corrupt store).
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Price provider failure: {0}")]
    ProviderError(String),

    #[error("No price history exists for symbol: {0}")]
    UnknownSymbol(String),
}
