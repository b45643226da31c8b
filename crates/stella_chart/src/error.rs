//! Error type for chart assembly.

use thiserror::Error;

/// Errors from building a chart or one of its reports.
///
/// Every variant wraps the error of the crate that rejected its input, so
/// a caller can match on the failing stage.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from civil time conversion.
    #[error("time error: {0}")]
    Time(#[from] stella_time::TimeError),
    /// Error from house cusp computation.
    #[error("house error: {0}")]
    House(#[from] stella_houses::HouseError),
    /// Error from the ephemeris provider.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] stella_core::EphemerisError),
    /// Error from a window scan.
    #[error("scan error: {0}")]
    Scan(#[from] stella_search::ScanError),
}
