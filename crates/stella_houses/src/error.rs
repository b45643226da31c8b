//! Error type for house computation.

use thiserror::Error;

/// Errors from house cusp computation.
///
/// Numerical edge cases never surface here: a root-finder that exhausts its
/// budget degrades to a flagged best-effort result, and extreme latitudes
/// fall back to Whole Sign cusps. Only malformed input is an error.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Error from civil time conversion.
    #[error("time error: {0}")]
    Time(#[from] stella_time::TimeError),
}
