//! Error type for window scanning.

use thiserror::Error;

/// Errors from a multi-day scan.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// Invalid scan configuration parameter.
    #[error("invalid scan config: {0}")]
    InvalidConfig(&'static str),
    /// The ephemeris provider failed for some day of the horizon.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] stella_core::EphemerisError),
}
