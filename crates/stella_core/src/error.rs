//! Error type for ephemeris lookups.

use thiserror::Error;

use crate::body::Body;

/// Failure reported by an [`crate::EphemerisProvider`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider could not produce a position for the request.
    #[error("no position for {body} at JD {jd_ut}: {message}")]
    Unavailable { body: Body, jd_ut: f64, message: String },
}

impl EphemerisError {
    /// Convenience constructor for provider implementations.
    pub fn unavailable(body: Body, jd_ut: f64, message: impl Into<String>) -> EphemerisError {
        EphemerisError::Unavailable {
            body,
            jd_ut,
            message: message.into(),
        }
    }
}
