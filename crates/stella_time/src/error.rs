//! Error types for civil time handling.

use thiserror::Error;

use crate::civil::{MAX_TZ_OFFSET_MINUTES, MIN_TZ_OFFSET_MINUTES};

/// Errors from civil input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date or time of day is malformed.
    #[error("invalid civil date/time: {0}")]
    InvalidCivil(String),
    /// Timezone offset is outside the range observed on Earth.
    #[error(
        "timezone offset {minutes} min outside \
         [{MIN_TZ_OFFSET_MINUTES}, {MAX_TZ_OFFSET_MINUTES}]"
    )]
    InvalidTzOffset { minutes: i32 },
}
