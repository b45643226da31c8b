//! The seam between chart computation and the numerical ephemeris.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::EphemerisError;

/// Geocentric equatorial position referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquatorialCoord {
    /// Right ascension in degrees, `[0, 360)`.
    pub right_ascension_deg: f64,
    /// Declination in degrees, `[-90, 90]`.
    pub declination_deg: f64,
}

/// Source of body positions.
///
/// Implementations may wrap a numerical integration, a kernel file, or a
/// fixture table in tests. Longitude extraction and retrograde detection
/// happen downstream in [`crate::ChartSnapshot`].
pub trait EphemerisProvider {
    /// Geocentric equatorial coordinates of `body` at the given instant
    /// (Julian Date, universal time).
    fn position(&self, body: Body, jd_ut: f64) -> Result<EquatorialCoord, EphemerisError>;
}

impl<T: EphemerisProvider + ?Sized> EphemerisProvider for &T {
    fn position(&self, body: Body, jd_ut: f64) -> Result<EquatorialCoord, EphemerisError> {
        (**self).position(body, jd_ut)
    }
}
