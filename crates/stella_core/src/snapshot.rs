//! A positioned set of all ten bodies at one instant.

use serde::{Deserialize, Serialize};
use stella_frames::{longitude_of_ra_dec_rad, mean_obliquity_rad, wrap_pm180_deg};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::point::{CelestialPoint, PointId};
use crate::provider::EphemerisProvider;

/// Forward step used to detect retrograde motion, in days.
///
/// Half a day is short enough that no body sweeps anywhere near 180° (the
/// Moon covers ~6.6°), so the signed wrap of the longitude difference gives
/// the motion direction unambiguously.
pub const RETROGRADE_PROBE_DAYS: f64 = 0.5;

/// Ecliptic longitudes of every body at one instant.
///
/// Points are stored in [`crate::ALL_BODIES`] order, so lookup by body is an
/// index, not a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub jd_ut: f64,
    pub points: [CelestialPoint; 10],
}

/// Ecliptic longitude of a body in degrees, `[0, 360)`.
///
/// Projects the provider's equatorial position through the mean obliquity
/// of date.
pub fn body_longitude_deg<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    jd_ut: f64,
) -> Result<f64, EphemerisError> {
    let eq = provider.position(body, jd_ut)?;
    let lon_rad = longitude_of_ra_dec_rad(
        eq.right_ascension_deg.to_radians(),
        eq.declination_deg.to_radians(),
        mean_obliquity_rad(jd_ut),
    );
    Ok(lon_rad.to_degrees())
}

impl ChartSnapshot {
    /// Positions every body at `jd_ut`, probing a half day ahead to flag
    /// retrograde motion.
    pub fn compute<P: EphemerisProvider + ?Sized>(
        provider: &P,
        jd_ut: f64,
    ) -> Result<ChartSnapshot, EphemerisError> {
        let probe = |body: Body| -> Result<CelestialPoint, EphemerisError> {
            let now = body_longitude_deg(provider, body, jd_ut)?;
            let ahead = body_longitude_deg(provider, body, jd_ut + RETROGRADE_PROBE_DAYS)?;
            let is_retrograde = wrap_pm180_deg(ahead - now) < 0.0;
            Ok(CelestialPoint::new(PointId::Body(body), now, is_retrograde))
        };
        Ok(ChartSnapshot {
            jd_ut,
            points: [
                probe(Body::Sun)?,
                probe(Body::Moon)?,
                probe(Body::Mercury)?,
                probe(Body::Venus)?,
                probe(Body::Mars)?,
                probe(Body::Jupiter)?,
                probe(Body::Saturn)?,
                probe(Body::Uranus)?,
                probe(Body::Neptune)?,
                probe(Body::Pluto)?,
            ],
        })
    }

    /// The positioned point for a body.
    pub fn point(&self, body: Body) -> &CelestialPoint {
        &self.points[body.index()]
    }

    /// Ecliptic longitude of a body in degrees, `[0, 360)`.
    pub fn longitude_deg(&self, body: Body) -> f64 {
        self.point(body).longitude_deg
    }
}
