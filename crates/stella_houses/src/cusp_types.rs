//! Types for house cusp computation.

use serde::{Deserialize, Serialize};

/// Maximum latitude (degrees) for the Placidus system.
///
/// Beyond the polar circles the semi-diurnal arc is undefined for part of
/// the ecliptic (|tan(lat)·tan(dec)| > 1), so computation falls back to
/// Whole Sign cusps there.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

/// The supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HouseSystem {
    /// Placidus: intermediate cusps trisect the semi-diurnal arc in time.
    Placidus,
    /// Whole Sign: each house spans the full zodiac sign, starting at the
    /// sign holding the Ascendant.
    WholeSign,
}

/// All supported house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 2] = [HouseSystem::Placidus, HouseSystem::WholeSign];

impl HouseSystem {
    /// All supported house systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    /// Whether cusp placement depends on geographic latitude.
    ///
    /// Latitude-dependent systems degrade beyond
    /// [`MAX_PLACIDUS_LATITUDE_DEG`].
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus)
    }
}

/// How far a cusp set sits from a fully specified computation.
///
/// Degradations are deliberate, deterministic substitutions surfaced to the
/// caller rather than errors; a chart must always render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApproximationFlag {
    /// Fully specified input, requested system used as-is.
    None,
    /// Birth time unknown; positions taken at local noon.
    NoTime,
    /// No location available; houses are counted from the Sun's sign.
    Solar,
    /// |latitude| exceeded the Placidus limit; Whole Sign substituted.
    ExtremeLatitudeFallback,
}

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Reject coordinates outside the geographic ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err("latitude must be in [-90, 90] degrees");
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be in [-180, 180] degrees");
        }
        Ok(())
    }
}

/// Twelve house cusps plus the separately reported angles.
///
/// `cusps[0]` is house I and `cusps[9]` house X. For Placidus those equal
/// the Ascendant and Midheaven; for Whole Sign the angles float free of the
/// sign-boundary cusps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCuspSet {
    pub system: HouseSystem,
    /// Cusp longitudes of houses I..XII in `[0, 360)` degrees.
    pub cusps: [f64; 12],
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    pub approximation: ApproximationFlag,
    /// False when any root-finder returned a best-effort estimate instead
    /// of a clean zero crossing.
    pub converged: bool,
}
