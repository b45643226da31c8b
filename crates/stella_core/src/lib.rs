//! Core chart model: celestial bodies, zodiac signs, chart points, and the
//! ephemeris provider seam.
//!
//! Everything downstream (houses, aspects, scanning) consumes positions
//! through [`EphemerisProvider`], so the numerical source stays swappable.

pub mod body;
pub mod error;
pub mod point;
pub mod provider;
pub mod snapshot;
pub mod zodiac;

pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use point::{AnglePoint, CelestialPoint, PointClass, PointId};
pub use provider::{EphemerisProvider, EquatorialCoord};
pub use snapshot::ChartSnapshot;
pub use zodiac::{ALL_SIGNS, ZodiacSign};
