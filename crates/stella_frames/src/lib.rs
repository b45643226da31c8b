//! Angle arithmetic and coordinate transforms for chart computation.
//!
//! Provides:
//! - Degree-space angle helpers (normalization, signed wrap, separation)
//! - Mean obliquity of the ecliptic (Meeus polynomial)
//! - Equatorial (RA/Dec) ↔ ecliptic longitude transforms for points on the
//!   ecliptic, plus the closed-form derivative used by Newton inversion
//!
//! All functions are pure and total. Callers are expected to normalize
//! after every trigonometric step; the helpers here always return values
//! in their documented canonical range.

pub mod angles;
pub mod obliquity;
pub mod transform;

pub use angles::{
    angular_separation_deg, arc_forward_deg, normalize_deg, normalize_rad, wrap_pm180_deg,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, mean_obliquity_rad};
pub use transform::{
    declination_of_longitude_rad, dra_dlon, ecliptic_to_equatorial_rad, longitude_of_ra_dec_rad,
    ra_of_longitude_rad,
};
