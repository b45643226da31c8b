//! Equatorial ↔ ecliptic transforms for points on the ecliptic.
//!
//! House-cusp math works entirely with ecliptic latitude β = 0, which
//! collapses the general rotation to one-argument closed forms in the
//! ecliptic longitude λ and the obliquity ε:
//!
//! - `tan α = tan λ · cos ε` (right ascension)
//! - `sin δ = sin ε · sin λ` (declination)
//!
//! The forward map λ → α is smooth and strictly increasing, so Newton
//! iteration with the closed-form derivative inverts it; the general
//! (α, δ) → λ form below handles provider output with nonzero δ.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 13.

use std::f64::consts::TAU;

/// Right ascension of an ecliptic-longitude point (β = 0), in [0, 2π).
///
/// `α = atan2(sin λ · cos ε, cos λ)`; the atan2 form keeps α in the same
/// quadrant as λ.
pub fn ra_of_longitude_rad(lon_rad: f64, eps_rad: f64) -> f64 {
    f64::atan2(lon_rad.sin() * eps_rad.cos(), lon_rad.cos()).rem_euclid(TAU)
}

/// Declination of an ecliptic-longitude point (β = 0), in radians.
pub fn declination_of_longitude_rad(lon_rad: f64, eps_rad: f64) -> f64 {
    (eps_rad.sin() * lon_rad.sin()).asin()
}

/// Derivative dα/dλ of the β = 0 forward map, dimensionless.
///
/// `dα/dλ = cos ε / (1 − sin²λ · sin²ε)`, bounded within
/// [cos ε, 1/cos ε] and strictly positive, so Newton steps never stall.
pub fn dra_dlon(lon_rad: f64, eps_rad: f64) -> f64 {
    let s = lon_rad.sin() * eps_rad.sin();
    eps_rad.cos() / (1.0 - s * s)
}

/// Both equatorial coordinates of an ecliptic-longitude point (β = 0).
///
/// Returns `(ra_rad, dec_rad)` with RA in [0, 2π).
pub fn ecliptic_to_equatorial_rad(lon_rad: f64, eps_rad: f64) -> (f64, f64) {
    (
        ra_of_longitude_rad(lon_rad, eps_rad),
        declination_of_longitude_rad(lon_rad, eps_rad),
    )
}

/// Ecliptic longitude of a general equatorial position, in [0, 2π).
///
/// `λ = atan2(sin α · cos ε + tan δ · sin ε, cos α)`
///
/// Valid for any declination; used to project ephemeris provider output
/// (which carries the body's true declination) onto the ecliptic.
pub fn longitude_of_ra_dec_rad(ra_rad: f64, dec_rad: f64, eps_rad: f64) -> f64 {
    let sin_lon = ra_rad.sin() * eps_rad.cos() + dec_rad.tan() * eps_rad.sin();
    f64::atan2(sin_lon, ra_rad.cos()).rem_euclid(TAU)
}
