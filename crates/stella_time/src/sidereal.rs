//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4. The mean
//! sidereal time polynomial takes a UT Julian Date directly; no UT1 or
//! equation-of-the-equinoxes correction is applied, consistent with the
//! mean-obliquity accuracy budget of the house solver.

use std::f64::consts::TAU;

use crate::julian::J2000_JD;

/// Greenwich Mean Sidereal Time at a UT Julian Date, in radians [0, 2π).
///
/// `θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000` degrees,
/// with T in Julian centuries since J2000.0.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / 36_525.0;
    let t2 = t * t;
    let deg = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t2
        - t2 * t / 38_710_000.0;
    deg.to_radians().rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude.
///
/// LST = GMST + longitude_east. Returns radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
