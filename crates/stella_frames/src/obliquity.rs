//! Mean obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2, the
//! low-order IAU polynomial in Julian centuries since J2000.0. Accurate to
//! about one arcsecond over several centuries around J2000, which is ample
//! for house-cusp work.

/// Mean obliquity at J2000.0 in degrees: 23°26′21″.448.
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.448 / 3600.0;

/// Mean obliquity at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 =
    OBLIQUITY_J2000_DEG * (std::f64::consts::PI / 180.0);

const J2000_JD: f64 = 2_451_545.0;

/// Mean obliquity of the ecliptic at a Julian Date, in radians.
///
/// `ε = 84381.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³`
/// with T in Julian centuries since J2000.0.
pub fn mean_obliquity_rad(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let arcsec = 84_381.448 - 46.8150 * t - 0.00059 * t2 + 0.001813 * t3;
    (arcsec / 3600.0).to_radians()
}
