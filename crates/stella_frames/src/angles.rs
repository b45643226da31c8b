//! Canonical angle arithmetic in degrees and radians.
//!
//! Angle wrap-around is the most common source of error in chart math, so
//! every trigonometric step in the higher crates routes through these
//! helpers instead of normalizing inline.

use std::f64::consts::TAU;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to [0, 2π) radians.
pub fn normalize_rad(rad: f64) -> f64 {
    rad.rem_euclid(TAU)
}

/// Wrap an angle to the signed range (-180, +180] degrees.
///
/// Zero-crossings of a wrapped residual correspond to the target angle,
/// which is what the root-finders bisect on.
pub fn wrap_pm180_deg(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Smallest angular separation between two longitudes, in [0, 180] degrees.
///
/// Symmetric in its arguments.
pub fn angular_separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Forward (counterclockwise, increasing longitude) arc from `a` to `b`,
/// in [0, 360) degrees.
pub fn arc_forward_deg(a_deg: f64, b_deg: f64) -> f64 {
    (b_deg - a_deg).rem_euclid(360.0)
}
