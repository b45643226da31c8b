//! Midheaven and Ascendant solving.
//!
//! Both angles reduce to the same inversion: find the ecliptic longitude
//! whose right ascension matches a target. The forward map λ → α is smooth
//! and strictly increasing with a closed-form derivative, so a Newton pass
//! from a good seed converges in a few steps; a narrow bracketed bisection
//! backs it up if it stalls.
//!
//! - Midheaven: target α = LST (the culminating meridian).
//! - Ascendant: target α = the right ascension of the ecliptic/horizon
//!   intersection, from `tan α = -cos LST / (sin LST + tan φ · tan ε)`;
//!   the atan2 branch lands on the setting intersection, so the rising
//!   longitude is that solution plus 180°.
//!
//! Source(s): Meeus, "Astronomical Algorithms" (2nd ed), Ch. 13; standard
//! spherical astronomy for the horizon condition.

use stella_frames::{dra_dlon, normalize_deg, ra_of_longitude_rad, wrap_pm180_deg};

use crate::solver::{
    MAX_BISECTION_ITERATIONS, MAX_NEWTON_STEPS, RootResult, SOLVE_TOLERANCE_DEG, newton_refine,
    solve_bracketed,
};

/// Half-width of the bisection bracket used when Newton stalls, degrees.
const RESCUE_HALF_SPAN_DEG: f64 = 2.0;

/// Right ascension of the ecliptic point on the local horizon, in radians.
///
/// Of the two ecliptic/horizon intersections this returns the one on the
/// atan2 principal branch; the Ascendant sits 180° of ecliptic longitude
/// away from it.
pub fn horizon_ra_rad(lst_rad: f64, lat_rad: f64, eps_rad: f64) -> f64 {
    f64::atan2(-lst_rad.cos(), lst_rad.sin() + lat_rad.tan() * eps_rad.tan())
        .rem_euclid(std::f64::consts::TAU)
}

/// Ecliptic longitude whose right ascension equals `ra_deg`.
///
/// Newton from `seed ≈ target` (λ and α never differ by more than a few
/// degrees), then a ±2° bracketed pass if the residual is still above
/// tolerance.
fn longitude_of_ra(ra_deg: f64, eps_rad: f64) -> RootResult {
    let f =
        |lon_deg: f64| wrap_pm180_deg(ra_of_longitude_rad(lon_deg.to_radians(), eps_rad).to_degrees() - ra_deg);
    let df = |lon_deg: f64| dra_dlon(lon_deg.to_radians(), eps_rad);

    let newton = newton_refine(&f, &df, ra_deg, MAX_NEWTON_STEPS, SOLVE_TOLERANCE_DEG);
    if newton.converged {
        return RootResult {
            value_deg: normalize_deg(newton.value_deg),
            converged: true,
        };
    }

    let rescue = solve_bracketed(
        &f,
        newton.value_deg - RESCUE_HALF_SPAN_DEG,
        2.0 * RESCUE_HALF_SPAN_DEG,
        SOLVE_TOLERANCE_DEG,
        MAX_BISECTION_ITERATIONS,
    );
    RootResult {
        value_deg: normalize_deg(rescue.value_deg),
        converged: rescue.converged,
    }
}

/// Midheaven: the ecliptic longitude culminating at `lst_rad`.
pub fn midheaven(lst_rad: f64, eps_rad: f64) -> RootResult {
    longitude_of_ra(normalize_deg(lst_rad.to_degrees()), eps_rad)
}

/// Ascendant: the ecliptic longitude rising at `lst_rad` for an observer
/// at `lat_rad`.
pub fn ascendant(lst_rad: f64, lat_rad: f64, eps_rad: f64) -> RootResult {
    let setting_ra_deg = horizon_ra_rad(lst_rad, lat_rad, eps_rad).to_degrees();
    let setting = longitude_of_ra(setting_ra_deg, eps_rad);
    RootResult {
        value_deg: normalize_deg(setting.value_deg + 180.0),
        converged: setting.converged,
    }
}
