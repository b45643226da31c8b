//! House cusp computation for Placidus and Whole Sign.
//!
//! Placidus steps, for a fully specified time and place:
//!
//! 1. LST and obliquity from the instant; Midheaven and Ascendant from the
//!    angle solvers.
//! 2. Intermediate cusps XI, XII (east of the MC) and VIII, IX (west of
//!    it) by root-finding the semi-diurnal-arc condition
//!    `RA(λ) = RAMC ± k·SDA(δ(λ))`, k ∈ {1/3, 2/3}, on the quadrant arc
//!    that must contain each cusp.
//! 3. Cusps II, III, V, VI as antipodes of VIII, IX, XI, XII.
//!
//! Beyond |latitude| = 66.5° the SDA condition loses its domain, so the
//! computation degrades to Whole Sign cusps seeded from the Ascendant and
//! says so in the approximation flag.
//!
//! Source(s): Meeus, "Astronomical Algorithms" (2nd ed), Ch. 12-13;
//! standard Placidus semi-arc construction.

use log::{debug, trace};
use stella_frames::{
    arc_forward_deg, declination_of_longitude_rad, mean_obliquity_rad, normalize_deg,
    ra_of_longitude_rad, wrap_pm180_deg,
};
use stella_time::{CivilMoment, gmst_rad, local_sidereal_time_rad};

use crate::angles::{ascendant, midheaven};
use crate::cusp_types::{
    ApproximationFlag, GeoLocation, HouseCuspSet, HouseSystem, MAX_PLACIDUS_LATITUDE_DEG,
};
use crate::error::HouseError;
use crate::solver::{MAX_BISECTION_ITERATIONS, RootResult, SOLVE_TOLERANCE_DEG, solve_bracketed};

/// Compute house cusps for an instant and location.
///
/// Numerical trouble never fails the call: non-convergence is reported via
/// [`HouseCuspSet::converged`] and extreme latitudes degrade to Whole Sign
/// with [`ApproximationFlag::ExtremeLatitudeFallback`]. Only a malformed
/// location is an error.
pub fn compute_cusps(
    jd_ut: f64,
    location: &GeoLocation,
    system: HouseSystem,
) -> Result<HouseCuspSet, HouseError> {
    location.validate().map_err(HouseError::InvalidLocation)?;

    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    let eps = mean_obliquity_rad(jd_ut);
    let lat_rad = location.latitude_rad();

    let mc = midheaven(lst, eps);
    let asc = ascendant(lst, lat_rad, eps);
    let angles_converged = mc.converged && asc.converged;
    if !angles_converged {
        debug!(
            "angle solving did not converge at jd {jd_ut} (lat {})",
            location.latitude_deg
        );
    }

    if system.latitude_dependent() && location.latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
        debug!(
            "latitude {} beyond the Placidus limit, substituting Whole Sign",
            location.latitude_deg
        );
        return Ok(HouseCuspSet {
            system: HouseSystem::WholeSign,
            cusps: whole_sign_cusps(asc.value_deg),
            ascendant_deg: asc.value_deg,
            midheaven_deg: mc.value_deg,
            approximation: ApproximationFlag::ExtremeLatitudeFallback,
            converged: angles_converged,
        });
    }

    match system {
        HouseSystem::Placidus => {
            let ramc_deg = normalize_deg(lst.to_degrees());
            let (cusps, quadrants_converged) =
                placidus_cusps(asc.value_deg, mc.value_deg, ramc_deg, lat_rad, eps);
            Ok(HouseCuspSet {
                system,
                cusps,
                ascendant_deg: asc.value_deg,
                midheaven_deg: mc.value_deg,
                approximation: ApproximationFlag::None,
                converged: angles_converged && quadrants_converged,
            })
        }
        HouseSystem::WholeSign => Ok(HouseCuspSet {
            system,
            cusps: whole_sign_cusps(asc.value_deg),
            ascendant_deg: asc.value_deg,
            midheaven_deg: mc.value_deg,
            approximation: ApproximationFlag::None,
            converged: angles_converged,
        }),
    }
}

/// Compute house cusps from a civil moment.
///
/// A missing birth time has already fallen back to local noon inside
/// [`CivilMoment`]; this marks the resulting cusps accordingly. The
/// extreme-latitude flag takes precedence, being the stronger degradation.
pub fn compute_cusps_civil(
    moment: &CivilMoment,
    location: &GeoLocation,
    system: HouseSystem,
) -> Result<HouseCuspSet, HouseError> {
    let mut set = compute_cusps(moment.jd_ut(), location, system)?;
    if !moment.is_time_known() && set.approximation == ApproximationFlag::None {
        set.approximation = ApproximationFlag::NoTime;
    }
    Ok(set)
}

/// Whole Sign cusps counted from the Sun's sign, for charts with no known
/// location.
pub fn solar_cusps(sun_longitude_deg: f64) -> HouseCuspSet {
    let cusps = whole_sign_cusps(sun_longitude_deg);
    HouseCuspSet {
        system: HouseSystem::WholeSign,
        cusps,
        ascendant_deg: cusps[0],
        midheaven_deg: cusps[9],
        approximation: ApproximationFlag::Solar,
        converged: true,
    }
}

/// Whole Sign division: cusp I at the start of the sign holding `seed_deg`.
fn whole_sign_cusps(seed_deg: f64) -> [f64; 12] {
    let start = 30.0 * (normalize_deg(seed_deg) / 30.0).floor();
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_deg(start + 30.0 * i as f64);
    }
    cusps
}

/// The four solved Placidus quadrant cusps plus antipodes.
fn placidus_cusps(
    asc_deg: f64,
    mc_deg: f64,
    ramc_deg: f64,
    lat_rad: f64,
    eps_rad: f64,
) -> ([f64; 12], bool) {
    let desc_deg = normalize_deg(asc_deg + 180.0);
    let ic_deg = normalize_deg(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = normalize_deg(asc_deg);
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = normalize_deg(mc_deg);

    // Quadrant arcs that must contain the solved cusps. With the Ascendant
    // east of the MC both spans stay below 180°.
    let eastern_span = arc_forward_deg(mc_deg, asc_deg);
    let western_span = arc_forward_deg(desc_deg, mc_deg);

    let xi = placidus_cusp(ramc_deg, lat_rad, eps_rad, 1.0 / 3.0, mc_deg, eastern_span);
    let xii = placidus_cusp(ramc_deg, lat_rad, eps_rad, 2.0 / 3.0, mc_deg, eastern_span);
    let ix = placidus_cusp(ramc_deg, lat_rad, eps_rad, -1.0 / 3.0, desc_deg, western_span);
    let viii = placidus_cusp(ramc_deg, lat_rad, eps_rad, -2.0 / 3.0, desc_deg, western_span);

    cusps[10] = normalize_deg(xi.value_deg);
    cusps[11] = normalize_deg(xii.value_deg);
    cusps[8] = normalize_deg(ix.value_deg);
    cusps[7] = normalize_deg(viii.value_deg);
    trace!(
        "quadrant cusps XI {:.4} XII {:.4} IX {:.4} VIII {:.4}",
        cusps[10], cusps[11], cusps[8], cusps[7]
    );

    cusps[1] = normalize_deg(cusps[7] + 180.0);
    cusps[2] = normalize_deg(cusps[8] + 180.0);
    cusps[4] = normalize_deg(cusps[10] + 180.0);
    cusps[5] = normalize_deg(cusps[11] + 180.0);

    let converged = xi.converged && xii.converged && ix.converged && viii.converged;
    if !converged {
        debug!("placidus quadrant solving fell back to a best-effort cusp");
    }
    (cusps, converged)
}

/// Solve one Placidus cusp on its quadrant arc.
///
/// The residual `RA(λ) - (RAMC + f·SDA(δ(λ)))` is not smoothly invertible
/// near the poles of the arc, so this uses sampled bracketing rather than
/// Newton. `signed_fraction` is positive east of the MC (houses XI, XII)
/// and negative west of it (IX, VIII).
fn placidus_cusp(
    ramc_deg: f64,
    lat_rad: f64,
    eps_rad: f64,
    signed_fraction: f64,
    domain_start_deg: f64,
    domain_span_deg: f64,
) -> RootResult {
    let f = |lon_deg: f64| {
        let lon_rad = lon_deg.to_radians();
        let ra_deg = ra_of_longitude_rad(lon_rad, eps_rad).to_degrees();
        let dec_rad = declination_of_longitude_rad(lon_rad, eps_rad);
        let target_deg = ramc_deg + signed_fraction * semi_diurnal_arc_deg(dec_rad, lat_rad);
        wrap_pm180_deg(ra_deg - target_deg)
    };
    solve_bracketed(
        f,
        domain_start_deg,
        domain_span_deg,
        SOLVE_TOLERANCE_DEG,
        MAX_BISECTION_ITERATIONS,
    )
}

/// Semi-diurnal arc in degrees: `acos(-tan φ · tan δ)`, clamped where the
/// point is circumpolar.
fn semi_diurnal_arc_deg(dec_rad: f64, lat_rad: f64) -> f64 {
    (-(lat_rad.tan() * dec_rad.tan())).clamp(-1.0, 1.0).acos().to_degrees()
}
