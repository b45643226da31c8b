//! Shared one-dimensional root finding for angle and cusp solving.
//!
//! Two primitives cover every solve in this crate:
//!
//! - [`newton_refine`] for the smooth, strictly monotonic right-ascension
//!   inversion (Midheaven and Ascendant), where the closed-form derivative
//!   is available and a good seed exists.
//! - [`solve_bracketed`] for the semi-diurnal-arc residuals of the
//!   intermediate Placidus cusps, which are not smoothly invertible near
//!   the arc poles, and as the safety pass when Newton stalls.
//!
//! Both are bounded by fixed iteration caps and always terminate with a
//! best-effort answer; [`RootResult::converged`] reports whether the
//! residual was actually driven below tolerance.

/// Samples taken across a bracketing domain before bisection.
pub const BRACKET_SAMPLES: usize = 64;

/// Bisection iteration cap.
pub const MAX_BISECTION_ITERATIONS: u32 = 50;

/// Newton-Raphson step cap.
pub const MAX_NEWTON_STEPS: u32 = 6;

/// Residual tolerance for angle and cusp solving, in degrees.
pub const SOLVE_TOLERANCE_DEG: f64 = 1e-7;

/// Outcome of a bounded root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Root estimate in degrees (best effort when not converged).
    pub value_deg: f64,
    /// True when the residual was driven below tolerance.
    pub converged: bool,
}

/// A sign change that is a root crossing, not a wrap discontinuity.
///
/// Residuals built from `wrap_pm180` jump by ±360° where they wrap; such
/// jumps also change sign but bracket no root.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Finds a root of `f` on `[start, start + span]` degrees by sampled
/// bracketing plus bisection.
///
/// Samples [`BRACKET_SAMPLES`] points looking for a genuine sign change,
/// then bisects the bracket. If no sign change exists the sample of
/// minimum |f| is returned unconverged, so callers always get a usable
/// estimate.
pub fn solve_bracketed<F>(
    f: F,
    domain_start_deg: f64,
    domain_span_deg: f64,
    tolerance_deg: f64,
    max_iterations: u32,
) -> RootResult
where
    F: Fn(f64) -> f64,
{
    let step = domain_span_deg / BRACKET_SAMPLES as f64;
    let mut prev_x = domain_start_deg;
    let mut prev_f = f(prev_x);
    let mut best_x = prev_x;
    let mut best_abs = prev_f.abs();

    for i in 1..=BRACKET_SAMPLES {
        let x = domain_start_deg + step * i as f64;
        let fx = f(x);
        if fx.abs() < best_abs {
            best_abs = fx.abs();
            best_x = x;
        }
        if is_genuine_crossing(prev_f, fx) {
            return bisect(&f, prev_x, x, prev_f, tolerance_deg, max_iterations);
        }
        prev_x = x;
        prev_f = fx;
    }

    RootResult {
        value_deg: best_x,
        converged: false,
    }
}

fn bisect<F>(f: &F, lo: f64, hi: f64, f_lo: f64, tolerance_deg: f64, max_iterations: u32) -> RootResult
where
    F: Fn(f64) -> f64,
{
    let mut lo = lo;
    let mut hi = hi;
    let mut f_lo = f_lo;
    for _ in 0..max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 || 0.5 * (hi - lo) < tolerance_deg {
            return RootResult {
                value_deg: mid,
                converged: true,
            };
        }
        if is_genuine_crossing(f_lo, f_mid) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    RootResult {
        value_deg: 0.5 * (lo + hi),
        converged: 0.5 * (hi - lo) < tolerance_deg,
    }
}

/// Newton-Raphson refinement from a seed, with the closed-form derivative.
///
/// Stops as soon as |f| drops below `tolerance_deg`. Returns unconverged
/// (with the last iterate) if the step cap runs out or the derivative
/// vanishes; callers follow up with a bracketed safety pass.
pub fn newton_refine<F, D>(
    f: F,
    df: D,
    seed_deg: f64,
    max_steps: u32,
    tolerance_deg: f64,
) -> RootResult
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = seed_deg;
    for _ in 0..max_steps {
        let fx = f(x);
        if fx.abs() <= tolerance_deg {
            return RootResult {
                value_deg: x,
                converged: true,
            };
        }
        let d = df(x);
        if d.abs() < 1e-12 {
            break;
        }
        x -= fx / d;
    }
    RootResult {
        value_deg: x,
        converged: f(x).abs() <= tolerance_deg,
    }
}
