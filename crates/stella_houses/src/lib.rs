//! House cusp computation.
//!
//! This crate turns an instant and a geographic location into a set of
//! twelve house cusps plus the Ascendant and Midheaven:
//!
//! - Placidus (semi-diurnal-arc trisection) and Whole Sign systems
//! - Shared bounded root-finding (Newton with closed-form derivative for
//!   the angles, sampled bracketing + bisection for quadrant cusps)
//! - Deterministic degradations instead of numerical failure: extreme
//!   latitudes fall back to Whole Sign, unknown birth times compute at
//!   local noon, and both are surfaced via [`ApproximationFlag`]
//! - House membership lookup for chart points
//!
//! The only errors are malformed inputs; every well-formed request yields
//! a usable, finite cusp set.

pub mod angles;
pub mod assign;
pub mod cusp_types;
pub mod cusps;
pub mod error;
pub mod solver;

pub use angles::{ascendant, horizon_ra_rad, midheaven};
pub use assign::assign_house;
pub use cusp_types::{
    ALL_HOUSE_SYSTEMS, ApproximationFlag, GeoLocation, HouseCuspSet, HouseSystem,
    MAX_PLACIDUS_LATITUDE_DEG,
};
pub use cusps::{compute_cusps, compute_cusps_civil, solar_cusps};
pub use error::HouseError;
pub use solver::{
    BRACKET_SAMPLES, MAX_BISECTION_ITERATIONS, MAX_NEWTON_STEPS, RootResult, SOLVE_TOLERANCE_DEG,
    newton_refine, solve_bracketed,
};
