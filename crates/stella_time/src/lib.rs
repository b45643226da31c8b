//! Time handling for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Meeus Ch. 7)
//! - Greenwich Mean Sidereal Time and Local Sidereal Time (Meeus Ch. 12)
//! - `CivilMoment`, the validated civil input record (local date, optional
//!   local time, timezone offset) that all chart requests start from
//!
//! All astronomy below the civil boundary works in UT Julian Dates as
//! plain `f64`. Leap seconds and UT1−UTC are ignored; at the sub-second
//! level they are far below the accuracy of the house and aspect models
//! built on top.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilMoment, MAX_TZ_OFFSET_MINUTES, MIN_TZ_OFFSET_MINUTES};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
