//! Convenience layer for the stella chart engine.
//!
//! Assembles the lower crates into one-call operations: compute a natal
//! chart from a civil moment and a place, compare two charts, report the
//! transits of a date, and scan the weeks ahead for favorable windows.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use stella_chart::*;
//!
//! let provider = MyEphemeris::open("positions.bin")?;
//! let moment = CivilMoment::from_ymd_hm(2000, 1, 1, 12, 0, 60)?;
//! let place = GeoLocation::new(45.4642, 9.19);
//!
//! let chart = NatalChart::compute(&provider, moment, place, HouseSystem::Placidus)?;
//! println!("Ascendant: {:.2}°", chart.cusps.ascendant_deg);
//!
//! for m in chart.natal_aspects(false) {
//!     println!("{:?} {:?} {:?} (orb {:.2}°)", m.point_a.id, m.kind, m.point_b.id, m.orb_deg);
//! }
//! ```

pub mod chart;
pub mod error;

// Primary re-exports: users should only need `use stella_chart::*`.
pub use chart::{NatalChart, scan_romance_windows, synastry_aspects, transit_aspects};
pub use error::ChartError;

// Re-export the lower-crate types that appear in this crate's signatures
// and results, so callers don't need to depend on each crate directly.
pub use stella_aspects::{
    ALL_ASPECT_KINDS, AspectKind, AspectMatch, AspectOptions, ChartLayer, MatchPoint, OrbMode,
    aspects_within, find_aspects,
};
pub use stella_core::{
    ALL_BODIES, ALL_SIGNS, AnglePoint, Body, CelestialPoint, ChartSnapshot, EphemerisError,
    EphemerisProvider, EquatorialCoord, PointClass, PointId, ZodiacSign,
};
pub use stella_houses::{
    ApproximationFlag, GeoLocation, HouseCuspSet, HouseError, HouseSystem, assign_house,
    compute_cusps, solar_cusps,
};
pub use stella_search::{
    DEFAULT_HORIZON_DAYS, DayScore, DayWindow, ScanConfig, ScanError, ScanResult, SlowSignature,
    scan_windows,
};
pub use stella_time::{CivilMoment, TimeError, calendar_to_jd, jd_to_calendar};
