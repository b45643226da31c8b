//! Multi-day transit scan: finds favorable windows between the moving sky
//! and a pair of natal charts.
//!
//! Each day of the horizon is scored from its transit-to-natal aspects
//! with romance-oriented weighting, windows are grown greedily around
//! score peaks, and a small, mutually diverse set of windows is selected.
//! The heavy lifting (positions, aspect matching) lives in `stella_core`
//! and `stella_aspects`; this crate owns the day loop, the scoring policy,
//! and the window search.

pub mod error;
pub mod scan;
pub mod scan_types;
pub mod score;
pub mod windows;

pub use error::ScanError;
pub use scan::scan_windows;
pub use scan_types::{
    DEFAULT_HORIZON_DAYS, DayScore, DayWindow, ScanConfig, ScanResult, SlowSignature,
};
pub use score::{moon_dignity_factor, romance_score};
pub use windows::{build_windows, select_diverse};
