//! Types for the multi-day transit scan.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stella_aspects::{AspectKind, AspectMatch, ChartLayer};
use stella_core::{Body, PointId, ZodiacSign};

/// Default scan horizon in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 45;

/// Configuration for a window scan.
///
/// The expansion and diversity constants are empirical; they are fields
/// rather than hard constants so callers can tune them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    /// Number of days to scan, starting at the scan's start date.
    pub horizon_days: u32,
    /// A neighboring day joins a window while its score is at least this
    /// fraction of the peak day's score (default 0.85).
    pub expansion_threshold: f64,
    /// Minimum days between the peaks of two selected windows (default 7).
    pub min_peak_separation_days: i64,
    /// A window is rejected once it shares this many slow aspect
    /// signatures with an already-selected window (default 2).
    pub max_shared_slow_signatures: usize,
    /// Maximum number of windows to select (default 3).
    pub max_windows: usize,
    /// Horizon in days for [`ScanResult::best_within`]'s preferred pick
    /// (default 30).
    pub best_within_days: i64,
    /// Representative aspects recorded per window (default 3).
    pub max_representative_aspects: usize,
}

impl ScanConfig {
    /// Config with the default thresholds over the given horizon.
    pub fn new(horizon_days: u32) -> Self {
        Self {
            horizon_days,
            expansion_threshold: 0.85,
            min_peak_separation_days: 7,
            max_shared_slow_signatures: 2,
            max_windows: 3,
            best_within_days: 30,
            max_representative_aspects: 3,
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.horizon_days == 0 {
            return Err("horizon_days must be > 0");
        }
        if !self.expansion_threshold.is_finite()
            || self.expansion_threshold <= 0.0
            || self.expansion_threshold > 1.0
        {
            return Err("expansion_threshold must be in (0, 1]");
        }
        if self.min_peak_separation_days < 0 {
            return Err("min_peak_separation_days must not be negative");
        }
        if self.max_windows == 0 {
            return Err("max_windows must be > 0");
        }
        if self.best_within_days < 0 {
            return Err("best_within_days must not be negative");
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_DAYS)
    }
}

/// One scanned day: its score and the aspects behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScore {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Julian Date (UT) the transits were computed at, local noon UT.
    pub jd_ut: f64,
    /// Romance-weighted day total.
    pub score: f64,
    /// Sign of the transiting Moon at the computation instant.
    pub moon_sign: ZodiacSign,
    /// Count of harmonious aspects made by the transiting Moon.
    pub harmonious_moon_aspects: u32,
    /// Every accepted transit-to-natal aspect for the day, both charts.
    pub aspects: Vec<AspectMatch>,
}

/// Fingerprint of one slow transit: aspect kind, transiting body, and the
/// natal point it hits. Anything involving the Moon is excluded, so the
/// signature identifies configurations that persist across days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlowSignature {
    pub kind: AspectKind,
    pub transit_body: Body,
    pub natal_point: PointId,
    /// Which natal chart the aspected point belongs to.
    pub natal_layer: ChartLayer,
}

impl SlowSignature {
    /// Signature for a transit-to-natal match, `None` when the Moon is
    /// involved on either side or the transiting point is not a body.
    pub fn from_match(m: &AspectMatch) -> Option<SlowSignature> {
        let moon = PointId::Body(Body::Moon);
        if m.point_a.id == moon || m.point_b.id == moon {
            return None;
        }
        let transit_body = match m.point_a.id {
            PointId::Body(body) => body,
            PointId::Angle(_) => return None,
        };
        Some(SlowSignature {
            kind: m.kind,
            transit_body,
            natal_point: m.point_b.id,
            natal_layer: m.point_b.layer,
        })
    }
}

/// A contiguous run of high-scoring days around one peak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayWindow {
    /// First day of the window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive).
    pub end_date: NaiveDate,
    /// The day the window was grown from.
    pub peak_date: NaiveDate,
    /// Score of the peak day.
    pub score: f64,
    /// Moon signs over the window in order, consecutive repeats collapsed.
    pub moon_signs: Vec<ZodiacSign>,
    /// Up to `max_representative_aspects` harmonious aspects from the peak
    /// day, strongest romance score first.
    pub representative_aspects: Vec<AspectMatch>,
    /// Slow signatures active anywhere in the window.
    pub slow_signatures: BTreeSet<SlowSignature>,
}

/// Everything a scan produced: per-day scores plus the selected windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// First day of the scanned horizon.
    pub start_date: NaiveDate,
    /// One entry per scanned day, in date order.
    pub days: Vec<DayScore>,
    /// Selected windows, strongest first.
    pub windows: Vec<DayWindow>,
}

impl ScanResult {
    /// The strongest window starting within `days` of the scan start,
    /// falling back to the overall strongest when none starts that soon.
    /// `None` only when no windows were found at all.
    pub fn best_within(&self, days: i64) -> Option<&DayWindow> {
        self.windows
            .iter()
            .find(|w| {
                w.start_date.signed_duration_since(self.start_date).num_days() <= days
            })
            .or_else(|| self.windows.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stella_aspects::MatchPoint;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn window(start: NaiveDate, peak: NaiveDate, score: f64) -> DayWindow {
        DayWindow {
            start_date: start,
            end_date: peak,
            peak_date: peak,
            score,
            moon_signs: Vec::new(),
            representative_aspects: Vec::new(),
            slow_signatures: BTreeSet::new(),
        }
    }

    #[test]
    fn default_config_validates() {
        let config = ScanConfig::default();
        assert_eq!(config.horizon_days, DEFAULT_HORIZON_DAYS);
        assert!((config.expansion_threshold - 0.85).abs() < 1e-12);
        assert_eq!(config.min_peak_separation_days, 7);
        assert_eq!(config.max_shared_slow_signatures, 2);
        assert_eq!(config.max_windows, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_horizon() {
        let config = ScanConfig::new(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        let mut config = ScanConfig::default();
        config.expansion_threshold = 0.0;
        assert!(config.validate().is_err());
        config.expansion_threshold = 1.25;
        assert!(config.validate().is_err());
        config.expansion_threshold = f64::NAN;
        assert!(config.validate().is_err());
        config.expansion_threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_separation() {
        let mut config = ScanConfig::default();
        config.min_peak_separation_days = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_windows() {
        let mut config = ScanConfig::default();
        config.max_windows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn slow_signature_skips_the_moon() {
        let sun = MatchPoint {
            id: PointId::Body(Body::Sun),
            layer: ChartLayer::Transit,
            longitude_deg: 10.0,
            is_retrograde: false,
        };
        let natal_moon = MatchPoint {
            id: PointId::Body(Body::Moon),
            layer: ChartLayer::Natal,
            longitude_deg: 100.0,
            is_retrograde: false,
        };
        let m = AspectMatch {
            point_a: sun,
            point_b: natal_moon,
            kind: AspectKind::Square,
            orb_deg: 0.0,
            score: 0.85,
            applying: true,
        };
        assert_eq!(SlowSignature::from_match(&m), None);

        let natal_mars = MatchPoint {
            id: PointId::Body(Body::Mars),
            layer: ChartLayer::Partner,
            longitude_deg: 100.0,
            is_retrograde: false,
        };
        let m = AspectMatch { point_b: natal_mars, ..m };
        let sig = SlowSignature::from_match(&m).expect("no Moon involved");
        assert_eq!(sig.transit_body, Body::Sun);
        assert_eq!(sig.natal_point, PointId::Body(Body::Mars));
        assert_eq!(sig.natal_layer, ChartLayer::Partner);
    }

    #[test]
    fn best_within_prefers_an_early_start() {
        let start = date(2026, 3, 1);
        let result = ScanResult {
            start_date: start,
            days: Vec::new(),
            windows: vec![
                window(date(2026, 4, 10), date(2026, 4, 11), 90.0),
                window(date(2026, 3, 12), date(2026, 3, 13), 70.0),
            ],
        };
        // The 90-point window starts 40 days out; within 30 days the
        // 70-point window wins.
        let best = result.best_within(30).expect("windows exist");
        assert_eq!(best.peak_date, date(2026, 3, 13));
        // With a wide enough horizon the global best wins again.
        let best = result.best_within(60).expect("windows exist");
        assert_eq!(best.peak_date, date(2026, 4, 11));
    }

    #[test]
    fn best_within_falls_back_to_the_global_best() {
        let start = date(2026, 3, 1);
        let result = ScanResult {
            start_date: start,
            days: Vec::new(),
            windows: vec![window(date(2026, 4, 20), date(2026, 4, 21), 55.0)],
        };
        let best = result.best_within(30).expect("windows exist");
        assert_eq!(best.peak_date, date(2026, 4, 21));

        let empty = ScanResult {
            start_date: start,
            days: Vec::new(),
            windows: Vec::new(),
        };
        assert!(empty.best_within(30).is_none());
    }

    #[test]
    fn config_serde_round_trip() {
        let config = ScanConfig::new(60);
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["horizonDays"], 60);
        assert_eq!(json["maxWindows"], 3);
        let back: ScanConfig = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, config);
    }
}
