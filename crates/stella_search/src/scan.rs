//! Day-by-day transit scan over a date horizon.

use chrono::{Datelike, Days, NaiveDate};
use log::trace;

use stella_aspects::{AspectOptions, ChartLayer, find_aspects};
use stella_core::{Body, CelestialPoint, ChartSnapshot, EphemerisProvider, PointId};
use stella_time::calendar_to_jd;

use crate::error::ScanError;
use crate::scan_types::{DayScore, ScanConfig, ScanResult};
use crate::score::{HARMONIOUS_MOON_DAY_BONUS, moon_dignity_factor, romance_score};
use crate::windows::{build_windows, select_diverse};

/// Scans `config.horizon_days` days from `start_date` for favorable
/// windows between the transiting sky and two natal charts.
///
/// Each day is evaluated at local noon UT: the ten transiting bodies are
/// positioned through the provider, aspected against both natal point
/// sets (major aspects, natal orbs), and the day is scored as the romance
/// weighted sum scaled by the Moon's dignity and its harmonious aspect
/// count. Windows are then grown around score peaks and a diverse subset
/// is selected.
pub fn scan_windows<P>(
    provider: &P,
    natal_a: &[CelestialPoint],
    natal_b: &[CelestialPoint],
    start_date: NaiveDate,
    config: &ScanConfig,
) -> Result<ScanResult, ScanError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(ScanError::InvalidConfig)?;

    let options = AspectOptions::natal(false);
    let mut days = Vec::with_capacity(config.horizon_days as usize);
    for offset in 0..config.horizon_days {
        let date = start_date
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(ScanError::InvalidConfig(
                "scan horizon exceeds the calendar range",
            ))?;
        days.push(score_day(provider, natal_a, natal_b, date, &options)?);
    }

    let candidates = build_windows(&days, config);
    let windows = select_diverse(candidates, config);

    Ok(ScanResult {
        start_date,
        days,
        windows,
    })
}

/// Scores one day's transits against both natal charts.
fn score_day<P>(
    provider: &P,
    natal_a: &[CelestialPoint],
    natal_b: &[CelestialPoint],
    date: NaiveDate,
    options: &AspectOptions,
) -> Result<DayScore, ScanError>
where
    P: EphemerisProvider + ?Sized,
{
    let jd_ut = calendar_to_jd(date.year(), date.month(), f64::from(date.day()) + 0.5);
    let snapshot = ChartSnapshot::compute(provider, jd_ut)?;

    let mut aspects = find_aspects(
        &snapshot.points,
        ChartLayer::Transit,
        natal_a,
        ChartLayer::Natal,
        options,
    );
    aspects.extend(find_aspects(
        &snapshot.points,
        ChartLayer::Transit,
        natal_b,
        ChartLayer::Partner,
        options,
    ));

    let moon_sign = snapshot.point(Body::Moon).sign;
    let harmonious_moon_aspects = aspects
        .iter()
        .filter(|m| m.point_a.id == PointId::Body(Body::Moon) && m.kind.is_harmonious())
        .count() as u32;

    let base: f64 = aspects.iter().map(romance_score).sum();
    let score = base
        * moon_dignity_factor(moon_sign)
        * (1.0 + HARMONIOUS_MOON_DAY_BONUS * f64::from(harmonious_moon_aspects));
    trace!("{date}: {} aspects, day score {score:.3}", aspects.len());

    Ok(DayScore {
        date,
        jd_ut,
        score,
        moon_sign,
        harmonious_moon_aspects,
        aspects,
    })
}
