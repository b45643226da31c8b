//! One-call chart assembly: positions, cusps, and angle points together.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use stella_aspects::{AspectMatch, AspectOptions, ChartLayer, aspects_within, find_aspects};
use stella_core::{AnglePoint, Body, CelestialPoint, ChartSnapshot, EphemerisProvider, PointId};
use stella_houses::{
    GeoLocation, HouseCuspSet, HouseSystem, assign_house, compute_cusps_civil, solar_cusps,
};
use stella_search::{ScanConfig, ScanResult, scan_windows};
use stella_time::{CivilMoment, calendar_to_jd};

use crate::error::ChartError;

/// A computed chart: the moment, the place when one is known, the
/// positioned points, and the house cusps.
///
/// `points` holds the ten bodies in `ALL_BODIES` order, followed by the
/// Ascendant and Midheaven when the chart has a location. Solar charts
/// carry bodies only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub moment: CivilMoment,
    pub location: Option<GeoLocation>,
    pub points: Vec<CelestialPoint>,
    pub cusps: HouseCuspSet,
}

impl NatalChart {
    /// Computes a full chart for a moment and place.
    ///
    /// Positions the ten bodies, solves the cusps in the requested house
    /// system, and appends the Ascendant and Midheaven as aspectable
    /// points.
    pub fn compute<P: EphemerisProvider + ?Sized>(
        provider: &P,
        moment: CivilMoment,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<NatalChart, ChartError> {
        let snapshot = ChartSnapshot::compute(provider, moment.jd_ut())?;
        let cusps = compute_cusps_civil(&moment, &location, system)?;
        let mut points = snapshot.points.to_vec();
        points.push(CelestialPoint::new(
            PointId::Angle(AnglePoint::Ascendant),
            cusps.ascendant_deg,
            false,
        ));
        points.push(CelestialPoint::new(
            PointId::Angle(AnglePoint::Midheaven),
            cusps.midheaven_deg,
            false,
        ));
        Ok(NatalChart {
            moment,
            location: Some(location),
            points,
            cusps,
        })
    }

    /// Computes a solar chart for a moment with no usable birth place.
    ///
    /// Houses are whole signs counted from the Sun's sign. No angle points
    /// are appended, since without a location there is no horizon.
    pub fn compute_solar<P: EphemerisProvider + ?Sized>(
        provider: &P,
        moment: CivilMoment,
    ) -> Result<NatalChart, ChartError> {
        let snapshot = ChartSnapshot::compute(provider, moment.jd_ut())?;
        let cusps = solar_cusps(snapshot.longitude_deg(Body::Sun));
        Ok(NatalChart {
            moment,
            location: None,
            points: snapshot.points.to_vec(),
            cusps,
        })
    }

    /// House number (1-12) occupied by an ecliptic longitude.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        assign_house(longitude_deg, &self.cusps.cusps)
    }

    /// Aspects among this chart's own points, with natal orbs.
    pub fn natal_aspects(&self, include_minor: bool) -> Vec<AspectMatch> {
        aspects_within(
            &self.points,
            ChartLayer::Natal,
            &AspectOptions::natal(include_minor),
        )
    }
}

/// Cross-chart aspects between two charts, with synastry orbs.
///
/// Points of `a` land in `point_a` tagged `Natal`; points of `b` land in
/// `point_b` tagged `Partner`.
pub fn synastry_aspects(a: &NatalChart, b: &NatalChart, include_minor: bool) -> Vec<AspectMatch> {
    find_aspects(
        &a.points,
        ChartLayer::Natal,
        &b.points,
        ChartLayer::Partner,
        &AspectOptions::synastry(include_minor),
    )
}

/// Aspects from the noon-UT sky of `date` to a chart's points.
pub fn transit_aspects<P: EphemerisProvider + ?Sized>(
    provider: &P,
    chart: &NatalChart,
    date: NaiveDate,
    include_minor: bool,
) -> Result<Vec<AspectMatch>, ChartError> {
    let jd_ut = calendar_to_jd(date.year(), date.month(), f64::from(date.day()) + 0.5);
    let sky = ChartSnapshot::compute(provider, jd_ut)?;
    Ok(find_aspects(
        &sky.points,
        ChartLayer::Transit,
        &chart.points,
        ChartLayer::Natal,
        &AspectOptions::natal(include_minor),
    ))
}

/// Scans the days ahead of `start_date` for favorable windows over a pair
/// of charts.
///
/// Shorthand for [`stella_search::scan_windows`] over the two charts'
/// point sets, angles included.
pub fn scan_romance_windows<P: EphemerisProvider + ?Sized>(
    provider: &P,
    a: &NatalChart,
    b: &NatalChart,
    start_date: NaiveDate,
    config: &ScanConfig,
) -> Result<ScanResult, ChartError> {
    Ok(scan_windows(provider, &a.points, &b.points, start_date, config)?)
}
