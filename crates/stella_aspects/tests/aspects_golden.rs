//! Golden-value and property tests for aspect detection.
//!
//! The reference chart places every point on or near a multiple of 30°,
//! so each pair's nearest aspect and orb can be read off by hand. The
//! deliberate offsets (Sun +10, Mercury +14, Asc +5, MC −5) exercise the
//! orb tiers at and just past their limits.

use std::collections::BTreeSet;

use stella_aspects::{
    AspectKind, AspectMatch, AspectOptions, ChartLayer, aspects_within, find_aspects,
};
use stella_core::{AnglePoint, Body, CelestialPoint, PointId};

fn reference_chart() -> Vec<CelestialPoint> {
    let positions = [
        (PointId::Body(Body::Sun), 10.0),
        (PointId::Body(Body::Moon), 100.0),
        (PointId::Body(Body::Mercury), 14.0),
        (PointId::Body(Body::Venus), 70.0),
        (PointId::Body(Body::Mars), 190.0),
        (PointId::Body(Body::Jupiter), 250.0),
        (PointId::Body(Body::Saturn), 310.0),
        (PointId::Body(Body::Uranus), 130.0),
        (PointId::Body(Body::Neptune), 220.0),
        (PointId::Body(Body::Pluto), 280.0),
        (PointId::Angle(AnglePoint::Ascendant), 5.0),
        (PointId::Angle(AnglePoint::Midheaven), 275.0),
    ];
    positions
        .iter()
        .map(|&(id, lon)| CelestialPoint::new(id, lon, false))
        .collect()
}

fn find(matches: &[AspectMatch], a: PointId, b: PointId) -> Option<&AspectMatch> {
    matches
        .iter()
        .find(|m| (m.point_a.id, m.point_b.id) == (a, b) || (m.point_a.id, m.point_b.id) == (b, a))
}

#[test]
fn reference_chart_major_aspect_census() {
    let matches = aspects_within(
        &reference_chart(),
        ChartLayer::Natal,
        &AspectOptions::natal(false),
    );
    // 46 of the 66 pairs land within orb of a major aspect; the rest sit
    // at 25-30° from the nearest major, or 9° from a conjunction/square
    // (Mercury-Asc, Mercury-MC) past the 5° personal/angle tier.
    assert_eq!(matches.len(), 46, "major aspect census changed");
    assert!(matches.iter().all(|m| !m.kind.is_minor()));
}

#[test]
fn reference_chart_census_with_minors() {
    let matches = aspects_within(
        &reference_chart(),
        ChartLayer::Natal,
        &AspectOptions::natal(true),
    );
    assert_eq!(matches.len(), 64, "full aspect census changed");
    let minors = matches.iter().filter(|m| m.kind.is_minor()).count();
    assert_eq!(minors, 18);
    // Enabling minors never steals a pair from a nearer major.
    let majors = aspects_within(
        &reference_chart(),
        ChartLayer::Natal,
        &AspectOptions::natal(false),
    );
    for major in &majors {
        let kept = find(&matches, major.point_a.id, major.point_b.id)
            .expect("major match should survive enabling minors");
        assert_eq!(kept.kind, major.kind);
    }
}

#[test]
fn hand_checked_matches() {
    let matches = aspects_within(
        &reference_chart(),
        ChartLayer::Natal,
        &AspectOptions::natal(false),
    );

    // Sun 10° / Moon 100°: exact square between luminaries.
    let sun_moon = find(&matches, PointId::Body(Body::Sun), PointId::Body(Body::Moon))
        .expect("Sun-Moon square");
    assert_eq!(sun_moon.kind, AspectKind::Square);
    assert_eq!(sun_moon.orb_deg, 0.0);
    assert!((sun_moon.score - 0.85).abs() < 1e-9);
    assert!(sun_moon.applying, "Moon at 100° closes on the 90° target");

    // Jupiter 250° / Saturn 310°: exact sextile on the 3° social tier.
    let jup_sat = find(
        &matches,
        PointId::Body(Body::Jupiter),
        PointId::Body(Body::Saturn),
    )
    .expect("Jupiter-Saturn sextile");
    assert_eq!(jup_sat.kind, AspectKind::Sextile);
    assert!((jup_sat.score - 0.48).abs() < 1e-9);

    // Pluto 280° / MC 275°: conjunction right at the 5° angle tier.
    let pluto_mc = find(
        &matches,
        PointId::Body(Body::Pluto),
        PointId::Angle(AnglePoint::Midheaven),
    )
    .expect("Pluto-MC conjunction");
    assert_eq!(pluto_mc.kind, AspectKind::Conjunction);
    assert!((pluto_mc.orb_deg - 5.0).abs() < 1e-9);
    assert!((pluto_mc.score - 0.399).abs() < 1e-9);
    assert!(!pluto_mc.applying, "Pluto at 280° has passed the MC");

    // Mercury 14° / Asc 5°: 9° from conjunction, past the 5° tier.
    assert!(
        find(
            &matches,
            PointId::Body(Body::Mercury),
            PointId::Angle(AnglePoint::Ascendant)
        )
        .is_none(),
        "9° orb must not match on the personal/angle tier"
    );
}

#[test]
fn every_match_is_bounded() {
    for include_minor in [false, true] {
        let matches = aspects_within(
            &reference_chart(),
            ChartLayer::Natal,
            &AspectOptions::natal(include_minor),
        );
        for m in &matches {
            assert!(m.orb_deg >= 0.0 && m.orb_deg <= 8.0, "orb = {}", m.orb_deg);
            assert!(m.score > 0.0 && m.score <= 1.0, "score = {}", m.score);
            assert_eq!(m.point_a.layer, ChartLayer::Natal);
            assert_eq!(m.point_b.layer, ChartLayer::Natal);
        }
    }
}

#[test]
fn each_unordered_pair_appears_at_most_once() {
    let matches = aspects_within(
        &reference_chart(),
        ChartLayer::Natal,
        &AspectOptions::natal(true),
    );
    let mut seen = BTreeSet::new();
    for m in &matches {
        let key = if m.point_a.id <= m.point_b.id {
            (m.point_a.id, m.point_b.id)
        } else {
            (m.point_b.id, m.point_a.id)
        };
        assert!(seen.insert(key), "duplicate pair {:?}", key);
        assert_ne!(m.point_a.id, m.point_b.id, "self pair");
    }
}

#[test]
fn synastry_tags_each_side_with_its_layer() {
    let natal = reference_chart();
    let partner = [
        CelestialPoint::new(PointId::Body(Body::Sun), 190.0, false),
        CelestialPoint::new(PointId::Body(Body::Venus), 10.0, false),
    ];
    let matches = find_aspects(
        &natal,
        ChartLayer::Natal,
        &partner,
        ChartLayer::Partner,
        &AspectOptions::synastry(false),
    );
    assert!(!matches.is_empty());
    for m in &matches {
        assert_eq!(m.point_a.layer, ChartLayer::Natal);
        assert_eq!(m.point_b.layer, ChartLayer::Partner);
    }
    // Partner Venus sits on the natal Sun: an exact synastry conjunction.
    let sun_venus = matches
        .iter()
        .find(|m| {
            m.point_a.id == PointId::Body(Body::Sun) && m.point_b.id == PointId::Body(Body::Venus)
        })
        .expect("natal Sun / partner Venus conjunction");
    assert_eq!(sun_venus.kind, AspectKind::Conjunction);
    assert_eq!(sun_venus.orb_deg, 0.0);
    // 1.00 × 1.00 × 0.90 × 1 with no natal compression.
    assert!((sun_venus.score - 0.90).abs() < 1e-9);
}

#[test]
fn detection_is_symmetric_in_longitude_offset() {
    // Rotating the whole chart must not change the census.
    let base = aspects_within(
        &reference_chart(),
        ChartLayer::Natal,
        &AspectOptions::natal(true),
    );
    for offset in [37.25, 180.0, 271.5] {
        let rotated: Vec<CelestialPoint> = reference_chart()
            .iter()
            .map(|p| CelestialPoint::new(p.id, p.longitude_deg + offset, p.is_retrograde))
            .collect();
        let matches = aspects_within(&rotated, ChartLayer::Natal, &AspectOptions::natal(true));
        assert_eq!(matches.len(), base.len(), "offset {offset}");
        for (a, b) in base.iter().zip(&matches) {
            assert_eq!(a.kind, b.kind);
            assert!((a.orb_deg - b.orb_deg).abs() < 1e-9);
            assert!((a.score - b.score).abs() < 1e-9);
        }
    }
}
