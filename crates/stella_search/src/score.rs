//! Romance-weighted scoring of transit aspects.
//!
//! Builds on the base aspect score with multiplicative boosts for the
//! configurations that matter to a relationship forecast: harmonious
//! aspect kinds, benefic transiting bodies, aspects into natal luminaries
//! and angles, and tight orbs. Hard Saturn/Neptune contacts onto the natal
//! Moon or Venus are damped instead. A separate lunar dignity factor
//! scales the whole day by the transiting Moon's sign.
//!
//! All functions here expect transit-to-natal matches with the transiting
//! point in `point_a`, which is how the scan builds them.

use stella_aspects::AspectMatch;
use stella_core::{Body, PointClass, PointId, ZodiacSign};

/// Boost for conjunction, trine, and sextile.
pub const HARMONIOUS_BOOST: f64 = 1.25;
/// Boost for transiting Venus or Jupiter.
pub const BENEFIC_TRANSIT_BOOST: f64 = 1.30;
/// Boost for the transiting Moon.
pub const MOON_TRANSIT_BOOST: f64 = 1.15;
/// Boost for transiting Mars.
pub const MARS_TRANSIT_BOOST: f64 = 1.10;
/// Boost for aspects into a natal luminary or angle.
pub const NATAL_FOCUS_BOOST: f64 = 1.20;
/// Damper for transiting Saturn or Neptune onto the natal Moon or Venus.
pub const SATURN_NEPTUNE_DAMPER: f64 = 0.55;
/// Boost for orbs at or under [`TIGHT_ORB_MAX_DEG`].
pub const TIGHT_ORB_BOOST: f64 = 1.15;
/// Orb bound for the tight-orb boost, degrees.
pub const TIGHT_ORB_MAX_DEG: f64 = 2.0;
/// Day-score bonus per harmonious aspect made by the transiting Moon.
pub const HARMONIOUS_MOON_DAY_BONUS: f64 = 0.02;

/// Romance weight of one transit-to-natal aspect.
pub fn romance_score(m: &AspectMatch) -> f64 {
    let mut score = m.score;
    if m.kind.is_harmonious() {
        score *= HARMONIOUS_BOOST;
    }
    match m.point_a.id {
        PointId::Body(Body::Venus | Body::Jupiter) => score *= BENEFIC_TRANSIT_BOOST,
        PointId::Body(Body::Moon) => score *= MOON_TRANSIT_BOOST,
        PointId::Body(Body::Mars) => score *= MARS_TRANSIT_BOOST,
        _ => {}
    }
    if matches!(
        m.point_b.id.class(),
        PointClass::Luminary | PointClass::Angle
    ) {
        score *= NATAL_FOCUS_BOOST;
    }
    if matches!(m.point_a.id, PointId::Body(Body::Saturn | Body::Neptune))
        && matches!(m.point_b.id, PointId::Body(Body::Moon | Body::Venus))
    {
        score *= SATURN_NEPTUNE_DAMPER;
    }
    if m.orb_deg <= TIGHT_ORB_MAX_DEG {
        score *= TIGHT_ORB_BOOST;
    }
    score
}

/// Lunar dignity factor for a day: domicile and exaltation lift the day,
/// detriment and fall drag it.
pub fn moon_dignity_factor(sign: ZodiacSign) -> f64 {
    match sign {
        ZodiacSign::Cancer => 1.12,
        ZodiacSign::Taurus => 1.10,
        ZodiacSign::Capricorn => 0.92,
        ZodiacSign::Scorpio => 0.90,
        _ => 1.0,
    }
}
