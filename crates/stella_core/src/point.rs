//! Chart points: bodies plus derived angles, with their aspect weighting
//! classes.

use serde::{Deserialize, Serialize};
use stella_frames::normalize_deg;

use crate::body::Body;
use crate::zodiac::ZodiacSign;

/// A chart angle derived from time and place rather than an ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnglePoint {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
}

/// Identity of any point that can participate in an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointId {
    Body(Body),
    Angle(AnglePoint),
}

/// Weighting class used when scoring aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointClass {
    Luminary,
    Personal,
    Social,
    Outer,
    Angle,
}

impl PointClass {
    /// Multiplicative significance weight.
    pub const fn weight(self) -> f64 {
        match self {
            PointClass::Luminary => 1.00,
            PointClass::Angle => 0.95,
            PointClass::Personal => 0.90,
            PointClass::Social => 0.80,
            PointClass::Outer => 0.70,
        }
    }
}

impl PointId {
    /// Weighting class of this point.
    pub const fn class(self) -> PointClass {
        match self {
            PointId::Body(Body::Sun) | PointId::Body(Body::Moon) => PointClass::Luminary,
            PointId::Body(Body::Mercury) | PointId::Body(Body::Venus) | PointId::Body(Body::Mars) => {
                PointClass::Personal
            }
            PointId::Body(Body::Jupiter) | PointId::Body(Body::Saturn) => PointClass::Social,
            PointId::Body(Body::Uranus) | PointId::Body(Body::Neptune) | PointId::Body(Body::Pluto) => {
                PointClass::Outer
            }
            PointId::Angle(_) => PointClass::Angle,
        }
    }

    /// Mean daily motion; angles are treated as fixed chart features.
    pub const fn mean_daily_speed_deg(self) -> f64 {
        match self {
            PointId::Body(body) => body.mean_daily_speed_deg(),
            PointId::Angle(_) => 0.0,
        }
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointId::Body(body) => write!(f, "{body}"),
            PointId::Angle(AnglePoint::Ascendant) => write!(f, "Ascendant"),
            PointId::Angle(AnglePoint::Midheaven) => write!(f, "Midheaven"),
            PointId::Angle(AnglePoint::Descendant) => write!(f, "Descendant"),
            PointId::Angle(AnglePoint::ImumCoeli) => write!(f, "Imum Coeli"),
        }
    }
}

/// A positioned chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialPoint {
    pub id: PointId,
    /// Ecliptic longitude in `[0, 360)` degrees.
    pub longitude_deg: f64,
    pub is_retrograde: bool,
    pub sign: ZodiacSign,
}

impl CelestialPoint {
    /// Builds a point, normalizing the longitude and deriving its sign.
    pub fn new(id: PointId, longitude_deg: f64, is_retrograde: bool) -> CelestialPoint {
        let longitude_deg = normalize_deg(longitude_deg);
        CelestialPoint {
            id,
            longitude_deg,
            is_retrograde,
            sign: ZodiacSign::from_longitude_deg(longitude_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_partition_the_bodies() {
        assert_eq!(PointId::Body(Body::Sun).class(), PointClass::Luminary);
        assert_eq!(PointId::Body(Body::Moon).class(), PointClass::Luminary);
        assert_eq!(PointId::Body(Body::Mercury).class(), PointClass::Personal);
        assert_eq!(PointId::Body(Body::Venus).class(), PointClass::Personal);
        assert_eq!(PointId::Body(Body::Mars).class(), PointClass::Personal);
        assert_eq!(PointId::Body(Body::Jupiter).class(), PointClass::Social);
        assert_eq!(PointId::Body(Body::Saturn).class(), PointClass::Social);
        assert_eq!(PointId::Body(Body::Uranus).class(), PointClass::Outer);
        assert_eq!(PointId::Body(Body::Neptune).class(), PointClass::Outer);
        assert_eq!(PointId::Body(Body::Pluto).class(), PointClass::Outer);
        assert_eq!(PointId::Angle(AnglePoint::Ascendant).class(), PointClass::Angle);
    }

    #[test]
    fn class_weights_rank_luminaries_highest() {
        assert_eq!(PointClass::Luminary.weight(), 1.00);
        assert_eq!(PointClass::Angle.weight(), 0.95);
        assert_eq!(PointClass::Personal.weight(), 0.90);
        assert_eq!(PointClass::Social.weight(), 0.80);
        assert_eq!(PointClass::Outer.weight(), 0.70);
    }

    #[test]
    fn angles_do_not_move() {
        assert_eq!(PointId::Angle(AnglePoint::Midheaven).mean_daily_speed_deg(), 0.0);
        assert!(PointId::Body(Body::Moon).mean_daily_speed_deg() > 13.0);
    }

    #[test]
    fn new_normalizes_and_derives_sign() {
        let p = CelestialPoint::new(PointId::Body(Body::Venus), 372.5, false);
        assert_eq!(p.longitude_deg, 12.5);
        assert_eq!(p.sign, ZodiacSign::Aries);

        let q = CelestialPoint::new(PointId::Angle(AnglePoint::Ascendant), -15.0, false);
        assert_eq!(q.longitude_deg, 345.0);
        assert_eq!(q.sign, ZodiacSign::Pisces);
    }

    #[test]
    fn serde_preserves_longitude_bits() {
        // Longitudes with no short decimal form must come back bit-equal,
        // not merely within a ULP.
        for lon in [251.449_833_333_333_94, 49.629_945_409_963_284, 1.0 / 3.0] {
            let p = CelestialPoint::new(PointId::Body(Body::Pluto), lon, false);
            let json = serde_json::to_string(&p).unwrap();
            let back: CelestialPoint = serde_json::from_str(&json).unwrap();
            assert_eq!(
                back.longitude_deg.to_bits(),
                p.longitude_deg.to_bits(),
                "longitude {lon} drifted through JSON"
            );
        }
    }

    #[test]
    fn serde_shape_is_camel_case() {
        let p = CelestialPoint::new(PointId::Body(Body::Mars), 95.25, true);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["longitudeDeg"], 95.25);
        assert_eq!(json["isRetrograde"], true);
        assert_eq!(json["sign"], "cancer");
        let back: CelestialPoint = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
