//! Zodiac signs as 30-degree divisions of the ecliptic.

use serde::{Deserialize, Serialize};
use stella_frames::normalize_deg;

/// One of the twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in zodiacal order starting at Aries.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Sign containing the given ecliptic longitude (any real number of
    /// degrees; normalized internally).
    pub fn from_longitude_deg(longitude_deg: f64) -> ZodiacSign {
        let idx = (normalize_deg(longitude_deg) / 30.0) as usize % 12;
        ALL_SIGNS[idx]
    }

    /// Zero-based position in zodiacal order (Aries = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Ecliptic longitude of the sign's first degree.
    pub const fn start_deg(self) -> f64 {
        (self as usize as f64) * 30.0
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_to_sign_boundaries() {
        assert_eq!(ZodiacSign::from_longitude_deg(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude_deg(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude_deg(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude_deg(119.5), ZodiacSign::Cancer);
        assert_eq!(ZodiacSign::from_longitude_deg(280.0), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_longitude_deg(359.999), ZodiacSign::Pisces);
    }

    #[test]
    fn longitude_is_normalized_first() {
        assert_eq!(ZodiacSign::from_longitude_deg(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude_deg(-10.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude_deg(750.0), ZodiacSign::Taurus);
    }

    #[test]
    fn start_degrees_step_by_thirty() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(sign.start_deg(), 30.0 * i as f64);
            assert_eq!(ZodiacSign::from_longitude_deg(sign.start_deg() + 15.0), *sign);
        }
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&ZodiacSign::Sagittarius).unwrap();
        assert_eq!(json, "\"sagittarius\"");
        let back: ZodiacSign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ZodiacSign::Sagittarius);
    }
}
