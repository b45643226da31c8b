//! The ten bodies carried by a chart, with their mean daily motions.
//!
//! Source(s): Meeus, "Astronomical Algorithms" (2nd ed.), mean orbital
//! elements; speeds are long-term mean ecliptic rates in degrees per day.

use serde::{Deserialize, Serialize};

/// A celestial body tracked in charts and transit scans.
///
/// Discriminants run Sun through Pluto in traditional speed order, which is
/// also the storage order inside [`crate::ChartSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in chart order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// All bodies in chart order.
    pub fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    /// Position of this body inside [`ALL_BODIES`] and snapshot storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Long-term mean ecliptic motion in degrees per day.
    ///
    /// These are heuristics for applying/separating decisions, not
    /// instantaneous rates.
    pub const fn mean_daily_speed_deg(self) -> f64 {
        match self {
            Body::Sun => 0.9856,
            Body::Moon => 13.1764,
            Body::Mercury => 1.3833,
            Body::Venus => 1.2,
            Body::Mars => 0.5240,
            Body::Jupiter => 0.0831,
            Body::Saturn => 0.0335,
            Body::Uranus => 0.0117,
            Body::Neptune => 0.0060,
            Body::Pluto => 0.0040,
        }
    }

    /// True for the Sun and Moon.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_order_is_stable() {
        assert_eq!(ALL_BODIES.len(), 10);
        assert_eq!(ALL_BODIES[0], Body::Sun);
        assert_eq!(ALL_BODIES[9], Body::Pluto);
        for (i, body) in ALL_BODIES.iter().enumerate() {
            assert_eq!(body.index(), i, "index mismatch for {body}");
        }
    }

    #[test]
    fn speeds_decrease_beyond_the_moon() {
        // Moon is fastest; from Mercury outward the rates fall monotonically.
        assert!(Body::Moon.mean_daily_speed_deg() > Body::Sun.mean_daily_speed_deg());
        let outward = [
            Body::Mercury,
            Body::Venus,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Pluto,
        ];
        for pair in outward.windows(2) {
            assert!(
                pair[0].mean_daily_speed_deg() > pair[1].mean_daily_speed_deg(),
                "{} should be faster than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn luminaries() {
        assert!(Body::Sun.is_luminary());
        assert!(Body::Moon.is_luminary());
        assert!(!Body::Venus.is_luminary());
        assert!(!Body::Pluto.is_luminary());
    }

    #[test]
    fn serde_names_are_camel_case() {
        let json = serde_json::to_string(&Body::Moon).unwrap();
        assert_eq!(json, "\"moon\"");
        let back: Body = serde_json::from_str("\"jupiter\"").unwrap();
        assert_eq!(back, Body::Jupiter);
    }
}
