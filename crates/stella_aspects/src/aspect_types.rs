//! Types for aspect detection and scoring.

use serde::{Deserialize, Serialize};
use stella_core::{CelestialPoint, PointId};

/// The recognized aspect types, in ascending exact angle.
///
/// The five majors are always considered; semi-sextile and quincunx only
/// when minor aspects are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

/// All aspect kinds in ascending exact angle.
pub const ALL_ASPECT_KINDS: [AspectKind; 7] = [
    AspectKind::Conjunction,
    AspectKind::SemiSextile,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

impl AspectKind {
    /// All aspect kinds in ascending exact angle.
    pub const fn all() -> &'static [AspectKind] {
        &ALL_ASPECT_KINDS
    }

    /// Exact angular separation of this aspect, degrees.
    pub const fn exact_angle_deg(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Significance weight of the aspect type.
    pub const fn weight(self) -> f64 {
        match self {
            AspectKind::Conjunction => 1.00,
            AspectKind::Opposition => 0.95,
            AspectKind::Trine => 0.90,
            AspectKind::Square => 0.85,
            AspectKind::Sextile => 0.75,
            AspectKind::Quincunx => 0.55,
            AspectKind::SemiSextile => 0.50,
        }
    }

    /// Semi-sextile and quincunx.
    pub const fn is_minor(self) -> bool {
        matches!(self, AspectKind::SemiSextile | AspectKind::Quincunx)
    }

    /// Conjunction, trine, and sextile.
    pub const fn is_harmonious(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction | AspectKind::Trine | AspectKind::Sextile
        )
    }
}

/// Which chart a point in an aspect match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartLayer {
    Natal,
    Partner,
    Transit,
}

/// One side of an aspect match: the point plus its chart of origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPoint {
    pub id: PointId,
    pub layer: ChartLayer,
    pub longitude_deg: f64,
    pub is_retrograde: bool,
}

impl MatchPoint {
    pub fn new(point: &CelestialPoint, layer: ChartLayer) -> MatchPoint {
        MatchPoint {
            id: point.id,
            layer,
            longitude_deg: point.longitude_deg,
            is_retrograde: point.is_retrograde,
        }
    }
}

/// An accepted aspect between two chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectMatch {
    pub point_a: MatchPoint,
    pub point_b: MatchPoint,
    pub kind: AspectKind,
    /// Deviation from the exact aspect angle, degrees.
    pub orb_deg: f64,
    pub score: f64,
    pub applying: bool,
}

/// Which orb table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrbMode {
    /// Within one chart (natal or transit-to-natal): 6°/5°/3° orbs with
    /// compressed tightness.
    Natal,
    /// Between two charts: widened 8°/6°/4° orbs, tightened minors.
    Synastry,
}

/// Options for a [`crate::find_aspects`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectOptions {
    pub orb_mode: OrbMode,
    pub include_minor: bool,
}

impl AspectOptions {
    /// Natal orb table.
    pub const fn natal(include_minor: bool) -> AspectOptions {
        AspectOptions {
            orb_mode: OrbMode::Natal,
            include_minor,
        }
    }

    /// Synastry orb table.
    pub const fn synastry(include_minor: bool) -> AspectOptions {
        AspectOptions {
            orb_mode: OrbMode::Synastry,
            include_minor,
        }
    }
}
