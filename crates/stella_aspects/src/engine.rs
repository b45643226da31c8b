//! Aspect detection between point sets.

use stella_core::CelestialPoint;
use stella_frames::angular_separation_deg;

use crate::aspect_types::{
    AspectKind, AspectMatch, AspectOptions, ChartLayer, MatchPoint, OrbMode,
};
use crate::motion::is_applying;
use crate::orbs::max_orb_deg;

/// Finds every accepted aspect between two point sets.
///
/// Matches always carry the set-A point in `point_a`, tagged with
/// `layer_a`, so callers can tell (for example) the transiting side from
/// the natal side. Output order follows input order and is deterministic.
pub fn find_aspects(
    set_a: &[CelestialPoint],
    layer_a: ChartLayer,
    set_b: &[CelestialPoint],
    layer_b: ChartLayer,
    options: &AspectOptions,
) -> Vec<AspectMatch> {
    let mut matches = Vec::new();
    for a in set_a {
        for b in set_b {
            if let Some(m) = classify(a, layer_a, b, layer_b, options) {
                matches.push(m);
            }
        }
    }
    matches
}

/// Finds aspects within one point set (each unordered pair once).
pub fn aspects_within(
    set: &[CelestialPoint],
    layer: ChartLayer,
    options: &AspectOptions,
) -> Vec<AspectMatch> {
    let mut matches = Vec::new();
    for (i, a) in set.iter().enumerate() {
        for b in &set[i + 1..] {
            if let Some(m) = classify(a, layer, b, layer, options) {
                matches.push(m);
            }
        }
    }
    matches
}

/// Classifies one pair: nearest enabled aspect kind, orb gate, score.
fn classify(
    a: &CelestialPoint,
    layer_a: ChartLayer,
    b: &CelestialPoint,
    layer_b: ChartLayer,
    options: &AspectOptions,
) -> Option<AspectMatch> {
    let separation = angular_separation_deg(a.longitude_deg, b.longitude_deg);

    let mut nearest: Option<(AspectKind, f64)> = None;
    for &kind in AspectKind::all() {
        if kind.is_minor() && !options.include_minor {
            continue;
        }
        let diff = (separation - kind.exact_angle_deg()).abs();
        if nearest.is_none_or(|(_, best)| diff < best) {
            nearest = Some((kind, diff));
        }
    }
    let (kind, orb_deg) = nearest?;

    let class_a = a.id.class();
    let class_b = b.id.class();
    let max_orb = max_orb_deg(class_a, class_b, kind, options.orb_mode);
    if orb_deg > max_orb {
        return None;
    }

    let tightness = 1.0 - orb_deg / max_orb;
    let tightness = match options.orb_mode {
        OrbMode::Natal => 0.6 + 0.4 * tightness,
        OrbMode::Synastry => tightness,
    };
    let score = kind.weight() * class_a.weight() * class_b.weight() * tightness;

    Some(AspectMatch {
        point_a: MatchPoint::new(a, layer_a),
        point_b: MatchPoint::new(b, layer_b),
        kind,
        orb_deg,
        score,
        applying: is_applying(a.id, a.longitude_deg, b.id, b.longitude_deg, kind),
    })
}
