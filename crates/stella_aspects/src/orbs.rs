//! Maximum orb tables.

use stella_core::PointClass;

use crate::aspect_types::{AspectKind, OrbMode};

/// Maximum allowed orb for a point pair and aspect kind, degrees.
///
/// Tiered by the more significant participant: luminaries get the widest
/// orb, then personal points and angles, then the slow social/outer pairs.
/// Synastry widens every tier; its minor aspects give back 2° (floor 2°)
/// so weak cross-chart contacts do not flood the match list.
pub fn max_orb_deg(class_a: PointClass, class_b: PointClass, kind: AspectKind, mode: OrbMode) -> f64 {
    let luminary = class_a == PointClass::Luminary || class_b == PointClass::Luminary;
    let near_personal = matches!(class_a, PointClass::Personal | PointClass::Angle)
        || matches!(class_b, PointClass::Personal | PointClass::Angle);

    let base: f64 = match (mode, luminary, near_personal) {
        (OrbMode::Natal, true, _) => 6.0,
        (OrbMode::Natal, false, true) => 5.0,
        (OrbMode::Natal, false, false) => 3.0,
        (OrbMode::Synastry, true, _) => 8.0,
        (OrbMode::Synastry, false, true) => 6.0,
        (OrbMode::Synastry, false, false) => 4.0,
    };

    if mode == OrbMode::Synastry && kind.is_minor() {
        (base - 2.0).max(2.0)
    } else {
        base
    }
}
