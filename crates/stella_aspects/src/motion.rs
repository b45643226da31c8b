//! Applying/separating classification.
//!
//! Uses mean daily speeds only; instantaneous and retrograde velocity are
//! deliberately ignored. An aspect is applying while the faster point has
//! yet to sweep forward past the nearest exact-aspect longitude.

use stella_core::PointId;
use stella_frames::{angular_separation_deg, arc_forward_deg, normalize_deg};

use crate::aspect_types::AspectKind;

/// Whether the aspect between two positioned points is applying.
///
/// The faster point (ties go to `a`) is measured against the nearer of the
/// two exact-aspect longitudes around the slower point; the aspect applies
/// while the forward arc from the faster point to that target is under a
/// half circle. An exact aspect counts as applying.
pub fn is_applying(a: PointId, lon_a_deg: f64, b: PointId, lon_b_deg: f64, kind: AspectKind) -> bool {
    let (faster_deg, slower_deg) = if a.mean_daily_speed_deg() >= b.mean_daily_speed_deg() {
        (lon_a_deg, lon_b_deg)
    } else {
        (lon_b_deg, lon_a_deg)
    };

    let ahead = normalize_deg(slower_deg + kind.exact_angle_deg());
    let behind = normalize_deg(slower_deg - kind.exact_angle_deg());
    let target = if angular_separation_deg(faster_deg, ahead) <= angular_separation_deg(faster_deg, behind)
    {
        ahead
    } else {
        behind
    };

    arc_forward_deg(faster_deg, target) < 180.0
}
