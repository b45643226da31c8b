//! House membership for a longitude against a cusp set.

use stella_frames::{arc_forward_deg, normalize_deg};

/// House number (1-12) containing an ecliptic longitude.
///
/// House `i` spans the forward arc from `cusps[i-1]` up to (excluding) the
/// next cusp. A point exactly on a cusp belongs to the house that begins
/// there; with coincident cusps (a zero-width house) the lower house
/// number wins.
pub fn assign_house(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_deg(longitude_deg);
    for i in 0..12 {
        let offset = arc_forward_deg(cusps[i], lon);
        let width = arc_forward_deg(cusps[i], cusps[(i + 1) % 12]);
        if offset == 0.0 || offset < width {
            return (i as u8) + 1;
        }
    }
    // Unreachable for cusp arrays that partition the circle.
    1
}
