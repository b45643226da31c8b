//! Julian Date ↔ calendar conversions.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 7. Handles both
//! Gregorian and Julian calendar dates, switching at 1582 October 15.

/// Julian Date of the J2000.0 epoch (2000 January 1.5 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date to a Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 4.81 = the 4th,
/// 19h26m24s). Dates on or after 1582-10-15 use the Gregorian leap rule,
/// earlier dates the Julian rule.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }

    let gregorian =
        year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)));
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z >= 2_299_161.0 {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}
