//! Civil input record: local date, optional local time, timezone offset.
//!
//! Chart requests arrive as civil wall-clock data. `CivilMoment` validates
//! that data up front and converts it to a UT Julian Date; a missing birth
//! time falls back to local noon, and the caller marks the derived chart
//! accordingly.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// Westernmost civil offset in use (UTC−12:00).
pub const MIN_TZ_OFFSET_MINUTES: i32 = -720;

/// Easternmost civil offset in use (UTC+14:00).
pub const MAX_TZ_OFFSET_MINUTES: i32 = 840;

const LOCAL_NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

/// A validated civil moment: local date, optional local time, and the
/// offset of local civil time from UTC in minutes (east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilMoment {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub tz_offset_minutes: i32,
}

impl CivilMoment {
    /// Build a civil moment, rejecting out-of-range timezone offsets.
    pub fn new(
        date: NaiveDate,
        time: Option<NaiveTime>,
        tz_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        if !(MIN_TZ_OFFSET_MINUTES..=MAX_TZ_OFFSET_MINUTES).contains(&tz_offset_minutes) {
            return Err(TimeError::InvalidTzOffset {
                minutes: tz_offset_minutes,
            });
        }
        Ok(Self {
            date,
            time,
            tz_offset_minutes,
        })
    }

    /// Build from raw year/month/day plus hour/minute.
    pub fn from_ymd_hm(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        tz_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| TimeError::InvalidCivil(format!("{year:04}-{month:02}-{day:02}")))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::InvalidCivil(format!("{hour:02}:{minute:02}")))?;
        Self::new(date, Some(time), tz_offset_minutes)
    }

    /// Build a date-only moment (birth time unknown).
    pub fn date_only(
        year: i32,
        month: u32,
        day: u32,
        tz_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| TimeError::InvalidCivil(format!("{year:04}-{month:02}-{day:02}")))?;
        Self::new(date, None, tz_offset_minutes)
    }

    /// Whether an explicit local time was supplied.
    pub fn is_time_known(&self) -> bool {
        self.time.is_some()
    }

    /// The local time used for computation (noon when unknown).
    pub fn local_time(&self) -> NaiveTime {
        self.time.unwrap_or(LOCAL_NOON)
    }

    /// UT Julian Date of this moment.
    ///
    /// The day fraction may step outside [1, 31] when the offset crosses a
    /// month boundary; the Meeus conversion handles that linearly.
    pub fn jd_ut(&self) -> f64 {
        let seconds = f64::from(self.local_time().num_seconds_from_midnight());
        let day_frac = f64::from(self.date.day()) + seconds / SECONDS_PER_DAY
            - f64::from(self.tz_offset_minutes) * 60.0 / SECONDS_PER_DAY;
        calendar_to_jd(self.date.year(), self.date.month(), day_frac)
    }
}

impl fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.tz_offset_minutes < 0 { '-' } else { '+' };
        let mins = self.tz_offset_minutes.abs();
        match self.time {
            Some(t) => write!(
                f,
                "{}T{}{}{:02}:{:02}",
                self.date,
                t,
                sign,
                mins / 60,
                mins % 60
            ),
            None => write!(
                f,
                "{} (time unknown){}{:02}:{:02}",
                self.date,
                sign,
                mins / 60,
                mins % 60
            ),
        }
    }
}
