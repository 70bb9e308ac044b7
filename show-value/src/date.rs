//! Date values: a millisecond time value since the Unix epoch.

use alloc::rc::Rc;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::error::ValueError;
use crate::value::Identity;

/// Largest magnitude of a valid time value: 100 million days either side of the epoch.
pub const MAX_TIME_VALUE: f64 = 8.64e15;

/// Milliseconds in 400 Gregorian years, the period of the calendar.
const MS_PER_400_YEARS: i64 = 146_097 * 86_400_000;

/// A date: a time value in milliseconds since the epoch, or `NaN` when invalid.
#[derive(Clone)]
pub struct VDate(Rc<f64>);

impl VDate {
    /// Creates a date from milliseconds since the epoch.
    ///
    /// Non-finite values and values beyond ±8.64e15 give an invalid date;
    /// anything else is truncated to a whole millisecond.
    pub fn from_millis(ms: f64) -> Self {
        let clipped = if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE {
            f64::NAN
        } else {
            // `+ 0.0` turns -0 into +0
            ms.trunc() + 0.0
        };
        VDate(Rc::new(clipped))
    }

    /// An invalid date.
    pub fn invalid() -> Self {
        VDate(Rc::new(f64::NAN))
    }

    /// Converts a `chrono` timestamp, dropping sub-millisecond precision.
    pub fn from_chrono<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_millis(dt.timestamp_millis() as f64)
    }

    /// Parses an RFC 3339 timestamp such as `2024-02-29T12:00:00.250+01:00`.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| Self::from_chrono(&dt))
            .map_err(|source| ValueError::InvalidDate {
                input: text.into(),
                source,
            })
    }

    /// The time value; `NaN` for an invalid date.
    pub fn time_value(&self) -> f64 {
        *self.0
    }

    /// Whether this date denotes an instant.
    pub fn is_valid(&self) -> bool {
        !self.0.is_nan()
    }

    /// The full-precision ISO 8601 UTC timestamp, `YYYY-MM-DDTHH:mm:ss.sssZ`,
    /// or `None` for an invalid date. Years outside `0..=9999` are written
    /// with a sign and six digits.
    pub fn to_iso_string(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }

        // chrono stops a little short of the host's range, so shift by whole
        // calendar periods until it can represent the instant
        let mut ms = self.time_value() as i64;
        let mut year_shift = 0i64;
        let dt = loop {
            if let Some(dt) = DateTime::<Utc>::from_timestamp_millis(ms) {
                break dt;
            }
            if ms > 0 {
                ms -= MS_PER_400_YEARS;
                year_shift += 400;
            } else {
                ms += MS_PER_400_YEARS;
                year_shift -= 400;
            }
        };

        let year = i64::from(dt.year()) + year_shift;
        let year = if (0..=9999).contains(&year) {
            format!("{year:04}")
        } else {
            let sign = if year < 0 { '-' } else { '+' };
            format!("{sign}{:06}", year.abs())
        };
        Some(format!(
            "{year}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.timestamp_subsec_millis(),
        ))
    }

    /// The identity of this date.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}
