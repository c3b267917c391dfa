//! Time normalization.
//!
//! Turns a date plus `HH:MM` clock strings into concrete [`TimeInterval`]s.
//! A time-out that is not after its paired time-in on the clock face means the
//! shift crossed midnight, so the time-out moves to the next day. The rule is
//! applied to the actual and the scheduled pair independently.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{RawAttendance, ScheduleSpec};

/// A concrete span of wall-clock time.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::TimeInterval;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let interval = TimeInterval::from_clock(date, "22:00", "06:00").unwrap();
/// assert_eq!(interval.minutes(), 480);
/// assert_eq!(interval.end.date(), date.succ_opt().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start of the interval.
    pub start: NaiveDateTime,
    /// End of the interval, always after `start`.
    pub end: NaiveDateTime,
}

impl TimeInterval {
    /// Builds an interval from a date and two clock strings, applying the
    /// overnight rule.
    pub fn from_clock(date: NaiveDate, time_in: &str, time_out: &str) -> EngineResult<Self> {
        let start_time = parse_clock(time_in)?;
        let end_time = parse_clock(time_out)?;

        let start = date.and_time(start_time);
        let mut end = date.and_time(end_time);
        if end_time <= start_time {
            end += Duration::days(1);
        }

        Ok(Self { start, end })
    }

    /// Length of the interval in whole minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Minutes shared between this interval and another.
    pub fn overlap_minutes(&self, other: &TimeInterval) -> i64 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end > start {
            (end - start).num_minutes()
        } else {
            0
        }
    }
}

/// The actual and scheduled intervals for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIntervals {
    /// What the employee actually worked; `None` if either time is missing.
    pub actual: Option<TimeInterval>,
    /// The scheduled shift; `None` on a rest day or unresolved schedule.
    pub scheduled: Option<TimeInterval>,
}

/// Parses an `HH:MM` (or `HH:MM:SS`) clock string.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("07:45").unwrap(), NaiveTime::from_hms_opt(7, 45, 0).unwrap());
/// assert!(parse_clock("7 o'clock").is_err());
/// ```
pub fn parse_clock(value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidClockTime {
            value: value.to_string(),
        })
}

/// Builds the actual and scheduled intervals for a day.
///
/// Never fails: a missing or unparsable actual time yields `actual: None`, and
/// a rest day, unresolved schedule or unparsable schedule yields
/// `scheduled: None`. Callers treat a `None` schedule as the daily-rate-only
/// fallback.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::normalize_intervals;
/// use attendance_pay_engine::models::{RawAttendance, ScheduleSpec};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let attendance = RawAttendance::new(date, "21:50", "07:05");
/// let schedule = ScheduleSpec::working("22:00", "07:00");
///
/// let intervals = normalize_intervals(&attendance, Some(&schedule));
/// assert_eq!(intervals.actual.unwrap().minutes(), 555);
/// assert_eq!(intervals.scheduled.unwrap().minutes(), 540);
/// ```
pub fn normalize_intervals(
    attendance: &RawAttendance,
    schedule: Option<&ScheduleSpec>,
) -> NormalizedIntervals {
    let actual = match (&attendance.time_in, &attendance.time_out) {
        (Some(time_in), Some(time_out)) if attendance.is_complete() => {
            match TimeInterval::from_clock(attendance.date, time_in, time_out) {
                Ok(interval) => Some(interval),
                Err(err) => {
                    warn!(
                        date = %attendance.date,
                        error = %err,
                        "Ignoring unparsable attendance time"
                    );
                    None
                }
            }
        }
        _ => None,
    };

    let scheduled = match schedule {
        Some(spec) if spec.is_workday() => {
            let time_in = spec.time_in.as_deref().unwrap_or_default();
            let time_out = spec.time_out.as_deref().unwrap_or_default();
            match TimeInterval::from_clock(attendance.date, time_in, time_out) {
                Ok(interval) => Some(interval),
                Err(err) => {
                    warn!(
                        date = %attendance.date,
                        error = %err,
                        "Ignoring unparsable schedule time"
                    );
                    None
                }
            }
        }
        _ => None,
    };

    NormalizedIntervals { actual, scheduled }
}
