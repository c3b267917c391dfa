//! Night-differential window overlap.
//!
//! The nightly window `[start_hour, end_hour)` repeats every day and wraps past
//! midnight when `end_hour <= start_hour`. A worked interval can touch the
//! window instance that opened the previous evening as well as the one opening
//! on its own date, so every instance from the day before the interval starts
//! to the day it ends is checked.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::TimeInterval;
use super::round_hours;

/// Minutes of `worked` falling inside the nightly window.
///
/// Equal start and end hours mean the site has no night window.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{TimeInterval, night_differential_minutes};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let worked = TimeInterval::from_clock(date, "20:00", "02:00").unwrap();
///
/// // 22:00-02:00 inside a 22:00-06:00 window.
/// assert_eq!(night_differential_minutes(&worked, 22, 6), 240);
/// ```
pub fn night_differential_minutes(worked: &TimeInterval, start_hour: u32, end_hour: u32) -> i64 {
    if start_hour == end_hour {
        return 0;
    }

    let first_day = worked.start.date() - Duration::days(1);
    let last_day = worked.end.date();

    first_day
        .iter_days()
        .take_while(|day| *day <= last_day)
        .filter_map(|day| window_on(day, start_hour, end_hour))
        .map(|window| worked.overlap_minutes(&window))
        .sum()
}

/// Hours of `worked` inside the nightly window, to two decimal places.
pub fn night_differential_hours(worked: &TimeInterval, start_hour: u32, end_hour: u32) -> Decimal {
    let minutes = night_differential_minutes(worked, start_hour, end_hour);
    round_hours(Decimal::from(minutes) / Decimal::from(60))
}

/// The window instance opening on `day`.
fn window_on(day: NaiveDate, start_hour: u32, end_hour: u32) -> Option<TimeInterval> {
    let start = day.and_hms_opt(start_hour, 0, 0)?;
    let end_day = if end_hour > start_hour {
        day
    } else {
        day.succ_opt()?
    };
    let end = end_day.and_hms_opt(end_hour, 0, 0)?;
    Some(TimeInterval { start, end })
}
