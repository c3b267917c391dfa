//! Day-type state machine.
//!
//! Decides which pay branch applies to an employee-day before any time or pay
//! metric is computed. Rules are tried in order and the first match wins.

use serde::{Deserialize, Serialize};

use crate::models::{
    DayType, HolidayRange, HolidayType, LeaveDay, LeaveType, RawAttendance, ScheduleSpec,
};

/// The pay branch selected for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBranch {
    /// No attendance on a paid holiday: the daily rate, no bonus.
    PaidHoliday,
    /// No attendance on a scheduled workday with a leave day filed for the date.
    Leave(LeaveType),
    /// No attendance on a scheduled workday.
    Absent,
    /// A scheduled day off, or no schedule and no attendance.
    RestDay,
    /// Attendance present but the schedule for the date is unresolved.
    MissingSchedule,
    /// Only one of time-in or time-out on a workday.
    IncompleteAttendance,
    /// Both times present against a resolvable schedule.
    Workday,
}

impl std::fmt::Display for DayBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayBranch::PaidHoliday => write!(f, "paid holiday"),
            DayBranch::Leave(leave_type) => write!(f, "{} leave", leave_type),
            DayBranch::Absent => write!(f, "absent"),
            DayBranch::RestDay => write!(f, "rest day"),
            DayBranch::MissingSchedule => write!(f, "missing schedule"),
            DayBranch::IncompleteAttendance => write!(f, "incomplete attendance"),
            DayBranch::Workday => write!(f, "workday"),
        }
    }
}

/// Classifies an employee-day.
///
/// A leave day for a different date than the attendance is ignored, and so
/// is a leave filed on a rest day or a day without a resolvable schedule.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{DayBranch, classify_day};
/// use attendance_pay_engine::models::{RawAttendance, ScheduleSpec};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let schedule = ScheduleSpec::working("08:00", "17:00");
///
/// let branch = classify_day(&RawAttendance::absent(date), Some(&schedule), None, None);
/// assert_eq!(branch, DayBranch::Absent);
///
/// let branch = classify_day(&RawAttendance::absent(date), Some(&ScheduleSpec::off()), None, None);
/// assert_eq!(branch, DayBranch::RestDay);
/// ```
pub fn classify_day(
    attendance: &RawAttendance,
    schedule: Option<&ScheduleSpec>,
    holiday: Option<&HolidayRange>,
    leave: Option<&LeaveDay>,
) -> DayBranch {
    let scheduled_workday = schedule.is_some_and(|s| s.is_workday());
    let leave = leave.filter(|l| l.date == attendance.date);

    if attendance.is_empty() {
        if holiday.is_some_and(|h| h.paid) {
            return DayBranch::PaidHoliday;
        }
        if !scheduled_workday {
            return DayBranch::RestDay;
        }
        return match leave {
            Some(leave) => DayBranch::Leave(leave.leave_type),
            None => DayBranch::Absent,
        };
    }

    match schedule {
        Some(spec) if spec.is_off => DayBranch::RestDay,
        Some(_) if scheduled_workday => {
            if attendance.is_complete() {
                DayBranch::Workday
            } else {
                DayBranch::IncompleteAttendance
            }
        }
        _ => DayBranch::MissingSchedule,
    }
}

/// The record day type for a holiday date, or `otherwise` on a normal date.
pub fn holiday_day_type(holiday: Option<&HolidayRange>, otherwise: DayType) -> DayType {
    match holiday.map(|h| h.holiday_type) {
        Some(HolidayType::Regular) => DayType::Holiday,
        Some(HolidayType::Special) => DayType::Special,
        None => otherwise,
    }
}
