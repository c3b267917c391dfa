//! Raw attendance and leave inputs for one employee-day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The clock-in/clock-out entries for one employee on one date.
///
/// Times are `HH:MM` strings as captured by the attendance screen. A record
/// with neither time is a candidate absence.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::models::RawAttendance;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let present = RawAttendance::new(date, "08:00", "17:00");
/// assert!(present.is_complete());
///
/// let absent = RawAttendance::absent(date);
/// assert!(absent.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttendance {
    /// The date the shift is attributed to.
    pub date: NaiveDate,
    /// Actual time in.
    #[serde(default)]
    pub time_in: Option<String>,
    /// Actual time out.
    #[serde(default)]
    pub time_out: Option<String>,
}

impl RawAttendance {
    /// Creates an attendance record with both times set.
    pub fn new(date: NaiveDate, time_in: &str, time_out: &str) -> Self {
        Self {
            date,
            time_in: Some(time_in.to_string()),
            time_out: Some(time_out.to_string()),
        }
    }

    /// Creates an attendance record with no times.
    pub fn absent(date: NaiveDate) -> Self {
        Self {
            date,
            time_in: None,
            time_out: None,
        }
    }

    /// Returns true when neither time is recorded.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.time_in) && is_blank(&self.time_out)
    }

    /// Returns true when both times are recorded.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.time_in) && !is_blank(&self.time_out)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// The kind of leave filed for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Vacation leave.
    Vacation,
    /// Sick leave.
    Sick,
    /// Emergency leave.
    Emergency,
    /// Bereavement leave.
    Bereavement,
    /// Leave without pay.
    Unpaid,
}

impl LeaveType {
    /// Returns true if the leave pays the daily rate.
    pub fn is_paid(&self) -> bool {
        !matches!(self, LeaveType::Unpaid)
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Vacation => write!(f, "Vacation"),
            LeaveType::Sick => write!(f, "Sick"),
            LeaveType::Emergency => write!(f, "Emergency"),
            LeaveType::Bereavement => write!(f, "Bereavement"),
            LeaveType::Unpaid => write!(f, "Unpaid"),
        }
    }
}

/// An approved leave covering one date, supplied by the leave collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDay {
    /// The date covered.
    pub date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
}
