//! The persisted per-day compensation record.
//!
//! A [`CompensationRecord`] is what the engine hands to the persistence
//! collaborator and what it receives back as the starting point for manual
//! edits.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LeaveType;

/// Classification selecting which pay branch applied to a day.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::models::DayType;
///
/// assert_eq!(DayType::RestDay.to_string(), "Rest Day");
/// assert!(DayType::Special.is_holiday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// An ordinary scheduled workday.
    Regular,
    /// A regular holiday.
    Holiday,
    /// A special holiday.
    Special,
    /// A scheduled rest day (or a day without a resolvable schedule).
    RestDay,
}

impl DayType {
    /// Returns true for either holiday kind.
    pub fn is_holiday(&self) -> bool {
        matches!(self, DayType::Holiday | DayType::Special)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Regular => write!(f, "Regular"),
            DayType::Holiday => write!(f, "Holiday"),
            DayType::Special => write!(f, "Special"),
            DayType::RestDay => write!(f, "Rest Day"),
        }
    }
}

/// One employee-day of compensation.
///
/// Invariants for records computed by the engine:
/// - `deductions == late_deduction + undertime_deduction`
/// - `net_pay == max(0, gross_pay - deductions + leave_pay)`
/// - `overtime_minutes % 60 == 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// The pay branch that applied.
    pub day_type: DayType,
    /// Hours worked, rounded to the nearest whole hour.
    pub hours_worked: Decimal,
    /// Minutes arrived after the scheduled start.
    #[serde(default)]
    pub late_minutes: i64,
    /// Minutes left before the scheduled end.
    #[serde(default)]
    pub undertime_minutes: i64,
    /// Paid overtime minutes.
    #[serde(default)]
    pub overtime_minutes: i64,
    /// Hours worked inside the nightly window.
    #[serde(default)]
    pub night_differential_hours: Decimal,
    /// Total pay before deductions.
    pub gross_pay: Decimal,
    /// Pay after deductions plus leave pay.
    pub net_pay: Decimal,
    /// Sum of late and undertime deductions.
    pub deductions: Decimal,
    /// Deduction for lateness beyond the grace period.
    pub late_deduction: Decimal,
    /// Deduction for undertime beyond the grace period.
    pub undertime_deduction: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for night-differential hours.
    pub night_differential_pay: Decimal,
    /// Holiday premium on top of the daily rate.
    pub holiday_bonus: Decimal,
    /// Pay for approved leave.
    pub leave_pay: Decimal,
    /// The kind of leave, if any was filed.
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    /// Whether the day counts as an unexcused absence.
    #[serde(default)]
    pub absent: bool,
    /// Whether derived fields are frozen for manual editing.
    #[serde(default)]
    pub manual_override: bool,
    /// Free-form notes kept across recomputation.
    #[serde(default)]
    pub notes: String,
}

impl CompensationRecord {
    /// Creates an all-zero regular-day record for an employee and date.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_pay_engine::models::{CompensationRecord, DayType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let record = CompensationRecord::new("emp_001", date);
    /// assert_eq!((record.year, record.month, record.day), (2026, 1, 15));
    /// assert_eq!(record.day_type, DayType::Regular);
    /// assert_eq!(record.net_pay, Decimal::ZERO);
    /// assert_eq!(record.date(), Some(date));
    /// ```
    pub fn new(employee_id: &str, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_type: DayType::Regular,
            hours_worked: Decimal::ZERO,
            late_minutes: 0,
            undertime_minutes: 0,
            overtime_minutes: 0,
            night_differential_hours: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            deductions: Decimal::ZERO,
            late_deduction: Decimal::ZERO,
            undertime_deduction: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            night_differential_pay: Decimal::ZERO,
            holiday_bonus: Decimal::ZERO,
            leave_pay: Decimal::ZERO,
            leave_type: None,
            absent: false,
            manual_override: false,
            notes: String::new(),
        }
    }

    /// Returns the calendar date of the record, if the parts form a valid date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Re-derives `deductions` from its two components.
    pub fn settle_deductions(&mut self) {
        self.deductions = self.late_deduction.saturating_add(self.undertime_deduction);
    }

    /// Re-derives `net_pay` from gross, deductions and leave pay, clamped at zero.
    pub fn settle_net_pay(&mut self) {
        self.net_pay = non_negative(
            self.gross_pay
                .saturating_sub(self.deductions)
                .saturating_add(self.leave_pay),
        );
    }
}

/// Clamps a monetary value at zero.
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}
