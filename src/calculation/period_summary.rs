//! Pay period summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CompensationRecord;

/// Totals for one employee over one year/month pay period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The employee summarized.
    pub employee_id: String,
    /// Period year.
    pub year: i32,
    /// Period month, 1-12.
    pub month: u32,
    /// Records counted.
    pub days_recorded: u32,
    /// Records with worked hours.
    pub days_present: u32,
    /// Records flagged absent.
    pub days_absent: u32,
    /// Records under manual override.
    pub manual_override_days: u32,
    /// Total worked hours.
    pub hours_worked: Decimal,
    /// Total gross pay.
    pub gross_pay: Decimal,
    /// Total deductions.
    pub deductions: Decimal,
    /// Total overtime pay.
    pub overtime_pay: Decimal,
    /// Total night differential pay.
    pub night_differential_pay: Decimal,
    /// Total holiday bonus.
    pub holiday_bonus: Decimal,
    /// Total leave pay.
    pub leave_pay: Decimal,
    /// Total net pay.
    pub net_pay: Decimal,
}

/// Aggregates an employee's daily records for a pay period.
///
/// Records belonging to other employees or other periods are skipped.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::summarize_period;
/// use attendance_pay_engine::models::CompensationRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut day = CompensationRecord::new("emp_001", NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// day.gross_pay = Decimal::new(800, 0);
/// day.net_pay = Decimal::new(800, 0);
///
/// let summary = summarize_period("emp_001", 2026, 1, &[day.clone(), day]);
/// assert_eq!(summary.days_recorded, 2);
/// assert_eq!(summary.net_pay, Decimal::new(1600, 0));
/// ```
pub fn summarize_period(
    employee_id: &str,
    year: i32,
    month: u32,
    records: &[CompensationRecord],
) -> PeriodSummary {
    records
        .iter()
        .filter(|r| r.employee_id == employee_id && r.year == year && r.month == month)
        .fold(
            PeriodSummary {
                employee_id: employee_id.to_string(),
                year,
                month,
                ..PeriodSummary::default()
            },
            |mut summary, record| {
                summary.days_recorded += 1;
                if record.hours_worked > Decimal::ZERO {
                    summary.days_present += 1;
                }
                if record.absent {
                    summary.days_absent += 1;
                }
                if record.manual_override {
                    summary.manual_override_days += 1;
                }
                summary.hours_worked += record.hours_worked;
                summary.gross_pay += record.gross_pay;
                summary.deductions += record.deductions;
                summary.overtime_pay += record.overtime_pay;
                summary.night_differential_pay += record.night_differential_pay;
                summary.holiday_bonus += record.holiday_bonus;
                summary.leave_pay += record.leave_pay;
                summary.net_pay += record.net_pay;
                summary
            },
        )
}
