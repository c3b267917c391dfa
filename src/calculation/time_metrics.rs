//! Time metrics calculation.
//!
//! Derives late, undertime and overtime minutes, worked hours and
//! night-differential hours from the normalized actual and scheduled
//! intervals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::night_differential::night_differential_hours;
use super::{TimeInterval, minutes_to_hours};
use crate::models::{AttendancePolicy, AuditStep, DEFAULT_HOURS_OF_WORK};

/// Time-based measurements for one employee-day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMetrics {
    /// Minutes arrived after the scheduled start.
    pub late_minutes: i64,
    /// Minutes left before the scheduled end.
    pub undertime_minutes: i64,
    /// Eligible overtime, always a whole number of hours in minutes.
    pub overtime_minutes: i64,
    /// Worked hours rounded to the nearest whole hour.
    pub hours_worked: Decimal,
    /// Hours inside the nightly window, to two decimal places.
    pub night_differential_hours: Decimal,
}

/// The result of a time metrics calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct TimeMetricsResult {
    /// The derived metrics.
    pub metrics: TimeMetrics,
    /// The audit steps recording the calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Applies the overtime threshold and whole-hour floor to a candidate.
///
/// The candidate must strictly exceed the threshold; eligible minutes are then
/// floored to whole hours, so partial hours are discarded rather than rounded.
///
/// # Examples
///
/// ```
/// use attendance_pay_engine::calculation::eligible_overtime_minutes;
///
/// assert_eq!(eligible_overtime_minutes(120, 30), 120);
/// assert_eq!(eligible_overtime_minutes(30, 30), 0); // must strictly exceed
/// assert_eq!(eligible_overtime_minutes(89, 30), 60); // floored, not rounded
/// assert_eq!(eligible_overtime_minutes(45, 40), 0); // eligible but under an hour
/// ```
pub fn eligible_overtime_minutes(candidate_minutes: i64, threshold_minutes: i64) -> i64 {
    if candidate_minutes > threshold_minutes && candidate_minutes > 0 {
        (candidate_minutes / 60) * 60
    } else {
        0
    }
}

/// Worked minutes as hours rounded to the nearest whole hour.
pub(crate) fn round_to_whole_hours(minutes: i64) -> Decimal {
    minutes_to_hours(minutes).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the time metrics for a scheduled workday.
///
/// # Arguments
///
/// * `actual` - The worked interval, `None` if either time is missing
/// * `scheduled` - The scheduled shift interval
/// * `policy` - The attendance policy in force
/// * `start_step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// All-zero metrics when `actual` is `None`; absence handling is decided by
/// the caller.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{TimeInterval, calculate_time_metrics};
/// use attendance_pay_engine::models::AttendancePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let scheduled = TimeInterval::from_clock(date, "08:00", "17:00").unwrap();
/// let actual = TimeInterval::from_clock(date, "08:20", "19:00").unwrap();
/// let policy = AttendancePolicy { overtime_threshold: 30, ..AttendancePolicy::default() };
///
/// let result = calculate_time_metrics(Some(&actual), &scheduled, &policy, 1);
/// assert_eq!(result.metrics.late_minutes, 20);
/// assert_eq!(result.metrics.overtime_minutes, 120);
/// assert_eq!(result.metrics.hours_worked, Decimal::new(11, 0));
/// ```
pub fn calculate_time_metrics(
    actual: Option<&TimeInterval>,
    scheduled: &TimeInterval,
    policy: &AttendancePolicy,
    start_step_number: u32,
) -> TimeMetricsResult {
    let Some(actual) = actual else {
        let audit_step = AuditStep {
            step_number: start_step_number,
            rule_id: "attendance_variance".to_string(),
            rule_name: "Attendance Variance".to_string(),
            policy_ref: "schedule".to_string(),
            input: serde_json::json!({
                "scheduled_in": scheduled.start.to_string(),
                "scheduled_out": scheduled.end.to_string(),
                "actual_in": null,
                "actual_out": null
            }),
            output: serde_json::json!({
                "late_minutes": 0,
                "undertime_minutes": 0,
                "hours_worked": "0"
            }),
            reasoning: "Actual time in or out is missing, all time metrics are zero".to_string(),
        };
        return TimeMetricsResult {
            metrics: TimeMetrics::default(),
            audit_steps: vec![audit_step],
        };
    };

    let mut audit_steps = Vec::new();
    let mut step_number = start_step_number;

    // Late and undertime against the schedule
    let late_minutes = (actual.start - scheduled.start).num_minutes().max(0);
    let undertime_minutes = (scheduled.end - actual.end).num_minutes().max(0);
    let hours_worked = round_to_whole_hours(actual.minutes());

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "attendance_variance".to_string(),
        rule_name: "Attendance Variance".to_string(),
        policy_ref: "schedule".to_string(),
        input: serde_json::json!({
            "scheduled_in": scheduled.start.to_string(),
            "scheduled_out": scheduled.end.to_string(),
            "actual_in": actual.start.to_string(),
            "actual_out": actual.end.to_string()
        }),
        output: serde_json::json!({
            "late_minutes": late_minutes,
            "undertime_minutes": undertime_minutes,
            "hours_worked": hours_worked.normalize().to_string()
        }),
        reasoning: format!(
            "{} min late, {} min undertime, {} min worked rounds to {} h",
            late_minutes,
            undertime_minutes,
            actual.minutes(),
            hours_worked.normalize()
        ),
    });
    step_number += 1;

    // Overtime: late departure, plus early arrival when the policy counts it
    let after_shift = (actual.end - scheduled.end).num_minutes().max(0);
    let before_shift = if policy.count_early_time_in_as_overtime {
        (scheduled.start - actual.start).num_minutes().max(0)
    } else {
        0
    };
    let candidate = after_shift + before_shift;
    let overtime_minutes = eligible_overtime_minutes(candidate, policy.overtime_threshold);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "overtime_eligibility".to_string(),
        rule_name: "Overtime Eligibility".to_string(),
        policy_ref: "overtime_threshold, count_early_time_in_as_overtime".to_string(),
        input: serde_json::json!({
            "minutes_after_shift": after_shift,
            "minutes_before_shift": before_shift,
            "candidate_minutes": candidate,
            "threshold_minutes": policy.overtime_threshold
        }),
        output: serde_json::json!({
            "overtime_minutes": overtime_minutes
        }),
        reasoning: if candidate > policy.overtime_threshold {
            format!(
                "{} min exceeds {} min threshold, floored to {} whole hour(s)",
                candidate,
                policy.overtime_threshold,
                overtime_minutes / 60
            )
        } else {
            format!(
                "{} min does not exceed {} min threshold, no overtime",
                candidate, policy.overtime_threshold
            )
        },
    });
    step_number += 1;

    // Night differential
    let nd_hours = night_differential_hours(
        actual,
        policy.night_differential_start_hour,
        policy.night_differential_end_hour,
    );

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "night_differential_overlap".to_string(),
        rule_name: "Night Differential Overlap".to_string(),
        policy_ref: "night_differential_start_hour, night_differential_end_hour".to_string(),
        input: serde_json::json!({
            "actual_in": actual.start.to_string(),
            "actual_out": actual.end.to_string(),
            "window_start_hour": policy.night_differential_start_hour,
            "window_end_hour": policy.night_differential_end_hour
        }),
        output: serde_json::json!({
            "night_differential_hours": nd_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} h worked inside the {:02}:00-{:02}:00 window",
            nd_hours.normalize(),
            policy.night_differential_start_hour,
            policy.night_differential_end_hour
        ),
    });

    TimeMetricsResult {
        metrics: TimeMetrics {
            late_minutes,
            undertime_minutes,
            overtime_minutes,
            hours_worked,
            night_differential_hours: nd_hours,
        },
        audit_steps,
    }
}

/// Calculates the time metrics for work on a rest day.
///
/// Rest days have no schedule to compare against, so lateness and undertime
/// do not apply. Overtime is measured against the standard working hours and
/// goes through the same threshold and whole-hour floor as a workday.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{TimeInterval, calculate_rest_day_metrics};
/// use attendance_pay_engine::models::AttendancePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let actual = TimeInterval::from_clock(date, "07:00", "18:00").unwrap();
/// let policy = AttendancePolicy { overtime_threshold: 30, ..AttendancePolicy::default() };
///
/// let result = calculate_rest_day_metrics(Some(&actual), Decimal::new(8, 0), &policy, 1);
/// assert_eq!(result.metrics.overtime_minutes, 180);
/// assert_eq!(result.metrics.late_minutes, 0);
/// ```
pub fn calculate_rest_day_metrics(
    actual: Option<&TimeInterval>,
    hours_of_work: Decimal,
    policy: &AttendancePolicy,
    step_number: u32,
) -> TimeMetricsResult {
    let worked_minutes = actual.map(|a| a.minutes()).unwrap_or(0);
    let standard_minutes = standard_minutes(hours_of_work);
    let candidate = (worked_minutes - standard_minutes).max(0);
    let overtime_minutes = eligible_overtime_minutes(candidate, policy.overtime_threshold);
    let hours_worked = round_to_whole_hours(worked_minutes);

    let audit_step = AuditStep {
        step_number,
        rule_id: "rest_day_overtime".to_string(),
        rule_name: "Rest Day Overtime".to_string(),
        policy_ref: "overtime_threshold".to_string(),
        input: serde_json::json!({
            "worked_minutes": worked_minutes,
            "standard_minutes": standard_minutes,
            "threshold_minutes": policy.overtime_threshold
        }),
        output: serde_json::json!({
            "overtime_minutes": overtime_minutes,
            "hours_worked": hours_worked.normalize().to_string()
        }),
        reasoning: format!(
            "{} min worked against {} standard min leaves {} overtime min",
            worked_minutes, standard_minutes, overtime_minutes
        ),
    };

    TimeMetricsResult {
        metrics: TimeMetrics {
            overtime_minutes,
            hours_worked,
            ..TimeMetrics::default()
        },
        audit_steps: vec![audit_step],
    }
}

fn standard_minutes(hours_of_work: Decimal) -> i64 {
    let hours = if hours_of_work > Decimal::ZERO {
        hours_of_work
    } else {
        DEFAULT_HOURS_OF_WORK
    };
    (hours * Decimal::from(60)).trunc().to_i64().unwrap_or(480)
}
