//! Daily compensation orchestration.
//!
//! Runs one employee-day through classification, normalization, time metrics,
//! pay metrics and the breakdown formatter against a single
//! [`PayrollSnapshot`], and assembles the persisted record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    BreakdownSource, DayBranch, NormalizedIntervals, PayMetrics, PaymentBreakdown, TimeInterval,
    TimeMetrics, calculate_pay_metrics, calculate_rest_day_metrics, calculate_rest_day_pay,
    calculate_time_metrics, classify_day, daily_rate_only_pay, format_breakdown, holiday_day_type,
    normalize_intervals, round_money, unpaid_day,
};
use super::time_metrics::round_to_whole_hours;
use crate::config::PayrollSnapshot;
use crate::models::{
    AttendancePolicy, AuditStep, AuditTrace, AuditWarning, CompensationRecord, DayType, Employee,
    HolidayRange, LeaveDay, RawAttendance,
};

/// The outcome of a daily calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompensation {
    /// The record to persist.
    pub record: CompensationRecord,
    /// True if the employee missed a scheduled workday.
    pub absent: bool,
    /// The payment breakdown; `None` when the stored record is under manual
    /// override and was returned as is.
    pub breakdown: Option<PaymentBreakdown>,
    /// Rules applied and data-quality warnings.
    pub audit_trace: AuditTrace,
}

/// Metrics, pay and audit output of one pay branch.
struct PricedDay {
    day_type: DayType,
    metrics: TimeMetrics,
    pay: PayMetrics,
    leave_pay: Decimal,
    absent: bool,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl PricedDay {
    fn fixed(day_type: DayType, pay: PayMetrics) -> Self {
        Self {
            day_type,
            metrics: TimeMetrics::default(),
            pay,
            leave_pay: Decimal::ZERO,
            absent: false,
            steps: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Computes the compensation record for one employee-day.
///
/// A prior record under manual override is returned unchanged. Otherwise the
/// record is computed fresh from `attendance` and `snapshot`; the prior
/// record's notes carry over, and its leave type is used when no leave day is
/// supplied.
///
/// Never fails: unresolved schedules and incomplete attendance fall back to
/// daily-rate pay with an audit warning.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::compute_daily_compensation;
/// use attendance_pay_engine::config::PayrollSnapshot;
/// use attendance_pay_engine::models::{
///     AttendancePolicy, EmploymentTypeDefinition, Employee, RawAttendance, ScheduleSpec,
///     WeeklySchedule,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut types = HashMap::new();
/// types.insert(
///     "regular".to_string(),
///     EmploymentTypeDefinition {
///         hours_of_work: Some(Decimal::new(8, 0)),
///         schedule: WeeklySchedule {
///             thursday: Some(ScheduleSpec::working("08:00", "17:00")),
///             ..WeeklySchedule::default()
///         },
///     },
/// );
/// let policy = AttendancePolicy { overtime_threshold: 30, ..AttendancePolicy::default() };
/// let snapshot = PayrollSnapshot::new(policy, types, Vec::new());
///
/// let employee = Employee::new("emp_001", "regular", Decimal::new(800, 0));
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(); // Thursday
/// let attendance = RawAttendance::new(date, "08:00", "19:00");
///
/// let result = compute_daily_compensation(&employee, &attendance, None, None, &snapshot);
/// assert_eq!(result.record.overtime_minutes, 120);
/// assert_eq!(result.record.gross_pay, Decimal::new(105000, 2));
/// assert_eq!(result.record.net_pay, Decimal::new(105000, 2));
/// ```
pub fn compute_daily_compensation(
    employee: &Employee,
    attendance: &RawAttendance,
    leave: Option<&LeaveDay>,
    prior: Option<&CompensationRecord>,
    snapshot: &PayrollSnapshot,
) -> DailyCompensation {
    let date = attendance.date;

    if let Some(frozen) = prior.filter(|p| p.manual_override) {
        debug!(
            employee_id = %employee.id,
            date = %date,
            "Record under manual override, keeping stored values"
        );
        return frozen_result(frozen);
    }

    let policy = &snapshot.policy;
    let daily_rate = employee.daily_rate;
    let hours_of_work = snapshot.hours_of_work(&employee.employment_type);
    let schedule = snapshot.schedule_for_date(&employee.employment_type, date);
    let holiday = snapshot.holiday_on(date);

    let leave = leave
        .filter(|l| l.date == date)
        .copied()
        .or_else(|| {
            prior
                .and_then(|p| p.leave_type)
                .map(|leave_type| LeaveDay { date, leave_type })
        });

    let branch = classify_day(attendance, schedule, holiday, leave.as_ref());
    let intervals = normalize_intervals(attendance, schedule);

    let mut trace = AuditTrace::default();
    trace.steps.push(AuditStep {
        step_number: 1,
        rule_id: "day_classification".to_string(),
        rule_name: "Day Classification".to_string(),
        policy_ref: "schedule, holidays, leave".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "employment_type": employee.employment_type,
            "time_in": attendance.time_in,
            "time_out": attendance.time_out,
            "schedule": schedule,
            "holiday": holiday.map(|h| h.name.as_str()),
            "leave_type": leave.map(|l| l.leave_type)
        }),
        output: serde_json::json!({
            "branch": branch.to_string()
        }),
        reasoning: format!("{} classified as {}", date, branch),
    });

    let context = DayContext {
        date,
        policy,
        daily_rate,
        hours_of_work,
        holiday,
        intervals: &intervals,
        next_step: trace.next_step_number(),
    };

    let priced = match branch {
        DayBranch::PaidHoliday => {
            let mut priced = PricedDay::fixed(
                holiday_day_type(holiday, DayType::Regular),
                daily_rate_only_pay(daily_rate, hours_of_work),
            );
            priced.steps.push(fixed_pay_step(
                context.next_step,
                "paid_holiday",
                "Paid Holiday",
                &priced.pay,
                "Unworked paid holiday pays the daily rate with no bonus",
            ));
            priced
        }
        DayBranch::Leave(leave_type) => {
            let day_type = holiday_day_type(holiday, DayType::Regular);
            let mut priced = PricedDay::fixed(day_type, unpaid_day());
            if leave_type.is_paid() {
                priced.leave_pay = round_money(daily_rate);
            }
            priced.steps.push(AuditStep {
                step_number: context.next_step,
                rule_id: "leave_pay".to_string(),
                rule_name: "Leave Pay".to_string(),
                policy_ref: "leave".to_string(),
                input: serde_json::json!({
                    "leave_type": leave_type,
                    "daily_rate": daily_rate.to_string()
                }),
                output: serde_json::json!({
                    "leave_pay": priced.leave_pay.to_string()
                }),
                reasoning: if leave_type.is_paid() {
                    format!("{} leave pays the daily rate as leave pay", leave_type)
                } else {
                    "Unpaid leave has no pay impact".to_string()
                },
            });
            priced
        }
        DayBranch::Absent => {
            let day_type = holiday_day_type(holiday, DayType::Regular);
            let mut priced = PricedDay::fixed(day_type, unpaid_day());
            priced.absent = true;
            priced.steps.push(fixed_pay_step(
                context.next_step,
                "absence",
                "Absence",
                &priced.pay,
                "No attendance on a scheduled workday",
            ));
            priced
        }
        DayBranch::RestDay => price_rest_day(&context),
        DayBranch::MissingSchedule => price_missing_schedule(&context),
        DayBranch::IncompleteAttendance => price_incomplete_attendance(&context),
        DayBranch::Workday => match (intervals.actual, intervals.scheduled) {
            (Some(actual), Some(scheduled)) => price_workday(&context, &actual, &scheduled),
            (_, None) => price_missing_schedule(&context),
            (None, Some(_)) => price_incomplete_attendance(&context),
        },
    };

    trace.steps.extend(priced.steps);
    trace.warnings.extend(priced.warnings);

    let mut record = CompensationRecord::new(&employee.id, date);
    record.day_type = priced.day_type;
    record.hours_worked = priced.metrics.hours_worked;
    record.late_minutes = priced.metrics.late_minutes;
    record.undertime_minutes = priced.metrics.undertime_minutes;
    record.overtime_minutes = priced.metrics.overtime_minutes;
    record.night_differential_hours = priced.metrics.night_differential_hours;
    record.gross_pay = priced.pay.gross_pay;
    record.late_deduction = priced.pay.late_deduction;
    record.undertime_deduction = priced.pay.undertime_deduction;
    record.overtime_pay = priced.pay.overtime_pay;
    record.night_differential_pay = priced.pay.night_differential_pay;
    record.holiday_bonus = priced.pay.holiday_bonus;
    record.leave_pay = priced.leave_pay;
    record.leave_type = leave.map(|l| l.leave_type);
    record.absent = priced.absent;
    record.notes = prior.map(|p| p.notes.clone()).unwrap_or_default();
    record.settle_deductions();
    record.settle_net_pay();

    let breakdown = format_breakdown(&BreakdownSource {
        employee_id: &employee.id,
        date,
        day_type: record.day_type,
        metrics: &priced.metrics,
        pay: &priced.pay,
        policy,
        daily_rate,
        hours_of_work,
        leave_pay: record.leave_pay,
    });

    debug!(
        employee_id = %employee.id,
        date = %date,
        branch = %branch,
        day_type = %record.day_type,
        gross_pay = %record.gross_pay,
        net_pay = %record.net_pay,
        warnings = trace.warnings.len(),
        "Computed daily compensation"
    );

    DailyCompensation {
        absent: record.absent,
        record,
        breakdown: Some(breakdown),
        audit_trace: trace,
    }
}

/// Inputs shared by the pricing branches.
struct DayContext<'a> {
    date: NaiveDate,
    policy: &'a AttendancePolicy,
    daily_rate: Decimal,
    hours_of_work: Decimal,
    holiday: Option<&'a HolidayRange>,
    intervals: &'a NormalizedIntervals,
    next_step: u32,
}

fn price_workday(
    context: &DayContext<'_>,
    actual: &TimeInterval,
    scheduled: &TimeInterval,
) -> PricedDay {
    let time = calculate_time_metrics(Some(actual), scheduled, context.policy, context.next_step);
    let next_step = context.next_step + time.audit_steps.len() as u32;
    let pay = calculate_pay_metrics(
        &time.metrics,
        context.policy,
        context.daily_rate,
        context.hours_of_work,
        context.holiday,
        next_step,
    );

    let mut steps = time.audit_steps;
    steps.extend(pay.audit_steps);

    PricedDay {
        day_type: holiday_day_type(context.holiday, DayType::Regular),
        metrics: time.metrics,
        pay: pay.pay,
        leave_pay: Decimal::ZERO,
        absent: false,
        steps,
        warnings: pay.warnings,
    }
}

fn price_rest_day(context: &DayContext<'_>) -> PricedDay {
    let time = calculate_rest_day_metrics(
        context.intervals.actual.as_ref(),
        context.hours_of_work,
        context.policy,
        context.next_step,
    );
    let next_step = context.next_step + time.audit_steps.len() as u32;
    let pay = calculate_rest_day_pay(
        &time.metrics,
        context.policy,
        context.daily_rate,
        context.hours_of_work,
        context.holiday,
        next_step,
    );

    let mut steps = time.audit_steps;
    steps.extend(pay.audit_steps);

    PricedDay {
        day_type: holiday_day_type(context.holiday, DayType::RestDay),
        metrics: time.metrics,
        pay: pay.pay,
        leave_pay: Decimal::ZERO,
        absent: false,
        steps,
        warnings: pay.warnings,
    }
}

fn price_missing_schedule(context: &DayContext<'_>) -> PricedDay {
    let worked_minutes = context.intervals.actual.map(|a| a.minutes()).unwrap_or(0);
    let mut priced = PricedDay::fixed(
        holiday_day_type(context.holiday, DayType::Regular),
        daily_rate_only_pay(context.daily_rate, context.hours_of_work),
    );
    priced.metrics.hours_worked = round_to_whole_hours(worked_minutes);
    priced.steps.push(fixed_pay_step(
        context.next_step,
        "missing_schedule_fallback",
        "Missing Schedule Fallback",
        &priced.pay,
        "No schedule resolved for the date; paying the daily rate only",
    ));
    priced.warnings.push(AuditWarning::new(
        "missing_schedule",
        format!(
            "No schedule resolved for {}; paid the daily rate with hours from the raw clock",
            context.date
        ),
        "medium",
    ));
    priced
}

fn price_incomplete_attendance(context: &DayContext<'_>) -> PricedDay {
    let mut priced = PricedDay::fixed(
        holiday_day_type(context.holiday, DayType::Regular),
        daily_rate_only_pay(context.daily_rate, context.hours_of_work),
    );
    priced.steps.push(fixed_pay_step(
        context.next_step,
        "incomplete_attendance_fallback",
        "Incomplete Attendance Fallback",
        &priced.pay,
        "Only one usable clock time; paying the daily rate with zero metrics",
    ));
    priced.warnings.push(AuditWarning::new(
        "incomplete_attendance",
        format!("Time in or time out missing for {}", context.date),
        "medium",
    ));
    priced
}

fn fixed_pay_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    pay: &PayMetrics,
    reasoning: &str,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        policy_ref: "daily_rate".to_string(),
        input: serde_json::json!({
            "base_pay": pay.base_pay.to_string()
        }),
        output: serde_json::json!({
            "gross_pay": pay.gross_pay.to_string(),
            "net_pay": pay.net_pay.to_string()
        }),
        reasoning: reasoning.to_string(),
    }
}

fn frozen_result(record: &CompensationRecord) -> DailyCompensation {
    let step = AuditStep {
        step_number: 1,
        rule_id: "manual_override".to_string(),
        rule_name: "Manual Override".to_string(),
        policy_ref: "manual_override".to_string(),
        input: serde_json::json!({ "manual_override": true }),
        output: serde_json::json!({
            "gross_pay": record.gross_pay.to_string(),
            "net_pay": record.net_pay.to_string()
        }),
        reasoning: "Record is under manual override; stored values kept".to_string(),
    };

    DailyCompensation {
        record: record.clone(),
        absent: record.absent,
        breakdown: None,
        audit_trace: AuditTrace {
            steps: vec![step],
            warnings: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EmploymentTypeDefinition, HolidayType, LeaveType, ScheduleSpec, WeeklySchedule,
    };
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn snapshot_with(holidays: Vec<HolidayRange>) -> PayrollSnapshot {
        let day = || Some(ScheduleSpec::working("08:00", "17:00"));
        let mut types = HashMap::new();
        types.insert(
            "regular".to_string(),
            EmploymentTypeDefinition {
                hours_of_work: Some(dec("8")),
                schedule: WeeklySchedule {
                    monday: day(),
                    tuesday: day(),
                    wednesday: day(),
                    thursday: day(),
                    friday: day(),
                    saturday: Some(ScheduleSpec::off()),
                    sunday: None,
                },
            },
        );
        let policy = AttendancePolicy {
            late_grace_period: 5,
            late_deduction_per_minute: dec("2"),
            undertime_grace_period: 5,
            undertime_deduction_per_minute: dec("2"),
            overtime_threshold: 30,
            ..AttendancePolicy::default()
        };
        PayrollSnapshot::new(policy, types, holidays)
    }

    fn snapshot() -> PayrollSnapshot {
        snapshot_with(Vec::new())
    }

    fn employee() -> Employee {
        Employee::new("emp_001", "regular", dec("800"))
    }

    fn holiday(date: &str, holiday_type: HolidayType, multiplier: &str) -> HolidayRange {
        HolidayRange {
            name: "Test Holiday".to_string(),
            start_date: make_date(date),
            end_date: make_date(date),
            holiday_type,
            multiplier: dec(multiplier),
            paid: true,
        }
    }

    fn run(attendance: RawAttendance) -> DailyCompensation {
        compute_daily_compensation(&employee(), &attendance, None, None, &snapshot())
    }

    #[test]
    fn test_overtime_day() {
        let result = run(RawAttendance::new(make_date("2026-01-15"), "08:00", "19:00"));
        let record = &result.record;
        assert_eq!(record.day_type, DayType::Regular);
        assert_eq!(record.overtime_minutes, 120);
        assert_eq!(record.overtime_pay, dec("250.00"));
        assert_eq!(record.gross_pay, dec("1050.00"));
        assert_eq!(record.deductions, dec("0"));
        assert_eq!(record.net_pay, dec("1050.00"));
        assert!(!result.absent);
    }

    #[test]
    fn test_overtime_below_threshold() {
        let result = run(RawAttendance::new(make_date("2026-01-15"), "08:00", "17:25"));
        assert_eq!(result.record.overtime_minutes, 0);
        assert_eq!(result.record.overtime_pay, dec("0"));
        assert_eq!(result.record.gross_pay, dec("800"));
    }

    #[test]
    fn test_late_day() {
        let result = run(RawAttendance::new(make_date("2026-01-15"), "08:20", "17:00"));
        assert_eq!(result.record.late_minutes, 20);
        assert_eq!(result.record.late_deduction, dec("30.00"));
        assert_eq!(result.record.net_pay, dec("770.00"));
    }

    #[test]
    fn test_absent_on_workday() {
        let result = run(RawAttendance::absent(make_date("2026-01-15")));
        assert!(result.absent);
        assert!(result.record.absent);
        assert_eq!(result.record.gross_pay, dec("0"));
        assert_eq!(result.record.net_pay, dec("0"));
    }

    #[test]
    fn test_unworked_paid_holiday() {
        let snapshot = snapshot_with(vec![holiday("2026-01-15", HolidayType::Regular, "1.0")]);
        let attendance = RawAttendance::absent(make_date("2026-01-15"));
        let result = compute_daily_compensation(&employee(), &attendance, None, None, &snapshot);

        assert_eq!(result.record.day_type, DayType::Holiday);
        assert_eq!(result.record.gross_pay, dec("800"));
        assert_eq!(result.record.net_pay, dec("800"));
        assert_eq!(result.record.holiday_bonus, dec("0"));
        assert!(!result.absent);
    }

    #[test]
    fn test_worked_special_holiday() {
        let snapshot = snapshot_with(vec![holiday("2026-01-15", HolidayType::Special, "0.3")]);
        let attendance = RawAttendance::new(make_date("2026-01-15"), "08:00", "17:00");
        let result = compute_daily_compensation(&employee(), &attendance, None, None, &snapshot);

        assert_eq!(result.record.day_type, DayType::Special);
        assert_eq!(result.record.holiday_bonus, dec("240.00"));
        assert_eq!(result.record.gross_pay, dec("1040.00"));
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_unworked_rest_day() {
        let result = run(RawAttendance::absent(make_date("2026-01-17")));
        assert_eq!(result.record.day_type, DayType::RestDay);
        assert_eq!(result.record.gross_pay, dec("800"));
        assert_eq!(result.record.net_pay, dec("800"));
        assert!(!result.absent);
    }

    #[test]
    fn test_worked_rest_day_overtime() {
        let result = run(RawAttendance::new(make_date("2026-01-17"), "07:00", "18:00"));
        assert_eq!(result.record.day_type, DayType::RestDay);
        assert_eq!(result.record.overtime_minutes, 180);
        assert_eq!(result.record.overtime_pay, dec("375.00"));
        assert_eq!(result.record.gross_pay, dec("1175.00"));
        assert_eq!(result.record.late_deduction, dec("0"));
    }

    #[test]
    fn test_missing_schedule_falls_back() {
        // Sunday is not defined for the employment type.
        let result = run(RawAttendance::new(make_date("2026-01-18"), "09:00", "15:40"));
        assert_eq!(result.record.gross_pay, dec("800"));
        assert_eq!(result.record.hours_worked, dec("7"));
        assert!(result.audit_trace.has_warning("missing_schedule"));
    }

    #[test]
    fn test_unknown_employment_type_falls_back() {
        let employee = Employee::new("emp_009", "contractor", dec("800"));
        let attendance = RawAttendance::new(make_date("2026-01-15"), "08:00", "17:00");
        let result = compute_daily_compensation(&employee, &attendance, None, None, &snapshot());
        assert!(result.audit_trace.has_warning("missing_schedule"));
        assert_eq!(result.record.net_pay, dec("800"));
    }

    #[test]
    fn test_incomplete_attendance() {
        let attendance = RawAttendance {
            date: make_date("2026-01-15"),
            time_in: Some("08:00".to_string()),
            time_out: None,
        };
        let result = run(attendance);
        assert!(result.audit_trace.has_warning("incomplete_attendance"));
        assert_eq!(result.record.gross_pay, dec("800"));
        assert_eq!(result.record.hours_worked, dec("0"));
        assert!(!result.absent);
    }

    #[test]
    fn test_paid_leave() {
        let date = make_date("2026-01-15");
        let leave = LeaveDay {
            date,
            leave_type: LeaveType::Vacation,
        };
        let result = compute_daily_compensation(
            &employee(),
            &RawAttendance::absent(date),
            Some(&leave),
            None,
            &snapshot(),
        );
        assert_eq!(result.record.leave_pay, dec("800"));
        assert_eq!(result.record.gross_pay, dec("0"));
        assert_eq!(result.record.net_pay, dec("800"));
        assert_eq!(result.record.leave_type, Some(LeaveType::Vacation));
        assert!(!result.absent);
    }

    #[test]
    fn test_unpaid_leave_is_not_absence() {
        let date = make_date("2026-01-15");
        let leave = LeaveDay {
            date,
            leave_type: LeaveType::Unpaid,
        };
        let result = compute_daily_compensation(
            &employee(),
            &RawAttendance::absent(date),
            Some(&leave),
            None,
            &snapshot(),
        );
        assert_eq!(result.record.net_pay, dec("0"));
        assert!(!result.absent);
    }

    #[test]
    fn test_prior_leave_type_and_notes_carry_over() {
        let date = make_date("2026-01-15");
        let mut prior = CompensationRecord::new("emp_001", date);
        prior.leave_type = Some(LeaveType::Sick);
        prior.notes = "filed late".to_string();

        let result = compute_daily_compensation(
            &employee(),
            &RawAttendance::absent(date),
            None,
            Some(&prior),
            &snapshot(),
        );
        assert_eq!(result.record.leave_type, Some(LeaveType::Sick));
        assert_eq!(result.record.leave_pay, dec("800"));
        assert_eq!(result.record.notes, "filed late");
    }

    #[test]
    fn test_manual_override_freezes_record() {
        let date = make_date("2026-01-15");
        let mut prior = CompensationRecord::new("emp_001", date);
        prior.gross_pay = dec("123.45");
        prior.net_pay = dec("123.45");
        prior.manual_override = true;

        let attendance = RawAttendance::new(date, "08:00", "19:00");
        let result =
            compute_daily_compensation(&employee(), &attendance, None, Some(&prior), &snapshot());

        assert_eq!(result.record, prior);
        assert!(result.breakdown.is_none());
        assert_eq!(result.audit_trace.steps[0].rule_id, "manual_override");
    }

    #[test]
    fn test_override_off_recomputes() {
        let date = make_date("2026-01-15");
        let mut prior = CompensationRecord::new("emp_001", date);
        prior.gross_pay = dec("123.45");

        let attendance = RawAttendance::new(date, "08:00", "19:00");
        let result =
            compute_daily_compensation(&employee(), &attendance, None, Some(&prior), &snapshot());
        assert_eq!(result.record.gross_pay, dec("1050.00"));
    }

    #[test]
    fn test_audit_steps_numbered_in_order() {
        let result = run(RawAttendance::new(make_date("2026-01-15"), "08:00", "19:00"));
        let numbers: Vec<u32> = result.audit_trace.steps.iter().map(|s| s.step_number).collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        assert_eq!(numbers, expected);
        assert_eq!(result.audit_trace.steps[0].rule_id, "day_classification");
    }

    #[test]
    fn test_breakdown_matches_record() {
        let result = run(RawAttendance::new(make_date("2026-01-15"), "08:20", "19:00"));
        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.totals.gross_pay, result.record.gross_pay);
        assert_eq!(breakdown.totals.deductions, result.record.deductions);
        assert_eq!(breakdown.totals.net_pay, result.record.net_pay);
    }

    #[test]
    fn test_idempotent() {
        let attendance = RawAttendance::new(make_date("2026-01-15"), "21:30", "07:15");
        let first = run(attendance.clone());
        let second = run(attendance);
        assert_eq!(first, second);
    }
}
