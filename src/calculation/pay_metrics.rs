//! Pay metrics calculation.
//!
//! Converts [`TimeMetrics`] into monetary amounts using the daily rate, the
//! attendance policy multipliers and the holiday lookup for the date.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{TimeMetrics, minutes_to_hours, round_money};
use crate::models::{
    AttendancePolicy, AuditStep, AuditWarning, DEFAULT_HOURS_OF_WORK, HolidayMultiplierSource,
    HolidayRange, non_negative,
};

/// Monetary amounts for one employee-day.
///
/// `gross_pay` is always `base_pay + overtime_pay + night_differential_pay +
/// holiday_bonus`, and `net_pay` is `gross_pay - deductions` clamped at zero.
/// Leave pay is settled on the record, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayMetrics {
    /// Daily rate divided by the standard hours of work.
    pub hourly_rate: Decimal,
    /// The day's base amount: the daily rate, or the holiday day rate on a rest day.
    pub base_pay: Decimal,
    /// Deduction for lateness beyond the grace period.
    pub late_deduction: Decimal,
    /// Deduction for undertime beyond the grace period.
    pub undertime_deduction: Decimal,
    /// Pay for eligible overtime.
    pub overtime_pay: Decimal,
    /// Pay for hours inside the night window.
    pub night_differential_pay: Decimal,
    /// Bonus for working a holiday.
    pub holiday_bonus: Decimal,
    /// The holiday multiplier applied, if the date is a holiday.
    pub holiday_multiplier: Option<Decimal>,
    /// Base pay plus every premium.
    pub gross_pay: Decimal,
    /// Late plus undertime deductions.
    pub deductions: Decimal,
    /// Gross pay less deductions, never negative.
    pub net_pay: Decimal,
}

impl PayMetrics {
    fn settle(&mut self) {
        self.deductions = self.late_deduction + self.undertime_deduction;
        self.gross_pay =
            self.base_pay + self.overtime_pay + self.night_differential_pay + self.holiday_bonus;
        self.net_pay = non_negative(self.gross_pay - self.deductions);
    }
}

/// The result of a pay metrics calculation, including audit information.
#[derive(Debug, Clone)]
pub struct PayMetricsResult {
    /// The calculated amounts.
    pub pay: PayMetrics,
    /// The audit steps recording the calculation.
    pub audit_steps: Vec<AuditStep>,
    /// Data-quality warnings raised along the way.
    pub warnings: Vec<AuditWarning>,
}

/// A holiday multiplier together with any disagreement between its sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHolidayMultiplier {
    /// The multiplier to apply.
    pub multiplier: Decimal,
    /// Set when the holiday range and the policy disagree.
    pub warning: Option<AuditWarning>,
}

/// Computes the hourly rate, treating non-positive hours of work as 8.
///
/// # Examples
///
/// ```
/// use attendance_pay_engine::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hourly_rate(Decimal::new(800, 0), Decimal::new(8, 0)), Decimal::new(100, 0));
/// assert_eq!(hourly_rate(Decimal::new(800, 0), Decimal::ZERO), Decimal::new(100, 0));
/// ```
pub fn hourly_rate(daily_rate: Decimal, hours_of_work: Decimal) -> Decimal {
    let hours = if hours_of_work > Decimal::ZERO {
        hours_of_work
    } else {
        DEFAULT_HOURS_OF_WORK
    };
    daily_rate / hours
}

/// Picks the holiday multiplier according to the policy's configured source.
///
/// When the holiday range's own multiplier differs from the policy's
/// multiplier for that holiday type, a `holiday_multiplier_mismatch` warning
/// is attached; the configured source still wins.
pub fn resolve_holiday_multiplier(
    holiday: &HolidayRange,
    policy: &AttendancePolicy,
) -> ResolvedHolidayMultiplier {
    let from_range = holiday.multiplier;
    let from_policy = policy.holiday_multiplier(holiday.holiday_type);

    let multiplier = match policy.holiday_multiplier_source {
        HolidayMultiplierSource::HolidayRange => from_range,
        HolidayMultiplierSource::Policy => from_policy,
    };

    let warning = (from_range != from_policy).then(|| {
        AuditWarning::new(
            "holiday_multiplier_mismatch",
            format!(
                "Holiday '{}' multiplier {} differs from policy multiplier {}; using {}",
                holiday.name,
                from_range.normalize(),
                from_policy.normalize(),
                multiplier.normalize()
            ),
            "medium",
        )
    });

    ResolvedHolidayMultiplier {
        multiplier,
        warning,
    }
}

/// Chargeable minutes times the per-minute rate; the grace period is inclusive.
pub(crate) fn grace_deduction(minutes: i64, grace_period: i64, per_minute: Decimal) -> Decimal {
    let chargeable = (minutes - grace_period).max(0);
    round_money(Decimal::from(chargeable).saturating_mul(per_minute))
}

pub(crate) fn overtime_pay(
    overtime_minutes: i64,
    hourly_rate: Decimal,
    multiplier: Decimal,
) -> Decimal {
    round_money(
        minutes_to_hours(overtime_minutes.max(0))
            .saturating_mul(hourly_rate)
            .saturating_mul(multiplier),
    )
}

pub(crate) fn night_differential_pay(
    hours: Decimal,
    hourly_rate: Decimal,
    multiplier: Decimal,
) -> Decimal {
    round_money(
        non_negative(hours)
            .saturating_mul(hourly_rate)
            .saturating_mul(multiplier),
    )
}

/// Calculates pay for a scheduled workday.
///
/// # Arguments
///
/// * `metrics` - Time metrics for the day
/// * `policy` - The attendance policy in force
/// * `daily_rate` - The employee's daily rate
/// * `hours_of_work` - Standard hours for the employment type
/// * `holiday` - The holiday range covering the date, if any
/// * `start_step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{TimeMetrics, calculate_pay_metrics};
/// use attendance_pay_engine::models::AttendancePolicy;
/// use rust_decimal::Decimal;
///
/// let metrics = TimeMetrics {
///     overtime_minutes: 120,
///     hours_worked: Decimal::new(11, 0),
///     ..TimeMetrics::default()
/// };
/// let policy = AttendancePolicy::default(); // overtime multiplier 1.25
///
/// let daily_rate = Decimal::new(800, 0);
/// let result = calculate_pay_metrics(&metrics, &policy, daily_rate, Decimal::new(8, 0), None, 1);
/// assert_eq!(result.pay.overtime_pay, Decimal::new(25000, 2));
/// assert_eq!(result.pay.gross_pay, Decimal::new(105000, 2));
/// assert_eq!(result.pay.net_pay, Decimal::new(105000, 2));
/// ```
pub fn calculate_pay_metrics(
    metrics: &TimeMetrics,
    policy: &AttendancePolicy,
    daily_rate: Decimal,
    hours_of_work: Decimal,
    holiday: Option<&HolidayRange>,
    start_step_number: u32,
) -> PayMetricsResult {
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number = start_step_number;

    let hourly = hourly_rate(daily_rate, hours_of_work);
    let mut pay = PayMetrics {
        hourly_rate: hourly,
        base_pay: round_money(daily_rate),
        ..PayMetrics::default()
    };

    // Deductions
    pay.late_deduction = grace_deduction(
        metrics.late_minutes,
        policy.late_grace_period,
        policy.late_deduction_per_minute,
    );
    pay.undertime_deduction = grace_deduction(
        metrics.undertime_minutes,
        policy.undertime_grace_period,
        policy.undertime_deduction_per_minute,
    );

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "late_undertime_deduction".to_string(),
        rule_name: "Late and Undertime Deduction".to_string(),
        policy_ref: "late_grace_period, undertime_grace_period".to_string(),
        input: serde_json::json!({
            "late_minutes": metrics.late_minutes,
            "late_grace_period": policy.late_grace_period,
            "late_deduction_per_minute": policy.late_deduction_per_minute.to_string(),
            "undertime_minutes": metrics.undertime_minutes,
            "undertime_grace_period": policy.undertime_grace_period,
            "undertime_deduction_per_minute": policy.undertime_deduction_per_minute.to_string()
        }),
        output: serde_json::json!({
            "late_deduction": pay.late_deduction.to_string(),
            "undertime_deduction": pay.undertime_deduction.to_string()
        }),
        reasoning: format!(
            "Late: max(0, {} - {}) x {} = {}; undertime: max(0, {} - {}) x {} = {}",
            metrics.late_minutes,
            policy.late_grace_period,
            policy.late_deduction_per_minute,
            pay.late_deduction,
            metrics.undertime_minutes,
            policy.undertime_grace_period,
            policy.undertime_deduction_per_minute,
            pay.undertime_deduction
        ),
    });
    step_number += 1;

    // Overtime and night differential
    pay.overtime_pay = overtime_pay(
        metrics.overtime_minutes,
        hourly,
        policy.overtime_hourly_multiplier,
    );
    pay.night_differential_pay = night_differential_pay(
        metrics.night_differential_hours,
        hourly,
        policy.night_differential_multiplier,
    );

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "premium_pay".to_string(),
        rule_name: "Overtime and Night Differential Pay".to_string(),
        policy_ref: "overtime_hourly_multiplier, night_differential_multiplier".to_string(),
        input: serde_json::json!({
            "daily_rate": daily_rate.to_string(),
            "hours_of_work": hours_of_work.to_string(),
            "overtime_minutes": metrics.overtime_minutes,
            "night_differential_hours": metrics.night_differential_hours.to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": round_money(hourly).to_string(),
            "overtime_pay": pay.overtime_pay.to_string(),
            "night_differential_pay": pay.night_differential_pay.to_string()
        }),
        reasoning: format!(
            "Overtime: {} h x {} x {} = {}; night differential: {} h x {} x {} = {}",
            minutes_to_hours(metrics.overtime_minutes).normalize(),
            round_money(hourly),
            policy.overtime_hourly_multiplier,
            pay.overtime_pay,
            metrics.night_differential_hours.normalize(),
            round_money(hourly),
            policy.night_differential_multiplier,
            pay.night_differential_pay
        ),
    });
    step_number += 1;

    // Holiday bonus
    if let Some(holiday) = holiday {
        let resolved = resolve_holiday_multiplier(holiday, policy);
        pay.holiday_multiplier = Some(resolved.multiplier);
        pay.holiday_bonus = round_money(daily_rate * resolved.multiplier);
        warnings.extend(resolved.warning);

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "holiday_bonus".to_string(),
            rule_name: "Holiday Bonus".to_string(),
            policy_ref: "holiday_multiplier_source".to_string(),
            input: serde_json::json!({
                "holiday": holiday.name,
                "holiday_type": holiday.holiday_type,
                "daily_rate": daily_rate.to_string(),
                "multiplier": resolved.multiplier.to_string()
            }),
            output: serde_json::json!({
                "holiday_bonus": pay.holiday_bonus.to_string()
            }),
            reasoning: format!(
                "Worked holiday '{}': {} x {} = {}",
                holiday.name, daily_rate, resolved.multiplier, pay.holiday_bonus
            ),
        });
        step_number += 1;
    }

    pay.settle();

    audit_steps.push(pay_totals_step(step_number, &pay));

    PayMetricsResult {
        pay,
        audit_steps,
        warnings,
    }
}

/// Calculates pay for work on a rest day.
///
/// The day pays `daily_rate`, or `daily_rate x holiday multiplier` when the
/// rest day is also a holiday, plus overtime beyond the standard hours. No
/// late or undertime deductions and no separate holiday bonus apply.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{TimeMetrics, calculate_rest_day_pay};
/// use attendance_pay_engine::models::AttendancePolicy;
/// use rust_decimal::Decimal;
///
/// let metrics = TimeMetrics::default();
/// let result = calculate_rest_day_pay(
///     &metrics, &AttendancePolicy::default(), Decimal::new(800, 0), Decimal::new(8, 0), None, 1,
/// );
/// assert_eq!(result.pay.gross_pay, Decimal::new(80000, 2));
/// ```
pub fn calculate_rest_day_pay(
    metrics: &TimeMetrics,
    policy: &AttendancePolicy,
    daily_rate: Decimal,
    hours_of_work: Decimal,
    holiday: Option<&HolidayRange>,
    step_number: u32,
) -> PayMetricsResult {
    let mut warnings = Vec::new();
    let hourly = hourly_rate(daily_rate, hours_of_work);

    let mut pay = PayMetrics {
        hourly_rate: hourly,
        ..PayMetrics::default()
    };

    match holiday {
        Some(holiday) => {
            let resolved = resolve_holiday_multiplier(holiday, policy);
            pay.holiday_multiplier = Some(resolved.multiplier);
            pay.base_pay = round_money(daily_rate * resolved.multiplier);
            warnings.extend(resolved.warning);
        }
        None => pay.base_pay = round_money(daily_rate),
    }

    pay.overtime_pay = overtime_pay(
        metrics.overtime_minutes,
        hourly,
        policy.overtime_hourly_multiplier,
    );
    pay.settle();

    let reasoning = match (holiday, pay.holiday_multiplier) {
        (Some(holiday), Some(multiplier)) => format!(
            "Rest day on holiday '{}': {} x {} = {}, plus {} overtime",
            holiday.name, daily_rate, multiplier, pay.base_pay, pay.overtime_pay
        ),
        _ => format!(
            "Rest day: daily rate {} plus {} overtime",
            pay.base_pay, pay.overtime_pay
        ),
    };

    let audit_steps = vec![
        AuditStep {
            step_number,
            rule_id: "rest_day_pay".to_string(),
            rule_name: "Rest Day Pay".to_string(),
            policy_ref: "overtime_hourly_multiplier, holiday_multiplier_source".to_string(),
            input: serde_json::json!({
                "daily_rate": daily_rate.to_string(),
                "holiday_multiplier": pay.holiday_multiplier.map(|m| m.to_string()),
                "overtime_minutes": metrics.overtime_minutes
            }),
            output: serde_json::json!({
                "base_pay": pay.base_pay.to_string(),
                "overtime_pay": pay.overtime_pay.to_string()
            }),
            reasoning,
        },
        pay_totals_step(step_number + 1, &pay),
    ];

    PayMetricsResult {
        pay,
        audit_steps,
        warnings,
    }
}

/// Pay for a day settled at the daily rate alone.
///
/// Used for an unworked paid holiday and for the recovery paths (missing
/// schedule, incomplete attendance).
pub fn daily_rate_only_pay(daily_rate: Decimal, hours_of_work: Decimal) -> PayMetrics {
    let mut pay = PayMetrics {
        hourly_rate: hourly_rate(daily_rate, hours_of_work),
        base_pay: round_money(daily_rate),
        ..PayMetrics::default()
    };
    pay.settle();
    pay
}

/// Pay for a day with no pay impact: absence, leave, or an unpaid day.
pub fn unpaid_day() -> PayMetrics {
    PayMetrics::default()
}

fn pay_totals_step(step_number: u32, pay: &PayMetrics) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "pay_totals".to_string(),
        rule_name: "Pay Totals".to_string(),
        policy_ref: "gross = base + overtime + night differential + holiday bonus".to_string(),
        input: serde_json::json!({
            "base_pay": pay.base_pay.to_string(),
            "overtime_pay": pay.overtime_pay.to_string(),
            "night_differential_pay": pay.night_differential_pay.to_string(),
            "holiday_bonus": pay.holiday_bonus.to_string(),
            "late_deduction": pay.late_deduction.to_string(),
            "undertime_deduction": pay.undertime_deduction.to_string()
        }),
        output: serde_json::json!({
            "gross_pay": pay.gross_pay.to_string(),
            "deductions": pay.deductions.to_string(),
            "net_pay": pay.net_pay.to_string()
        }),
        reasoning: format!(
            "Gross {} less deductions {} = net {}",
            pay.gross_pay, pay.deductions, pay.net_pay
        ),
    }
}
