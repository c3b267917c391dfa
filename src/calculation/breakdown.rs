//! Payment breakdown formatting.
//!
//! Packages time and pay metrics into component lines plus the rates and
//! thresholds that produced them. Nothing here changes an amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayMetrics, TimeMetrics, hourly_rate, minutes_to_hours, round_hours, round_money};
use crate::models::{AttendancePolicy, DayType, non_negative};

/// A component of the day's pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayComponent {
    /// The day's base amount.
    BasePay,
    /// Eligible overtime.
    OvertimePay,
    /// Night-window premium.
    NightDifferentialPay,
    /// Worked-holiday premium.
    HolidayBonus,
    /// Paid leave.
    LeavePay,
    /// Lateness beyond grace.
    LateDeduction,
    /// Undertime beyond grace.
    UndertimeDeduction,
}

impl PayComponent {
    /// Returns true for components subtracted from gross pay.
    pub fn is_deduction(&self) -> bool {
        matches!(self, PayComponent::LateDeduction | PayComponent::UndertimeDeduction)
    }
}

impl std::fmt::Display for PayComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayComponent::BasePay => write!(f, "Base Pay"),
            PayComponent::OvertimePay => write!(f, "Overtime Pay"),
            PayComponent::NightDifferentialPay => write!(f, "Night Differential Pay"),
            PayComponent::HolidayBonus => write!(f, "Holiday Bonus"),
            PayComponent::LeavePay => write!(f, "Leave Pay"),
            PayComponent::LateDeduction => write!(f, "Late Deduction"),
            PayComponent::UndertimeDeduction => write!(f, "Undertime Deduction"),
        }
    }
}

/// One line of the breakdown: `quantity` units at `rate` for `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Which component this line is.
    pub component: PayComponent,
    /// Units charged or paid.
    pub quantity: Decimal,
    /// Unit name: `day`, `hour`, `minute` or `multiplier`.
    pub unit: String,
    /// Amount per unit.
    pub rate: Decimal,
    /// The line total.
    pub amount: Decimal,
}

/// The rates and thresholds used for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct BreakdownRates {
    pub daily_rate: Decimal,
    pub hours_of_work: Decimal,
    pub hourly_rate: Decimal,
    pub overtime_hourly_rate: Decimal,
    pub night_differential_hourly_rate: Decimal,
    pub late_grace_period: i64,
    pub late_deduction_per_minute: Decimal,
    pub undertime_grace_period: i64,
    pub undertime_deduction_per_minute: Decimal,
    pub overtime_threshold: i64,
    pub holiday_multiplier: Option<Decimal>,
}

/// Day totals; `net_pay = gross_pay - deductions + leave_pay`, never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct BreakdownTotals {
    pub gross_pay: Decimal,
    pub deductions: Decimal,
    pub leave_pay: Decimal,
    pub net_pay: Decimal,
}

/// A display and audit ready breakdown of one employee-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// The employee.
    pub employee_id: String,
    /// The day.
    pub date: NaiveDate,
    /// The day type recorded.
    pub day_type: DayType,
    /// Version of the engine that produced the breakdown.
    pub engine_version: String,
    /// Component lines; the base line is always first.
    pub lines: Vec<BreakdownLine>,
    /// Rates and thresholds used.
    pub rates: BreakdownRates,
    /// Totals, matching the compensation record.
    pub totals: BreakdownTotals,
}

impl PaymentBreakdown {
    /// Sum of earning lines (everything but deductions and leave pay).
    pub fn earnings(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|l| !l.component.is_deduction() && l.component != PayComponent::LeavePay)
            .map(|l| l.amount)
            .sum()
    }

    /// Finds the line for a component.
    pub fn line(&self, component: PayComponent) -> Option<&BreakdownLine> {
        self.lines.iter().find(|l| l.component == component)
    }
}

/// Everything the formatter reads.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownSource<'a> {
    /// The employee.
    pub employee_id: &'a str,
    /// The day.
    pub date: NaiveDate,
    /// The day type recorded.
    pub day_type: DayType,
    /// Time metrics for the day.
    pub metrics: &'a TimeMetrics,
    /// Pay metrics for the day.
    pub pay: &'a PayMetrics,
    /// The policy the metrics were computed under.
    pub policy: &'a AttendancePolicy,
    /// The employee's daily rate.
    pub daily_rate: Decimal,
    /// Standard hours for the employment type.
    pub hours_of_work: Decimal,
    /// Leave pay settled on the record.
    pub leave_pay: Decimal,
}

/// Builds the payment breakdown.
///
/// The base line is always present; every other line appears only when its
/// amount is non-zero.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{
///     BreakdownSource, PayComponent, TimeMetrics, calculate_pay_metrics, format_breakdown,
/// };
/// use attendance_pay_engine::models::{AttendancePolicy, DayType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = AttendancePolicy::default();
/// let metrics = TimeMetrics { overtime_minutes: 120, ..TimeMetrics::default() };
/// let daily_rate = Decimal::new(800, 0);
/// let hours = Decimal::new(8, 0);
/// let pay = calculate_pay_metrics(&metrics, &policy, daily_rate, hours, None, 1).pay;
///
/// let breakdown = format_breakdown(&BreakdownSource {
///     employee_id: "emp_001",
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     day_type: DayType::Regular,
///     metrics: &metrics,
///     pay: &pay,
///     policy: &policy,
///     daily_rate,
///     hours_of_work: hours,
///     leave_pay: Decimal::ZERO,
/// });
///
/// assert_eq!(breakdown.lines.len(), 2);
/// assert_eq!(breakdown.rates.overtime_hourly_rate, Decimal::new(12500, 2));
/// assert_eq!(breakdown.line(PayComponent::OvertimePay).unwrap().quantity, Decimal::new(2, 0));
/// ```
pub fn format_breakdown(source: &BreakdownSource<'_>) -> PaymentBreakdown {
    let policy = source.policy;
    let metrics = source.metrics;
    let pay = source.pay;

    let hourly = hourly_rate(source.daily_rate, source.hours_of_work);
    let rates = BreakdownRates {
        daily_rate: source.daily_rate,
        hours_of_work: source.hours_of_work,
        hourly_rate: round_money(hourly),
        overtime_hourly_rate: round_money(hourly * policy.overtime_hourly_multiplier),
        night_differential_hourly_rate: round_money(hourly * policy.night_differential_multiplier),
        late_grace_period: policy.late_grace_period,
        late_deduction_per_minute: policy.late_deduction_per_minute,
        undertime_grace_period: policy.undertime_grace_period,
        undertime_deduction_per_minute: policy.undertime_deduction_per_minute,
        overtime_threshold: policy.overtime_threshold,
        holiday_multiplier: pay.holiday_multiplier,
    };

    let mut lines = vec![BreakdownLine {
        component: PayComponent::BasePay,
        quantity: Decimal::ONE,
        unit: "day".to_string(),
        rate: pay.base_pay,
        amount: pay.base_pay,
    }];

    let optional = [
        (
            PayComponent::OvertimePay,
            round_hours(minutes_to_hours(metrics.overtime_minutes)),
            "hour",
            rates.overtime_hourly_rate,
            pay.overtime_pay,
        ),
        (
            PayComponent::NightDifferentialPay,
            metrics.night_differential_hours,
            "hour",
            rates.night_differential_hourly_rate,
            pay.night_differential_pay,
        ),
        (
            PayComponent::HolidayBonus,
            pay.holiday_multiplier.unwrap_or_default(),
            "multiplier",
            source.daily_rate,
            pay.holiday_bonus,
        ),
        (
            PayComponent::LeavePay,
            Decimal::ONE,
            "day",
            source.leave_pay,
            source.leave_pay,
        ),
        (
            PayComponent::LateDeduction,
            Decimal::from((metrics.late_minutes - policy.late_grace_period).max(0)),
            "minute",
            policy.late_deduction_per_minute,
            pay.late_deduction,
        ),
        (
            PayComponent::UndertimeDeduction,
            Decimal::from((metrics.undertime_minutes - policy.undertime_grace_period).max(0)),
            "minute",
            policy.undertime_deduction_per_minute,
            pay.undertime_deduction,
        ),
    ];

    lines.extend(
        optional
            .into_iter()
            .filter(|(_, _, _, _, amount)| !amount.is_zero())
            .map(|(component, quantity, unit, rate, amount)| BreakdownLine {
                component,
                quantity,
                unit: unit.to_string(),
                rate,
                amount,
            }),
    );

    let totals = BreakdownTotals {
        gross_pay: pay.gross_pay,
        deductions: pay.deductions,
        leave_pay: source.leave_pay,
        net_pay: non_negative(pay.gross_pay - pay.deductions + source.leave_pay),
    };

    PaymentBreakdown {
        employee_id: source.employee_id.to_string(),
        date: source.date,
        day_type: source.day_type,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        lines,
        rates,
        totals,
    }
}
