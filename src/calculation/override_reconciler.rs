//! Manual override reconciliation.
//!
//! A payroll officer can edit or clear a single field on a stored
//! [`CompensationRecord`]. Each edit recomputes exactly the fields that depend
//! on it and nothing else:
//!
//! | Edited field               | Recomputed                               |
//! |----------------------------|------------------------------------------|
//! | `overtime_minutes`         | overtime pay, gross, net                 |
//! | `night_differential_hours` | night differential pay, gross, net       |
//! | `late_minutes`             | late deduction, deductions, net          |
//! | `undertime_minutes`        | undertime deduction, deductions, net     |
//! | `overtime_pay`, `night_differential_pay`, `holiday_bonus` | gross, net |
//! | `late_deduction`, `undertime_deduction` | deductions, net             |
//! | `leave_pay`, `gross_pay`   | net                                      |
//! | `net_pay`                  | gross (deductions held fixed)            |
//!
//! Gross pay is adjusted by swapping the old component for the new one, so
//! whatever base amount the day carried is kept. Each swap is clamped at
//! zero, so a component edit on a record whose gross was already edited
//! below that component does not restore the earlier gross when undone.
//!
//! Edit values above [`MAX_EDIT_VALUE`] are treated like unparsable input.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

use super::hourly_rate;
use super::pay_metrics::{grace_deduction, night_differential_pay, overtime_pay};
use crate::models::{AttendancePolicy, CompensationRecord, non_negative};

/// The largest value an edit may carry. Larger input is coerced to zero.
pub const MAX_EDIT_VALUE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A field a payroll officer may edit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum EditableField {
    OvertimeMinutes,
    UndertimeMinutes,
    LateMinutes,
    NightDifferentialHours,
    OvertimePay,
    NightDifferentialPay,
    LateDeduction,
    UndertimeDeduction,
    HolidayBonus,
    LeavePay,
    GrossPay,
    NetPay,
}

impl EditableField {
    /// Every editable field.
    pub const ALL: [EditableField; 12] = [
        EditableField::OvertimeMinutes,
        EditableField::UndertimeMinutes,
        EditableField::LateMinutes,
        EditableField::NightDifferentialHours,
        EditableField::OvertimePay,
        EditableField::NightDifferentialPay,
        EditableField::LateDeduction,
        EditableField::UndertimeDeduction,
        EditableField::HolidayBonus,
        EditableField::LeavePay,
        EditableField::GrossPay,
        EditableField::NetPay,
    ];

    /// Returns true for the whole-minute fields.
    pub fn is_minutes(&self) -> bool {
        matches!(
            self,
            EditableField::OvertimeMinutes
                | EditableField::UndertimeMinutes
                | EditableField::LateMinutes
        )
    }
}

impl std::fmt::Display for EditableField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EditableField::OvertimeMinutes => "overtime_minutes",
            EditableField::UndertimeMinutes => "undertime_minutes",
            EditableField::LateMinutes => "late_minutes",
            EditableField::NightDifferentialHours => "night_differential_hours",
            EditableField::OvertimePay => "overtime_pay",
            EditableField::NightDifferentialPay => "night_differential_pay",
            EditableField::LateDeduction => "late_deduction",
            EditableField::UndertimeDeduction => "undertime_deduction",
            EditableField::HolidayBonus => "holiday_bonus",
            EditableField::LeavePay => "leave_pay",
            EditableField::GrossPay => "gross_pay",
            EditableField::NetPay => "net_pay",
        };
        write!(f, "{}", name)
    }
}

/// A single-field edit with its typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Edit {
    OvertimeMinutes(i64),
    UndertimeMinutes(i64),
    LateMinutes(i64),
    NightDifferentialHours(Decimal),
    OvertimePay(Decimal),
    NightDifferentialPay(Decimal),
    LateDeduction(Decimal),
    UndertimeDeduction(Decimal),
    HolidayBonus(Decimal),
    LeavePay(Decimal),
    GrossPay(Decimal),
    NetPay(Decimal),
}

impl Edit {
    /// The field this edit targets.
    pub fn field(&self) -> EditableField {
        match self {
            Edit::OvertimeMinutes(_) => EditableField::OvertimeMinutes,
            Edit::UndertimeMinutes(_) => EditableField::UndertimeMinutes,
            Edit::LateMinutes(_) => EditableField::LateMinutes,
            Edit::NightDifferentialHours(_) => EditableField::NightDifferentialHours,
            Edit::OvertimePay(_) => EditableField::OvertimePay,
            Edit::NightDifferentialPay(_) => EditableField::NightDifferentialPay,
            Edit::LateDeduction(_) => EditableField::LateDeduction,
            Edit::UndertimeDeduction(_) => EditableField::UndertimeDeduction,
            Edit::HolidayBonus(_) => EditableField::HolidayBonus,
            Edit::LeavePay(_) => EditableField::LeavePay,
            Edit::GrossPay(_) => EditableField::GrossPay,
            Edit::NetPay(_) => EditableField::NetPay,
        }
    }

    /// The edit's value, clamped at zero.
    pub fn amount(&self) -> Decimal {
        let raw = match *self {
            Edit::OvertimeMinutes(m) | Edit::UndertimeMinutes(m) | Edit::LateMinutes(m) => {
                Decimal::from(m)
            }
            Edit::NightDifferentialHours(v)
            | Edit::OvertimePay(v)
            | Edit::NightDifferentialPay(v)
            | Edit::LateDeduction(v)
            | Edit::UndertimeDeduction(v)
            | Edit::HolidayBonus(v)
            | Edit::LeavePay(v)
            | Edit::GrossPay(v)
            | Edit::NetPay(v) => v,
        };
        non_negative(raw)
    }

    /// An edit setting `field` to zero.
    pub fn zero(field: EditableField) -> Self {
        Self::with_amount(field, Decimal::ZERO)
    }

    /// Builds an edit from raw user input.
    ///
    /// Unparsable, negative or out-of-range input becomes zero so the record
    /// stays editable. Minute fields drop any fractional part.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_pay_engine::calculation::{Edit, EditableField};
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Edit::from_raw(EditableField::LateMinutes, "12"), Edit::LateMinutes(12));
    /// assert_eq!(Edit::from_raw(EditableField::LateMinutes, "abc"), Edit::LateMinutes(0));
    /// assert_eq!(Edit::from_raw(EditableField::GrossPay, "-5"), Edit::GrossPay(Decimal::ZERO));
    /// assert_eq!(
    ///     Edit::from_raw(EditableField::NetPay, "79228162514264337593543950335"),
    ///     Edit::NetPay(Decimal::ZERO)
    /// );
    /// ```
    pub fn from_raw(field: EditableField, raw: &str) -> Self {
        let parsed = match Decimal::from_str(raw.trim()) {
            Ok(value) if !value.is_sign_negative() && value <= MAX_EDIT_VALUE => value,
            Ok(_) | Err(_) => {
                if !raw.trim().is_empty() {
                    warn!(field = %field, input = raw, "Coercing invalid numeric input to zero");
                }
                Decimal::ZERO
            }
        };
        Self::with_amount(field, parsed)
    }

    fn with_amount(field: EditableField, amount: Decimal) -> Self {
        let minutes = || amount.trunc().to_i64().unwrap_or(0).max(0);
        match field {
            EditableField::OvertimeMinutes => Edit::OvertimeMinutes(minutes()),
            EditableField::UndertimeMinutes => Edit::UndertimeMinutes(minutes()),
            EditableField::LateMinutes => Edit::LateMinutes(minutes()),
            EditableField::NightDifferentialHours => Edit::NightDifferentialHours(amount),
            EditableField::OvertimePay => Edit::OvertimePay(amount),
            EditableField::NightDifferentialPay => Edit::NightDifferentialPay(amount),
            EditableField::LateDeduction => Edit::LateDeduction(amount),
            EditableField::UndertimeDeduction => Edit::UndertimeDeduction(amount),
            EditableField::HolidayBonus => Edit::HolidayBonus(amount),
            EditableField::LeavePay => Edit::LeavePay(amount),
            EditableField::GrossPay => Edit::GrossPay(amount),
            EditableField::NetPay => Edit::NetPay(amount),
        }
    }
}

/// The rates a reducer needs to turn minutes or hours into money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRates {
    /// Daily rate over hours of work.
    pub hourly_rate: Decimal,
    /// The policy in force for the record's period.
    pub policy: AttendancePolicy,
}

impl OverrideRates {
    /// Derives the rates for an employee under a policy.
    pub fn new(policy: &AttendancePolicy, daily_rate: Decimal, hours_of_work: Decimal) -> Self {
        Self {
            hourly_rate: hourly_rate(daily_rate, hours_of_work),
            policy: policy.clone(),
        }
    }
}

type Reducer = fn(&mut CompensationRecord, Decimal, &OverrideRates);

static REDUCERS: &[(EditableField, Reducer)] = &[
    (EditableField::OvertimeMinutes, reduce_overtime_minutes),
    (EditableField::UndertimeMinutes, reduce_undertime_minutes),
    (EditableField::LateMinutes, reduce_late_minutes),
    (EditableField::NightDifferentialHours, reduce_night_differential_hours),
    (EditableField::OvertimePay, reduce_overtime_pay),
    (EditableField::NightDifferentialPay, reduce_night_differential_pay),
    (EditableField::LateDeduction, reduce_late_deduction),
    (EditableField::UndertimeDeduction, reduce_undertime_deduction),
    (EditableField::HolidayBonus, reduce_holiday_bonus),
    (EditableField::LeavePay, reduce_leave_pay),
    (EditableField::GrossPay, reduce_gross_pay),
    (EditableField::NetPay, reduce_net_pay),
];

fn reducer_for(field: EditableField) -> Option<Reducer> {
    REDUCERS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, reducer)| *reducer)
}

fn whole_minutes(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(0).max(0)
}

/// Swaps one gross component for its new value.
fn replace_in_gross(record: &mut CompensationRecord, old: Decimal, new: Decimal) {
    record.gross_pay = non_negative(record.gross_pay.saturating_sub(old).saturating_add(new));
}

fn reduce_overtime_minutes(record: &mut CompensationRecord, value: Decimal, rates: &OverrideRates) {
    record.overtime_minutes = whole_minutes(value);
    let pay = overtime_pay(
        record.overtime_minutes,
        rates.hourly_rate,
        rates.policy.overtime_hourly_multiplier,
    );
    reduce_overtime_pay(record, pay, rates);
}

fn reduce_night_differential_hours(
    record: &mut CompensationRecord,
    value: Decimal,
    rates: &OverrideRates,
) {
    record.night_differential_hours = value;
    let pay = night_differential_pay(
        value,
        rates.hourly_rate,
        rates.policy.night_differential_multiplier,
    );
    reduce_night_differential_pay(record, pay, rates);
}

fn reduce_late_minutes(record: &mut CompensationRecord, value: Decimal, rates: &OverrideRates) {
    record.late_minutes = whole_minutes(value);
    let deduction = grace_deduction(
        record.late_minutes,
        rates.policy.late_grace_period,
        rates.policy.late_deduction_per_minute,
    );
    reduce_late_deduction(record, deduction, rates);
}

fn reduce_undertime_minutes(
    record: &mut CompensationRecord,
    value: Decimal,
    rates: &OverrideRates,
) {
    record.undertime_minutes = whole_minutes(value);
    let deduction = grace_deduction(
        record.undertime_minutes,
        rates.policy.undertime_grace_period,
        rates.policy.undertime_deduction_per_minute,
    );
    reduce_undertime_deduction(record, deduction, rates);
}

fn reduce_overtime_pay(record: &mut CompensationRecord, value: Decimal, _rates: &OverrideRates) {
    replace_in_gross(record, record.overtime_pay, value);
    record.overtime_pay = value;
    record.settle_net_pay();
}

fn reduce_night_differential_pay(
    record: &mut CompensationRecord,
    value: Decimal,
    _rates: &OverrideRates,
) {
    replace_in_gross(record, record.night_differential_pay, value);
    record.night_differential_pay = value;
    record.settle_net_pay();
}

fn reduce_holiday_bonus(record: &mut CompensationRecord, value: Decimal, _rates: &OverrideRates) {
    replace_in_gross(record, record.holiday_bonus, value);
    record.holiday_bonus = value;
    record.settle_net_pay();
}

fn reduce_late_deduction(record: &mut CompensationRecord, value: Decimal, _rates: &OverrideRates) {
    record.late_deduction = value;
    record.settle_deductions();
    record.settle_net_pay();
}

fn reduce_undertime_deduction(
    record: &mut CompensationRecord,
    value: Decimal,
    _rates: &OverrideRates,
) {
    record.undertime_deduction = value;
    record.settle_deductions();
    record.settle_net_pay();
}

fn reduce_leave_pay(record: &mut CompensationRecord, value: Decimal, _rates: &OverrideRates) {
    record.leave_pay = value;
    record.settle_net_pay();
}

fn reduce_gross_pay(record: &mut CompensationRecord, value: Decimal, _rates: &OverrideRates) {
    record.gross_pay = value;
    record.settle_net_pay();
}

fn reduce_net_pay(record: &mut CompensationRecord, value: Decimal, _rates: &OverrideRates) {
    record.net_pay = value;
    record.gross_pay = non_negative(
        value
            .saturating_add(record.deductions)
            .saturating_sub(record.leave_pay),
    );
}

/// Applies a single-field edit and recomputes its dependents.
///
/// The `manual_override` flag is left as it is; see [`clear_and_override`]
/// and [`set_manual_override`].
///
/// # Example
///
/// ```
/// use attendance_pay_engine::calculation::{Edit, OverrideRates, apply_edit};
/// use attendance_pay_engine::models::{AttendancePolicy, CompensationRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let mut record = CompensationRecord::new("emp_001", date);
/// record.gross_pay = Decimal::new(800, 0);
/// record.net_pay = Decimal::new(800, 0);
///
/// let policy = AttendancePolicy::default();
/// let rates = OverrideRates::new(&policy, Decimal::new(800, 0), Decimal::new(8, 0));
/// let edited = apply_edit(&record, Edit::OvertimeMinutes(120), &rates);
///
/// assert_eq!(edited.overtime_pay, Decimal::new(25000, 2));
/// assert_eq!(edited.gross_pay, Decimal::new(105000, 2));
/// assert_eq!(edited.net_pay, Decimal::new(105000, 2));
/// ```
pub fn apply_edit(
    record: &CompensationRecord,
    edit: Edit,
    rates: &OverrideRates,
) -> CompensationRecord {
    let mut updated = record.clone();
    let field = edit.field();
    let value = match edit.amount() {
        value if value > MAX_EDIT_VALUE => {
            warn!(field = %field, value = %value, "Coercing out-of-range edit value to zero");
            Decimal::ZERO
        }
        value => value,
    };

    match reducer_for(field) {
        Some(reducer) => {
            reducer(&mut updated, value, rates);
            debug!(
                employee_id = %record.employee_id,
                year = record.year,
                month = record.month,
                day = record.day,
                field = %field,
                value = %value,
                gross_pay = %updated.gross_pay,
                net_pay = %updated.net_pay,
                "Applied manual edit"
            );
        }
        None => {
            warn!(field = %field, "No reducer registered for field, record unchanged");
        }
    }

    updated
}

/// Zeroes `field`, forces manual override on, and propagates the change.
pub fn clear_and_override(
    record: &CompensationRecord,
    field: EditableField,
    rates: &OverrideRates,
) -> CompensationRecord {
    let mut updated = apply_edit(record, Edit::zero(field), rates);
    updated.manual_override = true;
    updated
}

/// Sets the manual override flag.
///
/// Switching it off does not restore anything by itself; the next daily
/// calculation replaces the edited values.
pub fn set_manual_override(record: &CompensationRecord, enabled: bool) -> CompensationRecord {
    if record.manual_override != enabled {
        debug!(
            employee_id = %record.employee_id,
            year = record.year,
            month = record.month,
            day = record.day,
            enabled,
            "Manual override toggled"
        );
    }
    CompensationRecord {
        manual_override: enabled,
        ..record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> OverrideRates {
        let policy = AttendancePolicy {
            late_grace_period: 5,
            late_deduction_per_minute: dec("2"),
            undertime_grace_period: 5,
            undertime_deduction_per_minute: dec("2"),
            overtime_threshold: 30,
            ..AttendancePolicy::default()
        };
        OverrideRates::new(&policy, dec("800"), dec("8"))
    }

    /// The record for an 08:00-19:00 day, 20 min late.
    fn overtime_record() -> CompensationRecord {
        let mut record =
            CompensationRecord::new("emp_001", NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        record.hours_worked = dec("11");
        record.late_minutes = 20;
        record.overtime_minutes = 120;
        record.overtime_pay = dec("250.00");
        record.late_deduction = dec("30.00");
        record.gross_pay = dec("1050.00");
        record.settle_deductions();
        record.settle_net_pay();
        record
    }

    #[test]
    fn test_every_field_has_a_reducer() {
        for field in EditableField::ALL {
            assert!(reducer_for(field).is_some(), "missing reducer for {}", field);
        }
    }

    #[test]
    fn test_edit_field_round_trip() {
        for field in EditableField::ALL {
            assert_eq!(Edit::zero(field).field(), field);
        }
    }

    #[test]
    fn test_clear_overtime_pay() {
        let record = overtime_record();
        let cleared = clear_and_override(&record, EditableField::OvertimePay, &rates());

        assert_eq!(cleared.overtime_pay, dec("0"));
        assert_eq!(cleared.gross_pay, dec("800.00"));
        assert_eq!(cleared.net_pay, dec("770.00"));
        assert!(cleared.manual_override);
        // Overtime minutes are upstream and stay as they were.
        assert_eq!(cleared.overtime_minutes, 120);
    }

    #[test]
    fn test_overtime_minutes_edit_propagates() {
        let edited = apply_edit(&overtime_record(), Edit::OvertimeMinutes(60), &rates());
        assert_eq!(edited.overtime_pay, dec("125.00"));
        assert_eq!(edited.gross_pay, dec("925.00"));
        assert_eq!(edited.net_pay, dec("895.00"));
        assert_eq!(edited.late_deduction, dec("30.00"));
        assert!(!edited.manual_override);
    }

    #[test]
    fn test_clear_then_restore_overtime_minutes() {
        let original = overtime_record();
        let cleared = clear_and_override(&original, EditableField::OvertimeMinutes, &rates());
        assert_eq!(cleared.gross_pay, dec("800.00"));

        let restored = apply_edit(&cleared, Edit::OvertimeMinutes(120), &rates());
        assert_eq!(restored.overtime_pay, original.overtime_pay);
        assert_eq!(restored.gross_pay, original.gross_pay);
        assert_eq!(restored.net_pay, original.net_pay);
    }

    #[test]
    fn test_late_minutes_edit_recomputes_deductions() {
        let edited = apply_edit(&overtime_record(), Edit::LateMinutes(5), &rates());
        assert_eq!(edited.late_deduction, dec("0"));
        assert_eq!(edited.deductions, dec("0"));
        assert_eq!(edited.net_pay, dec("1050.00"));
        assert_eq!(edited.gross_pay, dec("1050.00"));
    }

    #[test]
    fn test_undertime_minutes_edit() {
        let edited = apply_edit(&overtime_record(), Edit::UndertimeMinutes(15), &rates());
        assert_eq!(edited.undertime_deduction, dec("20.00"));
        assert_eq!(edited.deductions, dec("50.00"));
        assert_eq!(edited.net_pay, dec("1000.00"));
    }

    #[test]
    fn test_night_differential_hours_edit() {
        let edit = Edit::NightDifferentialHours(dec("2"));
        let edited = apply_edit(&overtime_record(), edit, &rates());
        assert_eq!(edited.night_differential_pay, dec("20.00"));
        assert_eq!(edited.gross_pay, dec("1070.00"));
    }

    #[test]
    fn test_holiday_bonus_edit() {
        let edited = apply_edit(&overtime_record(), Edit::HolidayBonus(dec("800")), &rates());
        assert_eq!(edited.gross_pay, dec("1850.00"));
        assert_eq!(edited.net_pay, dec("1820.00"));
    }

    #[test]
    fn test_leave_pay_edit_only_touches_net() {
        let edited = apply_edit(&overtime_record(), Edit::LeavePay(dec("100")), &rates());
        assert_eq!(edited.gross_pay, dec("1050.00"));
        assert_eq!(edited.net_pay, dec("1120.00"));
    }

    #[test]
    fn test_gross_pay_edit() {
        let edited = apply_edit(&overtime_record(), Edit::GrossPay(dec("900")), &rates());
        assert_eq!(edited.net_pay, dec("870.00"));
        assert_eq!(edited.overtime_pay, dec("250.00"));
    }

    #[test]
    fn test_net_pay_edit_back_solves_gross() {
        let edited = apply_edit(&overtime_record(), Edit::NetPay(dec("1000")), &rates());
        assert_eq!(edited.net_pay, dec("1000"));
        assert_eq!(edited.gross_pay, dec("1030.00"));
        assert_eq!(edited.deductions, dec("30.00"));
    }

    #[test]
    fn test_net_never_negative() {
        let edited = apply_edit(&overtime_record(), Edit::LateDeduction(dec("5000")), &rates());
        assert_eq!(edited.net_pay, dec("0"));
    }

    #[test]
    fn test_negative_values_clamped() {
        let edited = apply_edit(&overtime_record(), Edit::OvertimePay(dec("-50")), &rates());
        assert_eq!(edited.overtime_pay, dec("0"));
        assert_eq!(edited.gross_pay, dec("800.00"));
    }

    #[test]
    fn test_from_raw_truncates_minutes() {
        assert_eq!(
            Edit::from_raw(EditableField::OvertimeMinutes, "90.7"),
            Edit::OvertimeMinutes(90)
        );
        assert_eq!(Edit::from_raw(EditableField::OvertimeMinutes, " "), Edit::OvertimeMinutes(0));
        assert_eq!(
            Edit::from_raw(EditableField::NightDifferentialHours, "1.25"),
            Edit::NightDifferentialHours(dec("1.25"))
        );
    }

    #[test]
    fn test_oversized_input_coerced_to_zero() {
        let max = Decimal::MAX.to_string();
        for field in EditableField::ALL {
            assert_eq!(Edit::from_raw(field, &max), Edit::zero(field));
        }

        let record = overtime_record();
        let edited = apply_edit(&record, Edit::from_raw(EditableField::NetPay, &max), &rates());
        assert_eq!(edited.net_pay, dec("0"));
        assert_eq!(edited.gross_pay, dec("30.00"));
    }

    #[test]
    fn test_oversized_typed_edit_coerced_to_zero() {
        let record = overtime_record();
        let edited = apply_edit(&record, Edit::NightDifferentialHours(Decimal::MAX), &rates());
        assert_eq!(edited.night_differential_hours, dec("0"));
        assert_eq!(edited.night_differential_pay, dec("0"));
        assert_eq!(edited.gross_pay, record.gross_pay);

        let edited = apply_edit(&record, Edit::NetPay(Decimal::MAX), &rates());
        assert_eq!(edited.net_pay, dec("0"));
    }

    #[test]
    fn test_edit_at_limit_does_not_overflow() {
        let mut record = overtime_record();
        record.gross_pay = Decimal::MAX;
        record.leave_pay = MAX_EDIT_VALUE;
        record.settle_net_pay();
        assert_eq!(record.net_pay, Decimal::MAX);

        let edited = apply_edit(&record, Edit::NightDifferentialHours(MAX_EDIT_VALUE), &rates());
        assert_eq!(edited.gross_pay, Decimal::MAX);
        let edited = apply_edit(&record, Edit::HolidayBonus(MAX_EDIT_VALUE), &rates());
        assert_eq!(edited.gross_pay, Decimal::MAX);
    }

    #[test]
    fn test_clamped_gross_is_not_restored_by_undo() {
        let record = overtime_record();
        let lowered = apply_edit(&record, Edit::GrossPay(dec("100")), &rates());
        let cleared = apply_edit(&lowered, Edit::OvertimePay(dec("0")), &rates());
        assert_eq!(cleared.gross_pay, dec("0"));

        let restored = apply_edit(&cleared, Edit::OvertimePay(dec("250.00")), &rates());
        assert_eq!(restored.gross_pay, dec("250.00"));
    }

    #[test]
    fn test_set_manual_override() {
        let record = overtime_record();
        let on = set_manual_override(&record, true);
        assert!(on.manual_override);
        assert_eq!(on.gross_pay, record.gross_pay);
        assert!(!set_manual_override(&on, false).manual_override);
    }

    #[test]
    fn test_edit_serializes_tagged() {
        let json = serde_json::to_value(Edit::LateMinutes(12)).unwrap();
        assert_eq!(json["field"], "late_minutes");
        assert_eq!(json["value"], 12);
    }
}
