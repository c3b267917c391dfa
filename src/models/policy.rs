//! Attendance and compensation policy.
//!
//! The [`AttendancePolicy`] carries every site-wide threshold and multiplier
//! the calculators need. It is immutable for the duration of a pay period and
//! is passed explicitly into every calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayType;

/// Which value supplies the holiday multiplier.
///
/// Holiday ranges carry their own multiplier while the policy also carries a
/// regular and a special holiday multiplier. Sites pick one as authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayMultiplierSource {
    /// Use the multiplier stored on the matching holiday range.
    #[default]
    HolidayRange,
    /// Use the policy's regular/special holiday multiplier.
    Policy,
}

/// Company-wide attendance policy.
///
/// Minute fields are whole minutes; money fields are per-minute amounts;
/// multipliers are plain factors (1.25 means 125%).
///
/// # Example
///
/// ```
/// use attendance_pay_engine::models::AttendancePolicy;
///
/// let policy = AttendancePolicy::default();
/// assert!(policy.validate().is_ok());
/// assert_eq!(policy.night_differential_start_hour, 22);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Minutes of lateness tolerated before a deduction applies.
    pub late_grace_period: i64,
    /// Deduction per late minute beyond the grace period.
    pub late_deduction_per_minute: Decimal,
    /// Minutes of undertime tolerated before a deduction applies.
    pub undertime_grace_period: i64,
    /// Deduction per undertime minute beyond the grace period.
    pub undertime_deduction_per_minute: Decimal,
    /// Overtime candidate minutes must strictly exceed this to count.
    pub overtime_threshold: i64,
    /// Factor applied to the hourly rate for overtime hours.
    pub overtime_hourly_multiplier: Decimal,
    /// Factor applied to the hourly rate for night-differential hours.
    pub night_differential_multiplier: Decimal,
    /// Hour of day (0-23) the nightly window opens.
    pub night_differential_start_hour: u32,
    /// Hour of day (0-23) the nightly window closes.
    pub night_differential_end_hour: u32,
    /// Holiday multiplier for regular holidays.
    pub regular_holiday_multiplier: Decimal,
    /// Holiday multiplier for special holidays.
    pub special_holiday_multiplier: Decimal,
    /// Whether arriving before the scheduled start counts toward overtime.
    #[serde(default)]
    pub count_early_time_in_as_overtime: bool,
    /// Which value supplies the holiday multiplier.
    #[serde(default)]
    pub holiday_multiplier_source: HolidayMultiplierSource,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            late_grace_period: 0,
            late_deduction_per_minute: Decimal::ZERO,
            undertime_grace_period: 0,
            undertime_deduction_per_minute: Decimal::ZERO,
            overtime_threshold: 0,
            overtime_hourly_multiplier: Decimal::new(125, 2),
            night_differential_multiplier: Decimal::new(10, 2),
            night_differential_start_hour: 22,
            night_differential_end_hour: 6,
            regular_holiday_multiplier: Decimal::ONE,
            special_holiday_multiplier: Decimal::new(30, 2),
            count_early_time_in_as_overtime: false,
            holiday_multiplier_source: HolidayMultiplierSource::HolidayRange,
        }
    }
}

impl AttendancePolicy {
    /// Returns the policy multiplier for a holiday type.
    pub fn holiday_multiplier(&self, holiday_type: HolidayType) -> Decimal {
        match holiday_type {
            HolidayType::Regular => self.regular_holiday_multiplier,
            HolidayType::Special => self.special_holiday_multiplier,
        }
    }

    /// Checks that every value is inside its domain.
    ///
    /// Called by the configuration loader so the calculators never see a
    /// negative grace period or an hour outside 0-23.
    pub fn validate(&self) -> EngineResult<()> {
        let minutes = [
            ("late_grace_period", self.late_grace_period),
            ("undertime_grace_period", self.undertime_grace_period),
            ("overtime_threshold", self.overtime_threshold),
        ];
        for (field, value) in minutes {
            if value < 0 {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }

        let amounts = [
            ("late_deduction_per_minute", self.late_deduction_per_minute),
            (
                "undertime_deduction_per_minute",
                self.undertime_deduction_per_minute,
            ),
            ("overtime_hourly_multiplier", self.overtime_hourly_multiplier),
            (
                "night_differential_multiplier",
                self.night_differential_multiplier,
            ),
            ("regular_holiday_multiplier", self.regular_holiday_multiplier),
            ("special_holiday_multiplier", self.special_holiday_multiplier),
        ];
        for (field, value) in amounts {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }

        let hours = [
            (
                "night_differential_start_hour",
                self.night_differential_start_hour,
            ),
            ("night_differential_end_hour", self.night_differential_end_hour),
        ];
        for (field, value) in hours {
            if value > 23 {
                return Err(invalid(field, format!("must be between 0 and 23, got {}", value)));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(AttendancePolicy::default().validate().is_ok());
    }

    #[test]
    fn test_negative_grace_period_rejected() {
        let policy = AttendancePolicy {
            late_grace_period: -5,
            ..AttendancePolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "late_grace_period");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let policy = AttendancePolicy {
            overtime_hourly_multiplier: dec("-1.25"),
            ..AttendancePolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "overtime_hourly_multiplier");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        let policy = AttendancePolicy {
            night_differential_end_hour: 24,
            ..AttendancePolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, message }) => {
                assert_eq!(field, "night_differential_end_hour");
                assert!(message.contains("between 0 and 23"));
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_holiday_multiplier_by_type() {
        let policy = AttendancePolicy {
            regular_holiday_multiplier: dec("1.0"),
            special_holiday_multiplier: dec("0.3"),
            ..AttendancePolicy::default()
        };
        assert_eq!(policy.holiday_multiplier(HolidayType::Regular), dec("1"));
        assert_eq!(policy.holiday_multiplier(HolidayType::Special), dec("0.3"));
    }

    #[test]
    fn test_deserialize_policy_defaults_optional_fields() {
        let yaml = r#"
late_grace_period: 5
late_deduction_per_minute: "2.00"
undertime_grace_period: 0
undertime_deduction_per_minute: "1.50"
overtime_threshold: 30
overtime_hourly_multiplier: "1.25"
night_differential_multiplier: "0.10"
night_differential_start_hour: 22
night_differential_end_hour: 6
regular_holiday_multiplier: "1.0"
special_holiday_multiplier: "0.3"
"#;
        let policy: AttendancePolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.late_grace_period, 5);
        assert_eq!(policy.late_deduction_per_minute, dec("2"));
        assert!(!policy.count_early_time_in_as_overtime);
        assert_eq!(
            policy.holiday_multiplier_source,
            HolidayMultiplierSource::HolidayRange
        );
    }
}
