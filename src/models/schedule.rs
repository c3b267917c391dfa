//! Schedule reference data.
//!
//! Each employment type carries a weekly schedule: one [`ScheduleSpec`] per
//! day of the week plus the number of paid hours in a standard working day.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard working hours per day when an employment type does not say.
pub const DEFAULT_HOURS_OF_WORK: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The scheduled shift for one day of the week.
///
/// Times are kept as the `HH:MM` strings the settings screen stores; they are
/// parsed by the time normalizer when a calculation runs.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::models::ScheduleSpec;
///
/// let spec = ScheduleSpec::working("08:00", "17:00");
/// assert!(spec.is_workday());
/// assert!(!ScheduleSpec::off().is_workday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Scheduled start of the shift.
    #[serde(default)]
    pub time_in: Option<String>,
    /// Scheduled end of the shift.
    #[serde(default)]
    pub time_out: Option<String>,
    /// Whether the day is a rest day.
    #[serde(default)]
    pub is_off: bool,
}

impl ScheduleSpec {
    /// Creates a working day schedule.
    pub fn working(time_in: &str, time_out: &str) -> Self {
        Self {
            time_in: Some(time_in.to_string()),
            time_out: Some(time_out.to_string()),
            is_off: false,
        }
    }

    /// Creates a rest day schedule.
    pub fn off() -> Self {
        Self {
            time_in: None,
            time_out: None,
            is_off: true,
        }
    }

    /// Returns true if the day is a scheduled working day with both times set.
    pub fn is_workday(&self) -> bool {
        !self.is_off && self.time_in.is_some() && self.time_out.is_some()
    }
}

/// A weekly schedule keyed by day of the week.
///
/// Days left as `None` are unresolved: the engine falls back to daily-rate pay
/// for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Monday schedule.
    #[serde(default)]
    pub monday: Option<ScheduleSpec>,
    /// Tuesday schedule.
    #[serde(default)]
    pub tuesday: Option<ScheduleSpec>,
    /// Wednesday schedule.
    #[serde(default)]
    pub wednesday: Option<ScheduleSpec>,
    /// Thursday schedule.
    #[serde(default)]
    pub thursday: Option<ScheduleSpec>,
    /// Friday schedule.
    #[serde(default)]
    pub friday: Option<ScheduleSpec>,
    /// Saturday schedule.
    #[serde(default)]
    pub saturday: Option<ScheduleSpec>,
    /// Sunday schedule.
    #[serde(default)]
    pub sunday: Option<ScheduleSpec>,
}

impl WeeklySchedule {
    /// Returns the schedule for a day of the week, if one is defined.
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&ScheduleSpec> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Iterates over the defined days in Monday-first order.
    pub fn entries(&self) -> impl Iterator<Item = (Weekday, &ScheduleSpec)> {
        [
            (Weekday::Mon, &self.monday),
            (Weekday::Tue, &self.tuesday),
            (Weekday::Wed, &self.wednesday),
            (Weekday::Thu, &self.thursday),
            (Weekday::Fri, &self.friday),
            (Weekday::Sat, &self.saturday),
            (Weekday::Sun, &self.sunday),
        ]
        .into_iter()
        .filter_map(|(day, spec)| spec.as_ref().map(|s| (day, s)))
    }
}

/// An employment type as defined in the site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentTypeDefinition {
    /// Paid hours in a standard working day.
    #[serde(default)]
    pub hours_of_work: Option<Decimal>,
    /// The weekly schedule.
    #[serde(default)]
    pub schedule: WeeklySchedule,
}

impl EmploymentTypeDefinition {
    /// Returns the standard hours per day, defaulting to 8 when unset or zero.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_pay_engine::models::{EmploymentTypeDefinition, WeeklySchedule};
    /// use rust_decimal::Decimal;
    ///
    /// let definition = EmploymentTypeDefinition {
    ///     hours_of_work: None,
    ///     schedule: WeeklySchedule::default(),
    /// };
    /// assert_eq!(definition.hours_of_work(), Decimal::new(8, 0));
    /// ```
    pub fn hours_of_work(&self) -> Decimal {
        match self.hours_of_work {
            Some(hours) if hours > Decimal::ZERO => hours,
            _ => DEFAULT_HOURS_OF_WORK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_week() -> WeeklySchedule {
        WeeklySchedule {
            monday: Some(ScheduleSpec::working("08:00", "17:00")),
            tuesday: Some(ScheduleSpec::working("08:00", "17:00")),
            wednesday: Some(ScheduleSpec::working("08:00", "17:00")),
            thursday: Some(ScheduleSpec::working("08:00", "17:00")),
            friday: Some(ScheduleSpec::working("08:00", "17:00")),
            saturday: Some(ScheduleSpec::off()),
            sunday: None,
        }
    }

    #[test]
    fn test_for_weekday_returns_defined_day() {
        let week = office_week();
        let monday = week.for_weekday(Weekday::Mon).unwrap();
        assert_eq!(monday.time_in.as_deref(), Some("08:00"));
        assert!(monday.is_workday());
    }

    #[test]
    fn test_for_weekday_off_day() {
        let week = office_week();
        let saturday = week.for_weekday(Weekday::Sat).unwrap();
        assert!(saturday.is_off);
        assert!(!saturday.is_workday());
    }

    #[test]
    fn test_for_weekday_unresolved_day() {
        let week = office_week();
        assert!(week.for_weekday(Weekday::Sun).is_none());
    }

    #[test]
    fn test_entries_skip_undefined_days() {
        let week = office_week();
        let days: Vec<Weekday> = week.entries().map(|(d, _)| d).collect();
        assert_eq!(days.len(), 6);
        assert_eq!(days[0], Weekday::Mon);
        assert_eq!(days[5], Weekday::Sat);
    }

    #[test]
    fn test_workday_without_times_is_not_workday() {
        let spec = ScheduleSpec {
            time_in: Some("08:00".to_string()),
            time_out: None,
            is_off: false,
        };
        assert!(!spec.is_workday());
    }

    #[test]
    fn test_hours_of_work_defaults() {
        let unset = EmploymentTypeDefinition {
            hours_of_work: None,
            schedule: WeeklySchedule::default(),
        };
        assert_eq!(unset.hours_of_work(), DEFAULT_HOURS_OF_WORK);

        let zero = EmploymentTypeDefinition {
            hours_of_work: Some(Decimal::ZERO),
            schedule: WeeklySchedule::default(),
        };
        assert_eq!(zero.hours_of_work(), DEFAULT_HOURS_OF_WORK);

        let nine = EmploymentTypeDefinition {
            hours_of_work: Some(Decimal::new(9, 0)),
            schedule: WeeklySchedule::default(),
        };
        assert_eq!(nine.hours_of_work(), Decimal::new(9, 0));
    }

    #[test]
    fn test_deserialize_definition_from_yaml() {
        let yaml = r#"
hours_of_work: 8
schedule:
  monday: { time_in: "08:00", time_out: "17:00" }
  saturday: { is_off: true }
"#;
        let definition: EmploymentTypeDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(definition.hours_of_work(), Decimal::new(8, 0));
        assert!(definition.schedule.monday.unwrap().is_workday());
        assert!(definition.schedule.saturday.unwrap().is_off);
        assert!(definition.schedule.tuesday.is_none());
    }
}
