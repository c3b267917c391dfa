//! Configuration types for the pay engine.
//!
//! This module contains the file structures deserialized from YAML and the
//! immutable [`PayrollSnapshot`] every calculation pass reads from.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::parse_clock;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendancePolicy, DEFAULT_HOURS_OF_WORK, EmploymentTypeDefinition, HolidayCalendar,
    HolidayRange, ScheduleSpec,
};

/// Employment types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmploymentTypesConfig {
    /// Map of employment type name to its definition.
    pub employment_types: HashMap<String, EmploymentTypeDefinition>,
}

/// A holidays file for one year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The holiday ranges declared in the file.
    pub holidays: Vec<HolidayRange>,
}

/// One consistent view of the settings and holiday collaborators.
///
/// A calculation pass reads a single snapshot throughout, so policy, schedule
/// and holiday data always come from the same load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollSnapshot {
    /// The attendance policy for the period.
    pub policy: AttendancePolicy,
    /// Employment type definitions by name.
    pub employment_types: HashMap<String, EmploymentTypeDefinition>,
    /// The holiday calendar.
    pub holidays: HolidayCalendar,
}

impl PayrollSnapshot {
    /// Creates a snapshot from its parts. Holidays are sorted by start date.
    pub fn new(
        policy: AttendancePolicy,
        employment_types: HashMap<String, EmploymentTypeDefinition>,
        holidays: Vec<HolidayRange>,
    ) -> Self {
        Self {
            policy,
            employment_types,
            holidays: HolidayCalendar::new(holidays),
        }
    }

    /// Gets an employment type definition by name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_pay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// let regular = loader.snapshot().employment_type("regular")?;
    /// println!("Hours of work: {}", regular.hours_of_work());
    /// # Ok::<(), attendance_pay_engine::error::EngineError>(())
    /// ```
    pub fn employment_type(&self, name: &str) -> EngineResult<&EmploymentTypeDefinition> {
        self.employment_types
            .get(name)
            .ok_or_else(|| EngineError::EmploymentTypeNotFound {
                name: name.to_string(),
            })
    }

    /// The schedule for an employment type on a date.
    ///
    /// `None` means the schedule is unresolved: the employment type is unknown
    /// or does not define that weekday.
    pub fn schedule_for_date(
        &self,
        employment_type: &str,
        date: NaiveDate,
    ) -> Option<&ScheduleSpec> {
        self.employment_types
            .get(employment_type)
            .and_then(|definition| definition.schedule.for_weekday(date.weekday()))
    }

    /// Standard hours for an employment type, 8 if the type is unknown.
    pub fn hours_of_work(&self, employment_type: &str) -> Decimal {
        self.employment_types
            .get(employment_type)
            .map(|definition| definition.hours_of_work())
            .unwrap_or(DEFAULT_HOURS_OF_WORK)
    }

    /// The holiday covering a date, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&HolidayRange> {
        self.holidays.holiday_on(date)
    }

    /// Checks the snapshot for data the calculators cannot use.
    ///
    /// # Errors
    ///
    /// - `InvalidPolicy` for a negative threshold, amount or multiplier, or an
    ///   hour outside 0-23
    /// - `InvalidSchedule` for a working day with a missing or unparsable time
    /// - `InvalidHoliday` for a range ending before it starts or a negative
    ///   multiplier
    pub fn validate(&self) -> EngineResult<()> {
        self.policy.validate()?;

        for (name, definition) in &self.employment_types {
            if definition.hours_of_work.is_some_and(|h| h < Decimal::ZERO) {
                return Err(EngineError::InvalidSchedule {
                    employment_type: name.clone(),
                    message: "hours_of_work must not be negative".to_string(),
                });
            }

            for (weekday, spec) in definition.schedule.entries() {
                if spec.is_off {
                    continue;
                }
                for (label, value) in [("time_in", &spec.time_in), ("time_out", &spec.time_out)] {
                    let value = value.as_deref().unwrap_or_default();
                    parse_clock(value).map_err(|_| EngineError::InvalidSchedule {
                        employment_type: name.clone(),
                        message: format!(
                            "{} {} '{}' is not a valid HH:MM time",
                            weekday, label, value
                        ),
                    })?;
                }
            }
        }

        for holiday in &self.holidays.ranges {
            if holiday.end_date < holiday.start_date {
                return Err(EngineError::InvalidHoliday {
                    name: holiday.name.clone(),
                    message: format!(
                        "end date {} is before start date {}",
                        holiday.end_date, holiday.start_date
                    ),
                });
            }
            if holiday.multiplier < Decimal::ZERO {
                return Err(EngineError::InvalidHoliday {
                    name: holiday.name.clone(),
                    message: format!("multiplier must not be negative, got {}", holiday.multiplier),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HolidayType, WeeklySchedule};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn office() -> EmploymentTypeDefinition {
        let day = || Some(ScheduleSpec::working("08:00", "17:00"));
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
        }
    }

    fn holiday(name: &str, start: &str, end: &str) -> HolidayRange {
        HolidayRange {
            name: name.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            holiday_type: HolidayType::Regular,
            multiplier: dec("1.0"),
            paid: true,
        }
    }

    fn snapshot() -> PayrollSnapshot {
        let mut types = HashMap::new();
        types.insert("regular".to_string(), office());
        PayrollSnapshot::new(
            AttendancePolicy::default(),
            types,
            vec![
                holiday("Christmas Day", "2026-12-25", "2026-12-25"),
                holiday("New Year's Day", "2026-01-01", "2026-01-01"),
            ],
        )
    }

    #[test]
    fn test_holidays_sorted_on_construction() {
        let snapshot = snapshot();
        assert_eq!(snapshot.holidays.ranges[0].name, "New Year's Day");
    }

    #[test]
    fn test_schedule_for_date() {
        let snapshot = snapshot();
        // 2026-01-15 is a Thursday
        let thursday = snapshot.schedule_for_date("regular", make_date("2026-01-15"));
        assert!(thursday.unwrap().is_workday());
        // 2026-01-17 is a Saturday
        let saturday = snapshot.schedule_for_date("regular", make_date("2026-01-17"));
        assert!(saturday.unwrap().is_off);
        // Sunday is not defined
        assert!(snapshot.schedule_for_date("regular", make_date("2026-01-18")).is_none());
        assert!(snapshot.schedule_for_date("contractor", make_date("2026-01-15")).is_none());
    }

    #[test]
    fn test_hours_of_work_falls_back_to_eight() {
        assert_eq!(snapshot().hours_of_work("contractor"), dec("8"));
    }

    #[test]
    fn test_unknown_employment_type() {
        match snapshot().employment_type("contractor") {
            Err(EngineError::EmploymentTypeNotFound { name }) => assert_eq!(name, "contractor"),
            other => panic!("Expected EmploymentTypeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_snapshot() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn test_bad_schedule_time_rejected() {
        let mut snapshot = snapshot();
        if let Some(definition) = snapshot.employment_types.get_mut("regular") {
            definition.schedule.monday = Some(ScheduleSpec::working("8am", "17:00"));
        }
        match snapshot.validate() {
            Err(EngineError::InvalidSchedule { employment_type, message }) => {
                assert_eq!(employment_type, "regular");
                assert!(message.contains("8am"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_holiday_range_rejected() {
        let mut snapshot = snapshot();
        snapshot.holidays =
            HolidayCalendar::new(vec![holiday("Backwards", "2026-04-05", "2026-04-02")]);
        assert!(matches!(
            snapshot.validate(),
            Err(EngineError::InvalidHoliday { .. })
        ));
    }
}
