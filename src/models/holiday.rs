//! Holiday ranges and the holiday calendar.
//!
//! The core only performs date-range membership tests; which holidays exist is
//! decided by the holiday collaborator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A regular holiday.
    Regular,
    /// A special (non-working) holiday.
    Special,
}

/// A holiday spanning one or more consecutive days.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::models::{HolidayRange, HolidayType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let holy_week = HolidayRange {
///     name: "Holy Week".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 4, 3).unwrap(),
///     holiday_type: HolidayType::Regular,
///     multiplier: Decimal::ONE,
///     paid: true,
/// };
///
/// assert!(holy_week.contains(NaiveDate::from_ymd_opt(2026, 4, 2).unwrap()));
/// assert!(holy_week.contains(NaiveDate::from_ymd_opt(2026, 4, 3).unwrap()));
/// assert!(!holy_week.contains(NaiveDate::from_ymd_opt(2026, 4, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRange {
    /// The name of the holiday.
    #[serde(default)]
    pub name: String,
    /// First day of the holiday (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the holiday (inclusive).
    pub end_date: NaiveDate,
    /// Regular or special.
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    /// Multiplier stored with the holiday.
    pub multiplier: Decimal,
    /// Whether employees are paid the daily rate when they do not work.
    #[serde(default = "default_paid")]
    pub paid: bool,
}

fn default_paid() -> bool {
    true
}

impl HolidayRange {
    /// Checks if a date falls within the holiday, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// An ordered list of holiday ranges for the active period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Holiday ranges sorted by start date.
    pub ranges: Vec<HolidayRange>,
}

impl HolidayCalendar {
    /// Creates a calendar, sorting the ranges by start date.
    pub fn new(ranges: Vec<HolidayRange>) -> Self {
        let mut sorted = ranges;
        sorted.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Self { ranges: sorted }
    }

    /// Returns the first holiday containing the date, if any.
    ///
    /// When ranges overlap, the one starting earliest wins.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_pay_engine::models::{HolidayCalendar, HolidayRange, HolidayType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 6, 12).unwrap();
    /// let calendar = HolidayCalendar::new(vec![HolidayRange {
    ///     name: "Independence Day".to_string(),
    ///     start_date: date,
    ///     end_date: date,
    ///     holiday_type: HolidayType::Regular,
    ///     multiplier: Decimal::ONE,
    ///     paid: true,
    /// }]);
    ///
    /// assert_eq!(calendar.holiday_on(date).unwrap().name, "Independence Day");
    /// assert!(calendar.holiday_on(date.succ_opt().unwrap()).is_none());
    /// ```
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&HolidayRange> {
        self.ranges.iter().find(|h| h.contains(date))
    }

    /// Checks if a date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_holiday(name: &str, start: &str, end: &str, holiday_type: HolidayType) -> HolidayRange {
        HolidayRange {
            name: name.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            holiday_type,
            multiplier: Decimal::ONE,
            paid: true,
        }
    }

    #[test]
    fn test_range_is_inclusive() {
        let holiday = make_holiday("Holy Week", "2026-04-02", "2026-04-04", HolidayType::Regular);
        assert!(!holiday.contains(make_date("2026-04-01")));
        assert!(holiday.contains(make_date("2026-04-02")));
        assert!(holiday.contains(make_date("2026-04-03")));
        assert!(holiday.contains(make_date("2026-04-04")));
        assert!(!holiday.contains(make_date("2026-04-05")));
    }

    #[test]
    fn test_calendar_sorts_ranges() {
        let calendar = HolidayCalendar::new(vec![
            make_holiday("Christmas", "2026-12-25", "2026-12-25", HolidayType::Regular),
            make_holiday("New Year", "2026-01-01", "2026-01-01", HolidayType::Regular),
        ]);
        assert_eq!(calendar.ranges[0].name, "New Year");
        assert_eq!(calendar.ranges[1].name, "Christmas");
    }

    #[test]
    fn test_overlapping_ranges_earliest_start_wins() {
        let calendar = HolidayCalendar::new(vec![
            make_holiday("All Saints", "2026-11-01", "2026-11-01", HolidayType::Special),
            make_holiday("Long Weekend", "2026-10-31", "2026-11-02", HolidayType::Special),
        ]);
        assert_eq!(
            calendar.holiday_on(make_date("2026-11-01")).unwrap().name,
            "Long Weekend"
        );
    }

    #[test]
    fn test_empty_calendar_has_no_holidays() {
        let calendar = HolidayCalendar::default();
        assert!(!calendar.is_holiday(make_date("2026-12-25")));
    }

    #[test]
    fn test_deserialize_holiday_range() {
        let yaml = r#"
name: Ninoy Aquino Day
start_date: 2026-08-21
end_date: 2026-08-21
type: special
multiplier: "0.3"
"#;
        let holiday: HolidayRange = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(holiday.holiday_type, HolidayType::Special);
        assert!(holiday.paid);
        assert_eq!(holiday.multiplier, Decimal::new(3, 1));
    }
}
