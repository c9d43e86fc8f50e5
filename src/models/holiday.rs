//! Government holiday models.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types used by the
//! calendar classifier to decide whether a date is an observed holiday.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single government holiday.
///
/// Holidays are exact dates, not recurring rules; each year's entries are
/// maintained by hand in `holidays.yaml`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     description: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    pub description: String,
}

/// The fixed holiday table in effect for a run.
///
/// Lookups are by exact date. Dates outside the table's coverage never match.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
///     description: "Gandhi Jayanti".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 10, 2).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 10, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays.
    ///
    /// If the list contains the same date twice, the later entry wins. The
    /// configuration loader rejects such lists before they get here.
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self {
            holidays: holidays.into_iter().map(|h| (h.date, h)).collect(),
        }
    }

    /// Returns true if `date` is listed as a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday listed for `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Returns all holidays falling within the inclusive range, in date order.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Holiday> {
        if end < start {
            return Vec::new();
        }
        self.holidays.range(start..=end).map(|(_, h)| h).collect()
    }

    /// Returns the number of holidays in the table.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
