//! Calendar and holiday classification.
//!
//! This module provides utilities for deciding whether a date is a working day
//! under a project's week-off policy, and for enumerating the days of a month.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, ProjectPolicy};

/// Returns which occurrence of its weekday `date` is within its month (1-5).
///
/// For a Saturday this is `floor((day - 1) / 7) + 1`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::saturday_occurrence;
/// use chrono::NaiveDate;
///
/// // 2025-03-08 is the second Saturday of March 2025
/// assert_eq!(saturday_occurrence(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()), 2);
/// ```
pub fn saturday_occurrence(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Determines whether a date is a week-off under the weekday rule alone.
///
/// - [`ProjectPolicy::Standard`]: Sundays and the 2nd and 4th Saturdays
/// - [`ProjectPolicy::Exception`]: Sundays only
///
/// The holiday table is not consulted.
pub fn is_week_off(date: NaiveDate, policy: ProjectPolicy) -> bool {
    match date.weekday() {
        Weekday::Sun => true,
        Weekday::Sat => match policy {
            ProjectPolicy::Standard => matches!(saturday_occurrence(date), 2 | 4),
            ProjectPolicy::Exception => false,
        },
        _ => false,
    }
}

/// Determines whether a date is non-working for an employee.
///
/// A date is non-working if it is a week-off under `policy` (see
/// [`is_week_off`]) or if it is listed in `holidays`. Listed holidays are
/// observed under both policies, so an exception-policy project still gets a
/// listed holiday that falls on a weekday or a Saturday.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_non_working_day;
/// use attendance_engine::models::{Holiday, HolidayCalendar, ProjectPolicy};
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     description: "Holi".to_string(),
/// }]);
///
/// // 2025-03-08 is the 2nd Saturday
/// let second_saturday = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
/// assert!(is_non_working_day(second_saturday, ProjectPolicy::Standard, &holidays));
/// assert!(!is_non_working_day(second_saturday, ProjectPolicy::Exception, &holidays));
///
/// // Holi (a Friday) is observed under both policies
/// let holi = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// assert!(is_non_working_day(holi, ProjectPolicy::Exception, &holidays));
/// ```
pub fn is_non_working_day(
    date: NaiveDate,
    policy: ProjectPolicy,
    holidays: &HolidayCalendar,
) -> bool {
    is_week_off(date, policy) || holidays.is_holiday(date)
}

/// Returns the first day of the given month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] if `month` is not 1-12 or the year is
/// outside the supported date range.
pub fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { year, month })
}

/// Returns the number of calendar days in the given month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2025, 2).unwrap(), 28);
/// assert!(days_in_month(2025, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_first = first_of_month(next_year, next_month)
        .map_err(|_| EngineError::InvalidMonth { year, month })?;
    Ok((next_first - first).num_days() as u32)
}

/// Returns every date of the given month, in order.
pub fn month_dates(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;
    Ok(first.iter_days().take(days as usize).collect())
}
