//! Payable-days and leave aggregation.
//!
//! This module folds a month of resolved statuses into a [`MonthlySummary`]
//! and counts calendar week-offs for a month.

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceStatusCode, MonthlySummary, ProjectPolicy, StatusCounts};

use super::calendar::{days_in_month, is_week_off, month_dates};

/// Aggregates one employee's daily statuses for a month.
///
/// `daily_statuses` holds one entry per calendar day in date order. Entries
/// that are [`AttendanceStatusCode::Future`] are excluded from every count and
/// tallied in `future_days`. Loss-of-pay is computed against the calendar
/// length of the month, not the length of the input.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] for an invalid month and
/// [`EngineError::InvalidInput`] if there are more statuses than days.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate_month;
/// use attendance_engine::models::{AttendanceStatusCode, ProjectPolicy};
///
/// let statuses = vec![
///     AttendanceStatusCode::Present,
///     AttendanceStatusCode::Absent,
///     AttendanceStatusCode::SickLeave,
/// ];
/// let summary = aggregate_month(2025, 3, &statuses, ProjectPolicy::Standard)?;
/// assert_eq!(summary.payable_days, 2);
/// assert_eq!(summary.lop, 29);
/// assert_eq!(summary.week_off_count, 7);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn aggregate_month(
    year: i32,
    month: u32,
    daily_statuses: &[AttendanceStatusCode],
    policy: ProjectPolicy,
) -> EngineResult<MonthlySummary> {
    let days = days_in_month(year, month)?;
    if daily_statuses.len() > days as usize {
        return Err(EngineError::InvalidInput {
            message: format!(
                "{} daily statuses supplied for {}-{:02}, which has {} days",
                daily_statuses.len(),
                year,
                month,
                days
            ),
        });
    }

    let (counts, future_days, payable_days) = daily_statuses.iter().fold(
        (StatusCounts::default(), 0u32, 0u32),
        |(mut counts, future, payable), status| {
            if status.is_future() {
                return (counts, future + 1, payable);
            }
            counts.record(status);
            (counts, future, payable + u32::from(status.is_payable()))
        },
    );

    Ok(MonthlySummary {
        year,
        month,
        days_in_month: days,
        counts,
        future_days,
        week_off_count: week_off_count(year, month, policy)?,
        payable_days,
        lop: days - payable_days,
    })
}

/// Counts the calendar week-offs in a month under a policy.
///
/// Independent of punch data and of the holiday table: Sundays plus the 2nd
/// and 4th Saturdays for [`ProjectPolicy::Standard`], Sundays only for
/// [`ProjectPolicy::Exception`].
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::week_off_count;
/// use attendance_engine::models::ProjectPolicy;
///
/// // March 2025 has 5 Sundays and Saturdays on the 8th and 22nd
/// assert_eq!(week_off_count(2025, 3, ProjectPolicy::Standard).unwrap(), 7);
/// assert_eq!(week_off_count(2025, 3, ProjectPolicy::Exception).unwrap(), 5);
/// ```
pub fn week_off_count(year: i32, month: u32, policy: ProjectPolicy) -> EngineResult<u32> {
    let count = month_dates(year, month)?
        .into_iter()
        .filter(|date| is_week_off(*date, policy))
        .count();
    Ok(count as u32)
}
