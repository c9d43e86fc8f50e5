//! Calculation logic for the Attendance Engine.
//!
//! This module contains the calendar classifier that decides working and
//! non-working days, the status resolver that assigns one attendance status per
//! employee per day, the aggregator that derives payable days and loss-of-pay
//! for a month, and the report builder that ties them together.

mod aggregator;
mod calendar;
mod monthly_report;
mod status_resolver;

pub use aggregator::{aggregate_month, week_off_count};
pub use calendar::{
    days_in_month, first_of_month, is_non_working_day, is_week_off, month_dates,
    saturday_occurrence,
};
pub use monthly_report::{build_monthly_report, build_team_reports};
pub use status_resolver::{ResolutionContext, StatusResolution, resolve_day, resolve_status};
