//! Monthly report building.
//!
//! This module runs the status resolver once per calendar day for an employee,
//! aggregates the result, and packages everything into a [`MonthlyReport`].

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AttendanceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceStatusCode, AuditTrace, DailyStatus, EmployeeMonthData, LeaveInterval,
    MonthlyReport, PunchRecord, RosterEntry,
};

use super::aggregator::aggregate_month;
use super::calendar::month_dates;
use super::status_resolver::{ResolutionContext, resolve_day};

/// Builds the attendance report for one employee-month.
///
/// Punch records and leave intervals belonging to other employees are ignored,
/// as are punch records outside the month. The project policy is looked up
/// from `config` by the employee's project name.
///
/// # Errors
///
/// - [`EngineError::InvalidMonth`] for an invalid month
/// - [`EngineError::DuplicatePunch`] if two punch records share a date
/// - [`EngineError::InvalidLeaveInterval`] for a reversed leave interval
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_monthly_report;
/// use attendance_engine::config::{AttendanceConfig, EngineMetadata, FetchSettings};
/// use attendance_engine::models::{EmployeeMonthData, HolidayCalendar, RosterEntry};
/// use chrono::NaiveDate;
///
/// let config = AttendanceConfig::new(
///     EngineMetadata {
///         code: "TEST".to_string(),
///         name: "Test".to_string(),
///         version: "1".to_string(),
///         source: "inline".to_string(),
///     },
///     HolidayCalendar::default(),
///     vec![],
///     FetchSettings::default(),
/// );
/// let employee = RosterEntry {
///     employee_id: "EMP001".to_string(),
///     full_name: "Asha Rao".to_string(),
///     designation: "Technician".to_string(),
///     project_name: "Facility".to_string(),
/// };
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
/// let report = build_monthly_report(&employee, 2025, 3, &EmployeeMonthData::default(), &config, today)?;
///
/// assert_eq!(report.daily.len(), 31);
/// assert_eq!(report.summary.counts.holiday, 7);
/// assert_eq!(report.summary.counts.absent, 24);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn build_monthly_report(
    employee: &RosterEntry,
    year: i32,
    month: u32,
    data: &EmployeeMonthData,
    config: &AttendanceConfig,
    today: NaiveDate,
) -> EngineResult<MonthlyReport> {
    let start_time = Instant::now();

    let policy = config.policy_for_project(&employee.project_name);
    let holidays = config.holidays();
    let ctx = ResolutionContext {
        today,
        policy,
        holidays,
    };

    let dates = month_dates(year, month)?;
    let leaves: Vec<LeaveInterval> = data
        .leaves
        .iter()
        .filter(|leave| leave.employee_id == employee.employee_id)
        .cloned()
        .collect();
    let punches = index_punches(&employee.employee_id, &data.punches, &dates)?;

    let mut daily = Vec::with_capacity(dates.len());
    let mut steps = Vec::with_capacity(dates.len());
    for (index, date) in dates.into_iter().enumerate() {
        let punch = punches.get(&date).copied();
        let resolution = resolve_day(date, &leaves, punch, &ctx, index as u32 + 1)?;
        daily.push(DailyStatus {
            date,
            status: resolution.status,
            holiday: holidays.holiday_on(date).map(|h| h.description.clone()),
        });
        steps.push(resolution.audit_step);
    }

    let statuses: Vec<AttendanceStatusCode> = daily.iter().map(|d| d.status.clone()).collect();
    let summary = aggregate_month(year, month, &statuses, policy)?;

    let duration = start_time.elapsed();
    info!(
        employee_id = %employee.employee_id,
        year,
        month,
        policy = %policy,
        payable_days = summary.payable_days,
        lop = summary.lop,
        duration_us = duration.as_micros() as u64,
        "Monthly report built"
    );

    Ok(MonthlyReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee: employee.clone(),
        policy,
        year,
        month,
        daily,
        summary,
        audit_trace: AuditTrace {
            steps,
            duration_us: duration.as_micros() as u64,
        },
    })
}

/// Builds reports for every employee on a roster.
///
/// `data_by_employee` is keyed by employee id, as returned by
/// [`fetch_all`](crate::fetch::fetch_all). Employees with no entry are
/// reported with no punches and no leave. Reports are returned in roster order;
/// the first error aborts the batch.
pub fn build_team_reports(
    roster: &[RosterEntry],
    data_by_employee: &HashMap<String, EmployeeMonthData>,
    year: i32,
    month: u32,
    config: &AttendanceConfig,
    today: NaiveDate,
) -> EngineResult<Vec<MonthlyReport>> {
    let empty = EmployeeMonthData::default();
    roster
        .iter()
        .map(|employee| {
            let data = match data_by_employee.get(&employee.employee_id) {
                Some(data) => data,
                None => {
                    warn!(
                        employee_id = %employee.employee_id,
                        "No attendance data fetched; reporting without punches or leave"
                    );
                    &empty
                }
            };
            build_monthly_report(employee, year, month, data, config, today)
        })
        .collect()
}

/// Indexes an employee's punch records within `dates` by date.
fn index_punches<'a>(
    employee_id: &str,
    punches: &'a [PunchRecord],
    dates: &[NaiveDate],
) -> EngineResult<BTreeMap<NaiveDate, &'a PunchRecord>> {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return Ok(BTreeMap::new());
    };

    let mut index = BTreeMap::new();
    for punch in punches
        .iter()
        .filter(|p| p.employee_id == employee_id && p.date >= *first && p.date <= *last)
    {
        if index.insert(punch.date, punch).is_some() {
            return Err(EngineError::DuplicatePunch {
                employee_id: employee_id.to_string(),
                date: punch.date,
            });
        }
    }
    Ok(index)
}
