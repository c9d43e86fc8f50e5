//! Monthly report models for the Attendance Engine.
//!
//! This module contains the [`MonthlyReport`] type and its associated structures
//! that capture all outputs for one employee-month: the daily attendance grid,
//! the aggregated summary, and an audit trace of every classification decision.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceStatusCode, ProjectPolicy, RosterEntry};

/// One cell of the monthly attendance grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatus {
    /// The calendar date.
    pub date: NaiveDate,
    /// The resolved status for the date.
    pub status: AttendanceStatusCode,
    /// The name of the listed holiday on this date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
}

/// Per-status day counts for a month.
///
/// Future days are never counted here.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceStatusCode, StatusCounts};
///
/// let mut counts = StatusCounts::default();
/// counts.record(&AttendanceStatusCode::Present);
/// counts.record(&AttendanceStatusCode::Leave("ML".to_string()));
/// assert_eq!(counts.present, 1);
/// assert_eq!(counts.other_leave, 1);
/// assert_eq!(counts.total(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Days marked present (P).
    pub present: u32,
    /// Days marked absent (A).
    pub absent: u32,
    /// Non-working days not worked (H).
    pub holiday: u32,
    /// Non-working days worked (CF).
    pub comp_off: u32,
    /// Comp-off leave days (CFL).
    pub comp_off_leave: u32,
    /// Earned leave days (EL).
    pub earned_leave: u32,
    /// Sick leave days (SL).
    pub sick_leave: u32,
    /// Casual leave days (CL).
    pub casual_leave: u32,
    /// Approved leave days of any other type.
    pub other_leave: u32,
}

impl StatusCounts {
    /// Adds one day with the given status. Future days are ignored.
    pub fn record(&mut self, status: &AttendanceStatusCode) {
        match status {
            AttendanceStatusCode::Present => self.present += 1,
            AttendanceStatusCode::Absent => self.absent += 1,
            AttendanceStatusCode::Holiday => self.holiday += 1,
            AttendanceStatusCode::CompOff => self.comp_off += 1,
            AttendanceStatusCode::CompOffLeave => self.comp_off_leave += 1,
            AttendanceStatusCode::EarnedLeave => self.earned_leave += 1,
            AttendanceStatusCode::SickLeave => self.sick_leave += 1,
            AttendanceStatusCode::CasualLeave => self.casual_leave += 1,
            AttendanceStatusCode::Leave(_) => self.other_leave += 1,
            AttendanceStatusCode::Future => {}
        }
    }

    /// Returns the number of counted days across all buckets.
    pub fn total(&self) -> u32 {
        self.present
            + self.absent
            + self.holiday
            + self.comp_off
            + self.comp_off_leave
            + self.earned_leave
            + self.sick_leave
            + self.casual_leave
            + self.other_leave
    }
}

/// Aggregated attendance for one employee over one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The year of the month.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// Per-status counts over the non-future days.
    pub counts: StatusCounts,
    /// Number of entries skipped because they were after the evaluation date.
    pub future_days: u32,
    /// Calendar week-offs in the month under the employee's policy.
    pub week_off_count: u32,
    /// Days credited for payroll.
    pub payable_days: u32,
    /// Loss-of-pay days: `days_in_month - payable_days`.
    pub lop: u32,
}

/// A single step in the audit trace recording a classification decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that fired.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a monthly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of classification steps, one per day.
    pub steps: Vec<AuditStep>,
    /// The total build duration in microseconds.
    pub duration_us: u64,
}

/// The complete attendance report for one employee-month.
///
/// This is the value handed to the rendering and export layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee: RosterEntry,
    /// The week-off policy applied to the employee's project.
    pub policy: ProjectPolicy,
    /// The year of the report.
    pub year: i32,
    /// The month of the report (1-12).
    pub month: u32,
    /// One entry per calendar day, in date order.
    pub daily: Vec<DailyStatus>,
    /// Aggregated counts for the month.
    pub summary: MonthlySummary,
    /// Audit trace of every classification decision.
    pub audit_trace: AuditTrace,
}
