//! Attendance status resolution.
//!
//! This module decides the single [`AttendanceStatusCode`] for an employee on a
//! given date from their approved leave, the project's week-off policy, the
//! holiday table and the day's punch data.
//!
//! Rules are applied in strict priority order:
//!
//! 1. Dates after `today` are [`AttendanceStatusCode::Future`].
//! 2. An approved leave covering the date wins over everything else.
//! 3. Sundays under the exception policy are comp-off if worked, else holiday.
//! 4. Other non-working days are comp-off if worked, else holiday.
//! 5. Working days are present or absent from the punch data.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceStatusCode, AuditStep, HolidayCalendar, LeaveInterval, ProjectPolicy, PunchRecord,
};

use super::calendar::is_non_working_day;

/// Everything about the evaluation that does not vary per day.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// The evaluation date. Dates after it are future.
    pub today: NaiveDate,
    /// The week-off policy of the employee's project.
    pub policy: ProjectPolicy,
    /// The holiday table in effect.
    pub holidays: &'a HolidayCalendar,
}

/// The result of resolving one day, including the audit step.
#[derive(Debug, Clone)]
pub struct StatusResolution {
    /// The resolved status.
    pub status: AttendanceStatusCode,
    /// The audit step recording which rule fired.
    pub audit_step: AuditStep,
}

/// Resolves the attendance status for one employee on one date.
///
/// # Arguments
///
/// * `date` - The date to classify
/// * `leaves` - The employee's leave history; only approved intervals matter
/// * `punch` - The employee's punch record for `date`, if any
/// * `ctx` - The evaluation date, project policy and holiday table
///
/// # Errors
///
/// Returns [`EngineError::InvalidLeaveInterval`] if any supplied leave ends
/// before it starts, and [`EngineError::InvalidPunch`] if `punch` carries a
/// different date. Invalid input is never coerced to a status.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{ResolutionContext, resolve_status};
/// use attendance_engine::models::{AttendanceStatusCode, HolidayCalendar, ProjectPolicy};
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::default();
/// let ctx = ResolutionContext {
///     today: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
///     policy: ProjectPolicy::Standard,
///     holidays: &holidays,
/// };
///
/// // 2025-03-09 is a Sunday with no punches
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// assert_eq!(resolve_status(sunday, &[], None, &ctx)?, AttendanceStatusCode::Holiday);
///
/// // 2025-03-10 is a Monday with no punches
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// assert_eq!(resolve_status(monday, &[], None, &ctx)?, AttendanceStatusCode::Absent);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn resolve_status(
    date: NaiveDate,
    leaves: &[LeaveInterval],
    punch: Option<&PunchRecord>,
    ctx: &ResolutionContext<'_>,
) -> EngineResult<AttendanceStatusCode> {
    resolve_day(date, leaves, punch, ctx, 1).map(|resolution| resolution.status)
}

/// Resolves the attendance status for one day and records an audit step.
///
/// Behaves exactly like [`resolve_status`]; `step_number` sequences the
/// returned [`AuditStep`] within a report.
pub fn resolve_day(
    date: NaiveDate,
    leaves: &[LeaveInterval],
    punch: Option<&PunchRecord>,
    ctx: &ResolutionContext<'_>,
    step_number: u32,
) -> EngineResult<StatusResolution> {
    for leave in leaves {
        leave.validate()?;
    }
    if let Some(punch) = punch {
        if punch.date != date {
            return Err(EngineError::InvalidPunch {
                employee_id: punch.employee_id.clone(),
                date: punch.date,
                message: format!("record supplied for {}", date),
            });
        }
    }

    let has_punch_in = punch.is_some_and(|p| p.punch_in_time.is_some());
    let has_punch_out = punch.is_some_and(|p| p.punch_out_time.is_some());
    let worked_full_day = has_punch_in && has_punch_out;

    let (status, rule_id, rule_name, reasoning) = if date > ctx.today {
        (
            AttendanceStatusCode::Future,
            "future_date",
            "Future Date",
            format!("{} is after the evaluation date {}", date, ctx.today),
        )
    } else if let Some(leave) = leaves.iter().find(|l| l.is_approved() && l.covers(date)) {
        (
            AttendanceStatusCode::from_leave_type(&leave.leave_type),
            "approved_leave",
            "Approved Leave",
            format!(
                "Approved '{}' leave from {} to {} covers {}",
                leave.leave_type, leave.start_date, leave.end_date, date
            ),
        )
    } else if ctx.policy.is_exception() && date.weekday() == Weekday::Sun {
        (
            worked_off_day(worked_full_day),
            "exception_sunday",
            "Exception Policy Sunday",
            off_day_reasoning("Sunday under the exception policy", worked_full_day),
        )
    } else if is_non_working_day(date, ctx.policy, ctx.holidays) {
        let label = match ctx.holidays.holiday_on(date) {
            Some(holiday) => format!("listed holiday '{}'", holiday.description),
            None => format!("week-off under the {} policy", ctx.policy),
        };
        (
            worked_off_day(worked_full_day),
            "non_working_day",
            "Non-Working Day",
            off_day_reasoning(&label, worked_full_day),
        )
    } else {
        let marked_present = punch.is_some_and(PunchRecord::is_marked_present);
        let present = marked_present && has_punch_in && (has_punch_out || date == ctx.today);
        let reasoning = if present && !has_punch_out {
            "Marked present and punched in today; workday in progress".to_string()
        } else if present {
            "Marked present with punch-in and punch-out".to_string()
        } else {
            "Working day without a complete present punch record".to_string()
        };
        (
            if present {
                AttendanceStatusCode::Present
            } else {
                AttendanceStatusCode::Absent
            },
            "working_day",
            "Working Day",
            reasoning,
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "today": ctx.today.to_string(),
            "policy": ctx.policy.to_string(),
            "raw_status": punch.and_then(|p| p.status.clone()),
            "has_punch_in": has_punch_in,
            "has_punch_out": has_punch_out
        }),
        output: serde_json::json!({
            "status": String::from(status.clone())
        }),
        reasoning,
    };

    Ok(StatusResolution { status, audit_step })
}

fn worked_off_day(worked_full_day: bool) -> AttendanceStatusCode {
    if worked_full_day {
        AttendanceStatusCode::CompOff
    } else {
        AttendanceStatusCode::Holiday
    }
}

fn off_day_reasoning(label: &str, worked_full_day: bool) -> String {
    if worked_full_day {
        format!("Worked a full day on a {}; comp-off earned", label)
    } else {
        format!("No complete punch record on a {}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Holiday, LeaveStatus};
    use chrono::{DateTime, FixedOffset, NaiveDateTime};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> DateTime<FixedOffset> {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn holidays() -> HolidayCalendar {
        HolidayCalendar::new(vec![Holiday {
            date: make_date("2025-03-14"),
            description: "Holi".to_string(),
        }])
    }

    fn punch(date: &str, status: Option<&str>, punch_in: bool, punch_out: bool) -> PunchRecord {
        PunchRecord {
            employee_id: "EMP001".to_string(),
            date: make_date(date),
            status: status.map(str::to_string),
            punch_in_time: punch_in.then(|| make_datetime(date, "09:00:00")),
            punch_out_time: punch_out.then(|| make_datetime(date, "18:00:00")),
        }
    }

    fn leave(leave_type: &str, start: &str, end: &str, status: LeaveStatus) -> LeaveInterval {
        LeaveInterval {
            employee_id: "EMP001".to_string(),
            leave_type: leave_type.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status,
        }
    }

    fn resolve(
        date: &str,
        leaves: &[LeaveInterval],
        punch: Option<&PunchRecord>,
        policy: ProjectPolicy,
        today: &str,
    ) -> AttendanceStatusCode {
        let holidays = holidays();
        let ctx = ResolutionContext {
            today: make_date(today),
            policy,
            holidays: &holidays,
        };
        resolve_status(make_date(date), leaves, punch, &ctx).unwrap()
    }

    // ==========================================================================
    // RES-001: Future dates short-circuit every other rule
    // ==========================================================================
    #[test]
    fn test_res_001_future_date_wins_over_leave_and_punches() {
        let leaves = vec![leave("SL", "2025-03-20", "2025-03-21", LeaveStatus::Approved)];
        let p = punch("2025-03-21", Some("Present"), true, true);
        let status = resolve(
            "2025-03-21",
            &leaves,
            Some(&p),
            ProjectPolicy::Standard,
            "2025-03-20",
        );
        assert_eq!(status, AttendanceStatusCode::Future);
    }

    // ==========================================================================
    // RES-002: Approved leave on a Sunday returns the leave type
    // ==========================================================================
    #[test]
    fn test_res_002_sick_leave_overrides_sunday() {
        let leaves = vec![leave("SL", "2025-03-08", "2025-03-10", LeaveStatus::Approved)];
        // 2025-03-09 is a Sunday
        let status = resolve("2025-03-09", &leaves, None, ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::SickLeave);
    }

    // ==========================================================================
    // RES-003: Comp-off leave spellings normalise even on a holiday
    // ==========================================================================
    #[test]
    fn test_res_003_comp_off_leave_on_holiday() {
        let leaves = vec![leave(" Comp Off ", "2025-03-14", "2025-03-14", LeaveStatus::Approved)];
        let status = resolve("2025-03-14", &leaves, None, ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::CompOffLeave);
    }

    // ==========================================================================
    // RES-004: Pending and rejected leave are ignored
    // ==========================================================================
    #[test]
    fn test_res_004_unapproved_leave_ignored() {
        let leaves = vec![
            leave("EL", "2025-03-10", "2025-03-10", LeaveStatus::Pending),
            leave("CL", "2025-03-10", "2025-03-10", LeaveStatus::Rejected),
        ];
        let status = resolve("2025-03-10", &leaves, None, ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::Absent);
    }

    // ==========================================================================
    // RES-005: Custom leave types pass through unchanged
    // ==========================================================================
    #[test]
    fn test_res_005_custom_leave_type_passes_through() {
        let leaves = vec![leave("Maternity", "2025-03-01", "2025-03-31", LeaveStatus::Approved)];
        let status = resolve("2025-03-10", &leaves, None, ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::Leave("Maternity".to_string()));
    }

    // ==========================================================================
    // RES-006: First approved match wins when intervals overlap
    // ==========================================================================
    #[test]
    fn test_res_006_first_overlapping_leave_wins() {
        let leaves = vec![
            leave("EL", "2025-03-10", "2025-03-12", LeaveStatus::Approved),
            leave("CL", "2025-03-11", "2025-03-11", LeaveStatus::Approved),
        ];
        let status = resolve("2025-03-11", &leaves, None, ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::EarnedLeave);
    }

    // ==========================================================================
    // RES-007: Worked Sunday under the exception policy is comp-off
    // ==========================================================================
    #[test]
    fn test_res_007_exception_policy_worked_sunday() {
        let p = punch("2025-03-09", None, true, true);
        let status = resolve("2025-03-09", &[], Some(&p), ProjectPolicy::Exception, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::CompOff);
    }

    // ==========================================================================
    // RES-008: Sunday with only a punch-in is a holiday
    // ==========================================================================
    #[test]
    fn test_res_008_sunday_half_punch_is_holiday() {
        let p = punch("2025-03-09", Some("Present"), true, false);
        for policy in [ProjectPolicy::Standard, ProjectPolicy::Exception] {
            let status = resolve("2025-03-09", &[], Some(&p), policy, "2025-03-31");
            assert_eq!(status, AttendanceStatusCode::Holiday);
        }
    }

    // ==========================================================================
    // RES-009: 2nd Saturday differs by policy
    // ==========================================================================
    #[test]
    fn test_res_009_second_saturday_by_policy() {
        // 2025-03-08 is the 2nd Saturday of March
        let standard = resolve("2025-03-08", &[], None, ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(standard, AttendanceStatusCode::Holiday);

        let exception = resolve("2025-03-08", &[], None, ProjectPolicy::Exception, "2025-03-31");
        assert_eq!(exception, AttendanceStatusCode::Absent);

        let p = punch("2025-03-08", Some("Present"), true, true);
        let worked = resolve("2025-03-08", &[], Some(&p), ProjectPolicy::Exception, "2025-03-31");
        assert_eq!(worked, AttendanceStatusCode::Present);

        let comp_off = resolve("2025-03-08", &[], Some(&p), ProjectPolicy::Standard, "2025-03-31");
        assert_eq!(comp_off, AttendanceStatusCode::CompOff);
    }

    // ==========================================================================
    // RES-010: Listed holiday under the exception policy
    // ==========================================================================
    #[test]
    fn test_res_010_listed_holiday_under_exception_policy() {
        let status = resolve("2025-03-14", &[], None, ProjectPolicy::Exception, "2025-03-31");
        assert_eq!(status, AttendanceStatusCode::Holiday);
    }

    // ==========================================================================
    // RES-011: Present requires raw status, punch-in and punch-out
    // ==========================================================================
    #[test]
    fn test_res_011_present_rules_on_past_day() {
        let date = "2025-03-10";
        let today = "2025-03-31";
        let policy = ProjectPolicy::Standard;

        let full = punch(date, Some("Present"), true, true);
        assert_eq!(resolve(date, &[], Some(&full), policy, today), AttendanceStatusCode::Present);

        let no_out = punch(date, Some("Present"), true, false);
        assert_eq!(resolve(date, &[], Some(&no_out), policy, today), AttendanceStatusCode::Absent);

        let no_status = punch(date, None, true, true);
        assert_eq!(resolve(date, &[], Some(&no_status), policy, today), AttendanceStatusCode::Absent);

        let no_in = punch(date, Some("Present"), false, true);
        assert_eq!(resolve(date, &[], Some(&no_in), policy, today), AttendanceStatusCode::Absent);

        assert_eq!(resolve(date, &[], None, policy, today), AttendanceStatusCode::Absent);
    }

    // ==========================================================================
    // RES-012: In-progress workday today is present
    // ==========================================================================
    #[test]
    fn test_res_012_in_progress_today_is_present() {
        let p = punch("2025-03-10", Some("Present"), true, false);
        let status = resolve("2025-03-10", &[], Some(&p), ProjectPolicy::Standard, "2025-03-10");
        assert_eq!(status, AttendanceStatusCode::Present);
    }

    // ==========================================================================
    // RES-013: Reversed leave interval is rejected
    // ==========================================================================
    #[test]
    fn test_res_013_reversed_leave_rejected() {
        let holidays = holidays();
        let ctx = ResolutionContext {
            today: make_date("2025-03-31"),
            policy: ProjectPolicy::Standard,
            holidays: &holidays,
        };
        let leaves = vec![leave("EL", "2025-03-12", "2025-03-10", LeaveStatus::Pending)];
        let result = resolve_status(make_date("2025-03-20"), &leaves, None, &ctx);
        assert!(matches!(
            result,
            Err(EngineError::InvalidLeaveInterval { .. })
        ));
    }

    // ==========================================================================
    // RES-014: Punch record for another date is rejected
    // ==========================================================================
    #[test]
    fn test_res_014_mismatched_punch_rejected() {
        let holidays = holidays();
        let ctx = ResolutionContext {
            today: make_date("2025-03-31"),
            policy: ProjectPolicy::Standard,
            holidays: &holidays,
        };
        let p = punch("2025-03-11", Some("Present"), true, true);
        let result = resolve_status(make_date("2025-03-10"), &[], Some(&p), &ctx);
        match result {
            Err(EngineError::InvalidPunch { date, .. }) => {
                assert_eq!(date, make_date("2025-03-11"));
            }
            other => panic!("Expected InvalidPunch, got {:?}", other),
        }
    }

    // ==========================================================================
    // RES-015: Audit step names the rule that fired
    // ==========================================================================
    #[test]
    fn test_res_015_audit_step_records_rule() {
        let holidays = holidays();
        let ctx = ResolutionContext {
            today: make_date("2025-03-31"),
            policy: ProjectPolicy::Standard,
            holidays: &holidays,
        };
        let p = punch("2025-03-14", Some("Present"), true, true);
        let resolution = resolve_day(make_date("2025-03-14"), &[], Some(&p), &ctx, 7).unwrap();

        assert_eq!(resolution.status, AttendanceStatusCode::CompOff);
        assert_eq!(resolution.audit_step.step_number, 7);
        assert_eq!(resolution.audit_step.rule_id, "non_working_day");
        assert_eq!(resolution.audit_step.output["status"], "CF");
        assert_eq!(resolution.audit_step.input["has_punch_out"], true);
        assert!(resolution.audit_step.reasoning.contains("Holi"));
    }
}
