//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod leave;
mod month_data;
mod punch;
mod report;
mod status;

pub use employee::{ProjectPolicy, RosterEntry};
pub use holiday::{Holiday, HolidayCalendar};
pub use leave::{LeaveInterval, LeaveStatus};
pub use month_data::EmployeeMonthData;
pub use punch::{PunchRecord, RAW_STATUS_PRESENT};
pub use report::{AuditStep, AuditTrace, DailyStatus, MonthlyReport, MonthlySummary, StatusCounts};
pub use status::{AttendanceStatusCode, normalize_leave_type};
