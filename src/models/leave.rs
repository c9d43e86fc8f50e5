//! Leave interval model and related types.
//!
//! This module defines the [`LeaveInterval`] struct and [`LeaveStatus`] enum
//! for representing leave applications returned by the leave history API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The approval state of a leave application.
///
/// Only [`LeaveStatus::Approved`] intervals affect attendance status. Status
/// strings match case-sensitively; any other spelling, `"approved"` included,
/// reads as [`LeaveStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// The leave was approved.
    Approved,
    /// The leave is awaiting a decision.
    Pending,
    /// The leave was rejected.
    Rejected,
    /// The leave was withdrawn after being applied for.
    Cancelled,
    /// Any other status string sent by the API.
    #[serde(other)]
    Unknown,
}

/// A leave application covering an inclusive range of dates.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveInterval, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveInterval {
///     employee_id: "EMP001".to_string(),
///     leave_type: "SL".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
///     status: LeaveStatus::Approved,
/// };
///
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()));
/// assert!(!leave.covers(NaiveDate::from_ymd_opt(2025, 3, 13).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// The employee who applied for the leave.
    pub employee_id: String,
    /// The leave type as entered (e.g., "EL", "SL", "CL", "Comp Off").
    pub leave_type: String,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The approval state of the application.
    pub status: LeaveStatus,
}

impl LeaveInterval {
    /// Checks that the interval does not end before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeaveInterval`] when `end_date < start_date`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidLeaveInterval {
                employee_id: self.employee_id.clone(),
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns true if `date` lies within the interval, inclusive of both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the leave was approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns the number of calendar days the interval spans.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
