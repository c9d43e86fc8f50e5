//! Punch record model.
//!
//! This module defines the [`PunchRecord`] struct for representing one day of
//! raw biometric/mobile attendance data for an employee.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// The raw status string the attendance API uses for a marked-present day.
pub const RAW_STATUS_PRESENT: &str = "Present";

/// One day of raw attendance data for an employee.
///
/// At most one record exists per (employee, date).
///
/// # Example
///
/// ```
/// use attendance_engine::models::PunchRecord;
/// use chrono::{DateTime, NaiveDate};
///
/// let punch = PunchRecord {
///     employee_id: "EMP001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     status: Some("Present".to_string()),
///     punch_in_time: DateTime::parse_from_rfc3339("2025-03-10T09:02:00+05:30").ok(),
///     punch_out_time: None,
/// };
///
/// assert!(punch.is_marked_present());
/// assert!(!punch.has_both_punches());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The attendance date.
    pub date: NaiveDate,
    /// The raw status string sent by the API (e.g., "Present").
    #[serde(default)]
    pub status: Option<String>,
    /// When the employee punched in.
    #[serde(default, deserialize_with = "deser_punch_time")]
    pub punch_in_time: Option<DateTime<FixedOffset>>,
    /// When the employee punched out.
    #[serde(default, deserialize_with = "deser_punch_time")]
    pub punch_out_time: Option<DateTime<FixedOffset>>,
}

impl PunchRecord {
    /// Returns true if the raw status is exactly `"Present"`.
    pub fn is_marked_present(&self) -> bool {
        self.status.as_deref() == Some(RAW_STATUS_PRESENT)
    }

    /// Returns true if both punch-in and punch-out are recorded.
    pub fn has_both_punches(&self) -> bool {
        self.punch_in_time.is_some() && self.punch_out_time.is_some()
    }
}

/// Accepts RFC 3339 timestamps with an offset or `Z`, and offset-less
/// timestamps, which are taken as UTC.
fn deser_punch_time<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_punch_time(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid punch timestamp '{}'", raw)))
}

fn parse_punch_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc().fixed_offset())
    })
}
