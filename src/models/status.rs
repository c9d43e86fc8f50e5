//! Attendance status codes.
//!
//! This module contains the [`AttendanceStatusCode`] type produced once per
//! employee per day by the status resolver.

use serde::{Deserialize, Serialize};

/// Normalised leave-type spellings that denote comp-off leave.
const COMP_OFF_LEAVE_TYPES: [&str; 3] = ["compoff", "cfl", "compoffleave"];

/// Wire prefix for pass-through leave types that would otherwise read back as
/// another status.
const LEAVE_WIRE_PREFIX: &str = "Leave:";

/// Wire forms owned by the named variants, including the empty future code.
const RESERVED_CODES: [&str; 9] = ["P", "A", "H", "CF", "CFL", "EL", "SL", "CL", ""];

/// The attendance status of an employee on a single day.
///
/// Serialised as its short code (`"P"`, `"A"`, `"H"`, ...). Future days
/// serialise as the empty string. Leave types that are not one of the named
/// variants pass through trimmed as [`AttendanceStatusCode::Leave`] and
/// serialise as entered, unless the text is empty, equals a short code or
/// starts with `Leave:`, in which case it is written as `Leave:<type>`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatusCode;
///
/// assert_eq!(AttendanceStatusCode::CompOffLeave.code(), "CFL");
/// assert_eq!(AttendanceStatusCode::from_leave_type("Comp Off"), AttendanceStatusCode::CompOffLeave);
/// assert_eq!(AttendanceStatusCode::from_leave_type("SL"), AttendanceStatusCode::SickLeave);
/// assert_eq!(
///     AttendanceStatusCode::from_leave_type("Maternity"),
///     AttendanceStatusCode::Leave("Maternity".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AttendanceStatusCode {
    /// Worked a working day (P).
    Present,
    /// Did not work a working day (A).
    Absent,
    /// Non-working day not worked (H).
    Holiday,
    /// Worked a non-working day (CF).
    CompOff,
    /// Leave drawn from an earned comp-off balance (CFL).
    CompOffLeave,
    /// Earned leave (EL).
    EarnedLeave,
    /// Sick leave (SL).
    SickLeave,
    /// Casual leave (CL).
    CasualLeave,
    /// Any other approved leave type, carried as entered.
    Leave(String),
    /// A date after the evaluation date; carries no status.
    Future,
}

impl AttendanceStatusCode {
    /// Returns the short code shown in attendance grids.
    ///
    /// A pass-through leave type is shown as entered, so this is not always
    /// unique; use the serialised form to store a status.
    pub fn code(&self) -> &str {
        match self {
            AttendanceStatusCode::Present => "P",
            AttendanceStatusCode::Absent => "A",
            AttendanceStatusCode::Holiday => "H",
            AttendanceStatusCode::CompOff => "CF",
            AttendanceStatusCode::CompOffLeave => "CFL",
            AttendanceStatusCode::EarnedLeave => "EL",
            AttendanceStatusCode::SickLeave => "SL",
            AttendanceStatusCode::CasualLeave => "CL",
            AttendanceStatusCode::Leave(raw) => raw,
            AttendanceStatusCode::Future => "",
        }
    }

    /// Parses a short code back into a status.
    ///
    /// The empty string is [`AttendanceStatusCode::Future`]; a `Leave:` prefix
    /// and unknown codes are treated as pass-through leave types.
    pub fn from_code(code: &str) -> Self {
        if let Some(raw) = code.strip_prefix(LEAVE_WIRE_PREFIX) {
            return AttendanceStatusCode::Leave(raw.to_string());
        }
        match code {
            "P" => AttendanceStatusCode::Present,
            "A" => AttendanceStatusCode::Absent,
            "H" => AttendanceStatusCode::Holiday,
            "CF" => AttendanceStatusCode::CompOff,
            "CFL" => AttendanceStatusCode::CompOffLeave,
            "EL" => AttendanceStatusCode::EarnedLeave,
            "SL" => AttendanceStatusCode::SickLeave,
            "CL" => AttendanceStatusCode::CasualLeave,
            "" => AttendanceStatusCode::Future,
            other => AttendanceStatusCode::Leave(other.to_string()),
        }
    }

    /// Maps an approved leave's type to the status it produces.
    ///
    /// Comp-off spellings (after [`normalize_leave_type`]) become
    /// [`AttendanceStatusCode::CompOffLeave`]. `EL`, `SL` and `CL` map to their
    /// named variants. Everything else passes through with surrounding
    /// whitespace removed.
    pub fn from_leave_type(leave_type: &str) -> Self {
        let normalized = normalize_leave_type(leave_type);
        if COMP_OFF_LEAVE_TYPES.contains(&normalized.as_str()) {
            return AttendanceStatusCode::CompOffLeave;
        }
        match leave_type.trim() {
            "EL" => AttendanceStatusCode::EarnedLeave,
            "SL" => AttendanceStatusCode::SickLeave,
            "CL" => AttendanceStatusCode::CasualLeave,
            trimmed => AttendanceStatusCode::Leave(trimmed.to_string()),
        }
    }

    /// Returns true if the day is credited for payroll.
    ///
    /// Pass-through leave types are not payable.
    pub fn is_payable(&self) -> bool {
        matches!(
            self,
            AttendanceStatusCode::Present
                | AttendanceStatusCode::Holiday
                | AttendanceStatusCode::CompOff
                | AttendanceStatusCode::CompOffLeave
                | AttendanceStatusCode::EarnedLeave
                | AttendanceStatusCode::SickLeave
                | AttendanceStatusCode::CasualLeave
        )
    }

    /// Returns true for [`AttendanceStatusCode::Future`].
    pub fn is_future(&self) -> bool {
        *self == AttendanceStatusCode::Future
    }
}

impl std::fmt::Display for AttendanceStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<AttendanceStatusCode> for String {
    fn from(status: AttendanceStatusCode) -> Self {
        match status {
            AttendanceStatusCode::Leave(raw)
                if RESERVED_CODES.contains(&raw.as_str()) || raw.starts_with(LEAVE_WIRE_PREFIX) =>
            {
                format!("{}{}", LEAVE_WIRE_PREFIX, raw)
            }
            AttendanceStatusCode::Leave(raw) => raw,
            other => other.code().to_string(),
        }
    }
}

impl From<String> for AttendanceStatusCode {
    fn from(code: String) -> Self {
        AttendanceStatusCode::from_code(&code)
    }
}

/// Lower-cases a leave type and strips all whitespace.
///
/// # Example
///
/// ```
/// use attendance_engine::models::normalize_leave_type;
///
/// assert_eq!(normalize_leave_type(" Comp Off Leave "), "compoffleave");
/// ```
pub fn normalize_leave_type(leave_type: &str) -> String {
    leave_type
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
