//! Roster and project policy models.
//!
//! This module defines the [`RosterEntry`] struct and the [`ProjectPolicy`] enum
//! that selects an employee's week-off regime.

use serde::{Deserialize, Serialize};

/// The week-off regime applied to a project.
///
/// Exactly one policy applies to a project; it is looked up by exact
/// project-name match in the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPolicy {
    /// Sundays and the 2nd and 4th Saturdays of each month are non-working.
    #[default]
    Standard,
    /// Only Sundays are non-working; every Saturday is a working day.
    Exception,
}

impl ProjectPolicy {
    /// Returns true for the exception ("Ops") regime.
    pub fn is_exception(self) -> bool {
        self == ProjectPolicy::Exception
    }
}

impl std::fmt::Display for ProjectPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectPolicy::Standard => write!(f, "standard"),
            ProjectPolicy::Exception => write!(f, "exception"),
        }
    }
}

/// An employee as listed on the roster returned by the remote API.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RosterEntry;
///
/// let employee = RosterEntry {
///     employee_id: "EMP001".to_string(),
///     full_name: "Asha Rao".to_string(),
///     designation: "Technician".to_string(),
///     project_name: "Ops".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job title.
    #[serde(default)]
    pub designation: String,
    /// The project the employee is deployed to.
    pub project_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_standard() {
        assert_eq!(ProjectPolicy::default(), ProjectPolicy::Standard);
        assert!(!ProjectPolicy::Standard.is_exception());
        assert!(ProjectPolicy::Exception.is_exception());
    }

    #[test]
    fn test_policy_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProjectPolicy::Exception).unwrap(),
            "\"exception\""
        );
        assert_eq!(ProjectPolicy::Standard.to_string(), "standard");
    }

    #[test]
    fn test_deserialize_roster_entry_without_designation() {
        let json = r#"{
            "employee_id": "EMP001",
            "full_name": "Asha Rao",
            "project_name": "Ops"
        }"#;

        let employee: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, "EMP001");
        assert_eq!(employee.project_name, "Ops");
        assert!(employee.designation.is_empty());
    }
}
