//! Fetched per-employee attendance data.

use serde::{Deserialize, Serialize};

use super::{LeaveInterval, PunchRecord};

/// Everything fetched for one employee for one month.
///
/// Produced by the batch fetch layer and consumed by the report builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthData {
    /// Punch records for the month.
    #[serde(default)]
    pub punches: Vec<PunchRecord>,
    /// The employee's leave history.
    #[serde(default)]
    pub leaves: Vec<LeaveInterval>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_object() {
        let data: EmployeeMonthData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, EmployeeMonthData::default());
    }
}
