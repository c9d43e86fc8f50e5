//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while classifying attendance.
//! Invalid input is always surfaced to the caller; the engine never
//! substitutes a default status for data it cannot interpret.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A (year, month) pair does not name a valid calendar month.
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// A leave interval ends before it starts.
    #[error("Invalid leave interval for employee '{employee_id}': {start_date} to {end_date}")]
    InvalidLeaveInterval {
        /// The employee the interval belongs to.
        employee_id: String,
        /// The first day of the interval.
        start_date: NaiveDate,
        /// The last day of the interval.
        end_date: NaiveDate,
    },

    /// A punch record was inconsistent with the day being resolved.
    #[error("Invalid punch record for employee '{employee_id}' on {date}: {message}")]
    InvalidPunch {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date carried by the record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// More than one punch record exists for the same employee and date.
    #[error("Duplicate punch records for employee '{employee_id}' on {date}")]
    DuplicatePunch {
        /// The employee with duplicate records.
        employee_id: String,
        /// The date with duplicate records.
        date: NaiveDate,
    },

    /// Input to a calculation was structurally invalid.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of the problem.
        message: String,
    },

    /// Fetching an employee's data from the remote source failed.
    #[error("Failed to fetch data for employee '{employee_id}': {message}")]
    FetchFailed {
        /// The employee whose fetch failed.
        employee_id: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_month_pads_month() {
        let error = EngineError::InvalidMonth {
            year: 2025,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid month: 2025-13");
    }

    #[test]
    fn test_invalid_leave_interval_displays_range() {
        let error = EngineError::InvalidLeaveInterval {
            employee_id: "EMP001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid leave interval for employee 'EMP001': 2025-03-10 to 2025-03-08"
        );
    }

    #[test]
    fn test_duplicate_punch_displays_employee_and_date() {
        let error = EngineError::DuplicatePunch {
            employee_id: "EMP001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate punch records for employee 'EMP001' on 2025-03-10"
        );
    }

    #[test]
    fn test_fetch_failed_displays_employee_and_message() {
        let error = EngineError::FetchFailed {
            employee_id: "EMP002".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch data for employee 'EMP002': connection reset"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth {
                year: 2025,
                month: 0,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
