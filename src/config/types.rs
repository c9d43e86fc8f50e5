//! Configuration types for attendance classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::models::{Holiday, HolidayCalendar, ProjectPolicy};

/// Metadata about the configuration set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// A short code for the configuration set (e.g., "IN-CENTRAL").
    pub code: String,
    /// The human-readable name of the configuration set.
    pub name: String,
    /// The version of the holiday table and policies.
    pub version: String,
    /// Where the holiday list was taken from.
    pub source: String,
}

/// Settings for the batch fetch layer.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FetchSettings {
    /// Maximum number of employee requests in flight at once.
    pub max_concurrency: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self { max_concurrency: 8 }
    }
}

/// `engine.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Configuration metadata.
    pub engine: EngineMetadata,
    /// Batch fetch settings.
    #[serde(default)]
    pub fetch: FetchSettings,
}

/// `holidays.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The fixed list of observed holidays.
    pub holidays: Vec<Holiday>,
}

/// `projects.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsConfig {
    /// Project names that follow the exception (Sunday-only) week-off policy.
    #[serde(default)]
    pub exception_projects: Vec<String>,
}

/// The complete attendance configuration loaded from YAML files.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{AttendanceConfig, EngineMetadata, FetchSettings};
/// use attendance_engine::models::{HolidayCalendar, ProjectPolicy};
///
/// let config = AttendanceConfig::new(
///     EngineMetadata {
///         code: "TEST".to_string(),
///         name: "Test calendar".to_string(),
///         version: "2025".to_string(),
///         source: "inline".to_string(),
///     },
///     HolidayCalendar::default(),
///     vec!["Ops".to_string()],
///     FetchSettings::default(),
/// );
///
/// assert_eq!(config.policy_for_project("Ops"), ProjectPolicy::Exception);
/// assert_eq!(config.policy_for_project("ops"), ProjectPolicy::Standard);
/// ```
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    metadata: EngineMetadata,
    holidays: HolidayCalendar,
    exception_projects: BTreeSet<String>,
    fetch: FetchSettings,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        holidays: HolidayCalendar,
        exception_projects: Vec<String>,
        fetch: FetchSettings,
    ) -> Self {
        Self {
            metadata,
            holidays,
            exception_projects: exception_projects.into_iter().collect(),
            fetch,
        }
    }

    /// Returns the configuration metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns the batch fetch settings.
    pub fn fetch(&self) -> FetchSettings {
        self.fetch
    }

    /// Looks up the week-off policy for a project by exact name match.
    ///
    /// Projects not listed as exceptions follow [`ProjectPolicy::Standard`].
    pub fn policy_for_project(&self, project_name: &str) -> ProjectPolicy {
        if self.exception_projects.contains(project_name) {
            ProjectPolicy::Exception
        } else {
            ProjectPolicy::Standard
        }
    }
}
