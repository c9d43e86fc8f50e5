//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configurations from YAML files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, ProjectPolicy};

use super::types::{AttendanceConfig, EngineConfig, EngineMetadata, HolidaysConfig, ProjectsConfig};

/// Loads and provides access to attendance configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the holiday table and project policies.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Metadata and fetch settings
/// ├── holidays.yaml  # Fixed government holiday list
/// └── projects.yaml  # Projects on the exception week-off policy
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::ProjectPolicy;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// assert_eq!(loader.policy_for_project("Ops"), ProjectPolicy::Exception);
/// println!("{} holidays loaded", loader.holidays().len());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The holiday list repeats a date
    /// - The fetch concurrency is zero
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let engine = Self::load_yaml::<EngineConfig>(&engine_path)?;
        if engine.fetch.max_concurrency == 0 {
            return Err(EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: "fetch.max_concurrency must be at least 1".to_string(),
            });
        }

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;
        let mut seen = BTreeSet::new();
        for holiday in &holidays.holidays {
            if !seen.insert(holiday.date) {
                return Err(EngineError::ConfigParseError {
                    path: holidays_path.display().to_string(),
                    message: format!("duplicate holiday date {}", holiday.date),
                });
            }
        }

        let projects_path = path.join("projects.yaml");
        let projects = Self::load_yaml::<ProjectsConfig>(&projects_path)?;

        let config = AttendanceConfig::new(
            engine.engine,
            HolidayCalendar::new(holidays.holidays),
            projects.exception_projects,
            engine.fetch,
        );

        tracing::debug!(
            path = %path.display(),
            holidays = config.holidays().len(),
            "Loaded attendance configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying attendance configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayCalendar {
        self.config.holidays()
    }

    /// Looks up the week-off policy for a project by exact name match.
    pub fn policy_for_project(&self, project_name: &str) -> ProjectPolicy {
        self.config.policy_for_project(project_name)
    }

    /// Returns the maximum number of concurrent employee fetches.
    pub fn fetch_concurrency(&self) -> usize {
        self.config.fetch().max_concurrency
    }
}
