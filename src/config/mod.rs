//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load attendance configurations from
//! YAML files: the fixed holiday table, the projects on the exception week-off
//! policy, and the batch fetch settings.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendar: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, EngineConfig, EngineMetadata, FetchSettings, HolidaysConfig, ProjectsConfig,
};
