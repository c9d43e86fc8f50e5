//! Attendance Engine for workforce management
//!
//! This crate classifies each employee-day as present, absent, holiday,
//! comp-off or leave from punch data, approved leave, the project's week-off
//! policy and a fixed holiday table, and aggregates a month of statuses into
//! payable days and loss-of-pay.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
