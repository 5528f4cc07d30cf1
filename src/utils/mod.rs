//! Utility modules for the task-requests application.
//!
//! - [`datetime`] - Date parsing, formatting and offset helpers used by the form

pub mod datetime;
