//! task-requests - a terminal form for requesting tasks
//!
//! This library provides a keyboard and mouse accessible dropdown selector and
//! a task request form with reducer-based draft state, a loading indicator and
//! a confirmation view carrying a shareable tracking link. The UI is built with
//! Ratatui; task request creation is delegated to a pluggable backend.
//!
//! # Modules
//!
//! * [`backend`] - The injected task request creation operation
//! * [`config`] - Application configuration management
//! * [`task_request`] - Draft model, edit commands and reducer
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Backend abstraction for creating task requests
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// File logging setup
pub mod logger;

/// Task request draft model and reducer
pub mod task_request;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;
