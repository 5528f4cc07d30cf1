//! Constants used throughout the application
//!
//! This module centralizes UI text, defaults and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_NAME: &str = "task-requests";
pub const CONFIG_FILE_NAME: &str = "task-requests.toml";
pub const LOG_FILE_NAME: &str = "task-requests.log";

// Tracking link
pub const DEFAULT_TRACKING_HOST: &str = "dashboard.realdevsquad.com";
pub const TRACKING_PATH: &str = "/taskRequests/details/?id=";

// Form defaults
pub const DEFAULT_DURATION_DAYS: u32 = 7;
pub const MAX_DURATION_DAYS: u32 = 365;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 600;
pub const MAX_SIMULATED_LATENCY_MS: u64 = 30_000;

// Form labels
pub const LABEL_REQUEST_TYPE: &str = "Request type";
pub const LABEL_START_DATE: &str = "Start date:";
pub const LABEL_END_DATE: &str = "End date:";
pub const LABEL_DESCRIPTION: &str = "Description:";
pub const PLACEHOLDER_DESCRIPTION: &str = "Why do you want this task?";
pub const BUTTON_CREATE_REQUEST: &str = "Create Request";
pub const LOADING_TEXT: &str = "Creating request...";

// Confirmation view
pub const SUCCESS_TITLE: &str = "Task Request successful!";
pub const SUCCESS_CHECK_MARK: &str = "✔";
pub const TRACK_MESSAGE: &str = "Track your request using this link";
pub const COPY_LABEL: &str = "Copy link";
pub const COPIED_LABEL: &str = "Copied!";

// Status messages
pub const ERROR_SUBMISSION_FAILED: &str = "❌ Submission failed";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";

// Loader spinner frames
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
