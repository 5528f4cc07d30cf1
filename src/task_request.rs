//! Task request domain model.
//!
//! Holds the draft being edited in the form, the discrete edit commands the
//! form dispatches, and the pure reducer that applies them.

use crate::constants::TRACKING_PATH;
use crate::utils::datetime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// In-progress task request values. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequestDraft {
    pub started_on: i64,
    pub ends_on: i64,
    pub description: Option<String>,
}

impl TaskRequestDraft {
    /// Draft starting on `today` and ending `duration_days` later, without description
    pub fn starting_on(today: NaiveDate, duration_days: u32) -> Self {
        let ends = datetime::date_relative_to(today, i64::from(duration_days));
        Self {
            started_on: datetime::start_of_day_millis(today),
            ends_on: datetime::start_of_day_millis(ends),
            description: None,
        }
    }
}

/// A single field edit, carrying the raw text of the input that changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    StartedOn(String),
    EndsOn(String),
    Description(String),
}

/// Apply one edit to a draft, replacing only the targeted field.
///
/// Date text that does not parse as a full `YYYY-MM-DD` date leaves the draft
/// untouched.
pub fn reduce(draft: TaskRequestDraft, edit: DraftEdit) -> TaskRequestDraft {
    match edit {
        DraftEdit::StartedOn(text) => match datetime::parse_date_input(&text) {
            Some(started_on) => TaskRequestDraft { started_on, ..draft },
            None => draft,
        },
        DraftEdit::EndsOn(text) => match datetime::parse_date_input(&text) {
            Some(ends_on) => TaskRequestDraft { ends_on, ..draft },
            None => draft,
        },
        DraftEdit::Description(text) => TaskRequestDraft {
            description: Some(text),
            ..draft
        },
    }
}

/// What the host hands to the backend: the draft plus the chosen request type key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskRequest {
    pub request_type: Option<String>,
    #[serde(flatten)]
    pub draft: TaskRequestDraft,
}

/// Shareable link for tracking a created request
pub fn tracking_url(host: &str, request_id: &str) -> String {
    format!("https://{}{}{}", host, TRACKING_PATH, request_id)
}
