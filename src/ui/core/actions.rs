use crate::task_request::TaskRequestDraft;
use crate::ui::components::select::SelectOption;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Dropdown
    SelectionChanged(SelectOption),

    // Task request lifecycle
    SubmitTaskRequest(TaskRequestDraft),
    TaskRequestCreated { request_id: String },
    TaskRequestFailed(String),

    // Confirmation view
    CopyToClipboard(String),

    // Focus ring
    FocusNext,
    FocusPrevious,

    // Periodic tick, drives the loader spinner
    Tick,

    // App control
    Quit,
    None,
}
