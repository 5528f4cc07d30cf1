//! Reusable UI components

pub mod common;
pub mod select;
pub mod task_request_form;

// Component exports
pub use select::{SelectComponent, SelectOption};
pub use task_request_form::{FormField, FormState, TaskRequestFormComponent};
