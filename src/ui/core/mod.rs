//! Core UI functionality for the task-requests application.
//!
//! - [`actions`] - Messages exchanged between components and the host
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background backend calls
//!
//! Components never call each other. They turn input into [`Action`]s, the
//! host reacts, and outcomes of background work come back as actions too.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
