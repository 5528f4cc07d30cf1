//! UI module for task-requests
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app_component;
pub mod clipboard;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
