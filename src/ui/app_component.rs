//! Host application component.
//!
//! Mounts the request type dropdown above the task request form, owns the
//! focus ring between them, and runs task request creation in the background.

use crate::backend::TaskRequestBackend;
use crate::config::Config;
use crate::constants::LABEL_REQUEST_TYPE;
use crate::task_request::NewTaskRequest;
use crate::ui::clipboard;
use crate::ui::components::common::{create_instructions_paragraph, shortcuts};
use crate::ui::components::{SelectComponent, SelectOption, TaskRequestFormComponent};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Which child currently owns keyboard interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    RequestType,
    Form,
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub request_type: Option<SelectOption>,
    pub info_message: Option<String>,
    pub error_message: Option<String>,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    request_type: SelectComponent,
    form: TaskRequestFormComponent,
    focus: Focus,

    // Application state
    state: AppState,
    date_format: String,

    // Services
    backend: Arc<dyn TaskRequestBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
    active_request_task: Option<TaskId>,
}

impl AppComponent {
    pub fn new(
        config: &Config,
        backend: Arc<dyn TaskRequestBackend>,
        today: NaiveDate,
        request_id: Option<String>,
        task_id: Option<String>,
    ) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut request_type = SelectComponent::new(LABEL_REQUEST_TYPE, config.form.request_types.clone());
        request_type.on_focus();

        let form = TaskRequestFormComponent::new(
            today,
            config.form.default_duration_days,
            request_id,
            task_id,
            config.tracking.host.clone(),
        );

        Self {
            request_type,
            form,
            focus: Focus::RequestType,
            state: AppState::default(),
            date_format: config.display.date_format.clone(),
            backend,
            task_manager,
            background_action_rx,
            should_quit: false,
            active_request_task: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn request_type(&self) -> &SelectComponent {
        &self.request_type
    }

    pub fn form(&self) -> &TaskRequestFormComponent {
        &self.form
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Whether a task request creation is running in the background
    pub fn has_request_in_flight(&self) -> bool {
        self.active_request_task.is_some()
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        match self.focus {
            Focus::RequestType => self.request_type.on_blur(),
            Focus::Form => self.form.on_blur(),
        }
        self.focus = focus;
        match focus {
            Focus::RequestType => self.request_type.on_focus(),
            Focus::Form => self.form.on_focus(),
        }
        log::debug!("Focus moved to {:?}", focus);
    }

    fn cycle_focus(&mut self) {
        let next = match self.focus {
            Focus::RequestType => Focus::Form,
            Focus::Form => Focus::RequestType,
        };
        self.set_focus(next);
    }

    /// Drain outcomes reported by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.task_manager.cleanup_finished_tasks();
        actions
    }

    /// Route a terminal event to the right child and handle what comes back
    pub fn handle_event(&mut self, event: EventType) -> Action {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Tick => Action::Tick,
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };
        let action = self.update(action);
        self.handle_app_action(action)
    }

    /// Handle app-level actions that require services
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SelectionChanged(option) => {
                log::info!("Request type changed to '{}'", option.value);
                self.request_type.set_value(Some(option.clone()));
                self.state.request_type = Some(option);
                Action::None
            }
            Action::SubmitTaskRequest(draft) => {
                self.state.clear_messages();
                let request = NewTaskRequest {
                    request_type: self.state.request_type.as_ref().map(|option| option.value.clone()),
                    draft,
                };
                let task_id = self.task_manager.spawn_task_request(self.backend.clone(), request);
                self.active_request_task = Some(task_id);
                Action::None
            }
            Action::CopyToClipboard(text) => {
                match clipboard::copy_to_clipboard(&text) {
                    Ok(()) => self.state.info_message = Some("Tracking link copied".to_string()),
                    Err(e) => {
                        log::warn!("Clipboard copy failed: {}", e);
                        self.state.error_message = Some(e.to_string());
                    }
                }
                Action::None
            }
            Action::FocusNext | Action::FocusPrevious => {
                self.cycle_focus();
                Action::None
            }
            other => other,
        }
    }

    fn render_status_bar(&self, f: &mut Frame, rect: Rect) {
        let [info_area, keys_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(rect);

        let draft = self.form.draft();
        let summary = match (&self.state.error_message, &self.state.info_message) {
            (Some(error), _) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
            (None, Some(info)) => Span::styled(info.clone(), Style::default().fg(Color::Green)),
            (None, None) => Span::styled(
                format!(
                    "{} → {} ({} days)",
                    datetime::format_millis(draft.started_on, &self.date_format),
                    datetime::format_millis(draft.ends_on, &self.date_format),
                    datetime::days_between(draft.started_on, draft.ends_on)
                ),
                Style::default().fg(Color::Gray),
            ),
        };
        f.render_widget(Paragraph::new(Line::from(summary)), info_area);

        let keys = match (self.focus, self.form.request_id().is_some()) {
            (Focus::RequestType, _) => vec![
                shortcuts::ENTER_OPEN,
                shortcuts::SEPARATOR,
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_C_QUIT,
            ],
            (Focus::Form, false) => vec![
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_S_SUBMIT,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_C_QUIT,
            ],
            (Focus::Form, true) => vec![shortcuts::C_COPY, shortcuts::SEPARATOR, shortcuts::CTRL_C_QUIT],
        };
        f.render_widget(create_instructions_paragraph(&keys), keys_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            log::info!("Global key: Ctrl+{:?} - quitting application", key.code);
            return Action::Quit;
        }

        match self.focus {
            Focus::RequestType => match key.code {
                KeyCode::Tab | KeyCode::BackTab => Action::FocusNext,
                _ => self.request_type.handle_key_events(key),
            },
            Focus::Form => self.form.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let on_dropdown = self.request_type.contains(mouse.column, mouse.row);
        let is_click = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

        if is_click {
            // Clicking anywhere else is a blur for the dropdown
            self.set_focus(if on_dropdown { Focus::RequestType } else { Focus::Form });
        }

        if is_click && !on_dropdown {
            self.form.handle_mouse_events(mouse)
        } else {
            self.request_type.handle_mouse_events(mouse)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            // The form shows the outcome itself
            Action::TaskRequestCreated { .. } | Action::TaskRequestFailed(_) => {
                self.active_request_task = None;
                self.form.update(action)
            }
            Action::Tick => self.form.update(action),
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [select_area, form_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .areas(rect);

        self.form.render(f, form_area);
        self.render_status_bar(f, status_area);
        // Rendered last so the open list overlays the form
        self.request_type.render(f, select_area);
    }
}
