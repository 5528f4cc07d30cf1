use async_trait::async_trait;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::{Arc, Mutex};
use task_requests::backend::{BackendError, TaskRequestBackend};
use task_requests::config::Config;
use task_requests::task_request::NewTaskRequest;
use task_requests::ui::app_component::{AppComponent, Focus};
use task_requests::ui::components::{FormField, FormState, SelectOption};
use task_requests::ui::core::{Component, EventType};
use tokio::time::{sleep, Duration};

#[derive(Default)]
struct RecordingBackend {
    calls: Mutex<Vec<NewTaskRequest>>,
}

#[async_trait]
impl TaskRequestBackend for RecordingBackend {
    fn backend_id(&self) -> &str {
        "recording"
    }

    async fn create_task_request(&self, request: &NewTaskRequest) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(request.clone());
        Ok("req-7".to_string())
    }
}

struct FailingBackend;

#[async_trait]
impl TaskRequestBackend for FailingBackend {
    fn backend_id(&self) -> &str {
        "failing"
    }

    async fn create_task_request(&self, _request: &NewTaskRequest) -> Result<String, BackendError> {
        Err(BackendError::Unavailable("failing".to_string()))
    }
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn click(column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app(backend: Arc<dyn TaskRequestBackend>) -> AppComponent {
    AppComponent::new(
        &Config::default(),
        backend,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        None,
        None,
    )
}

/// Pump background actions until the form leaves the submitting state
async fn settle(app: &mut AppComponent) {
    for _ in 0..100 {
        for action in app.process_background_actions() {
            let action = app.update(action);
            app.handle_app_action(action);
        }
        if !app.form().is_loading() {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("task request never completed");
}

#[tokio::test]
async fn test_submission_reaches_backend_once_and_confirms() {
    let backend = Arc::new(RecordingBackend::default());
    let mut app = app(backend.clone());

    // Choose "Creation" in the dropdown
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.state().request_type, Some(SelectOption::new("Creation", "CREATION")));
    assert_eq!(app.request_type().value(), Some(&SelectOption::new("Creation", "CREATION")));

    // Move to the form and submit
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Form);
    app.handle_event(ctrl('s'));
    assert!(app.has_request_in_flight());
    // A second submit while in flight is ignored
    app.handle_event(ctrl('s'));
    settle(&mut app).await;
    assert!(!app.has_request_in_flight());

    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].request_type.as_deref(), Some("CREATION"));
    assert_eq!(calls[0].draft.description, None);
    assert_eq!(app.form().state(), FormState::Confirmed("req-7".to_string()));
}

#[tokio::test]
async fn test_focus_ring_blurs_dropdown() {
    let mut app = app(Arc::new(RecordingBackend::default()));
    assert_eq!(app.focus(), Focus::RequestType);

    app.handle_event(key(KeyCode::Down));
    assert!(app.request_type().is_open());

    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Form);
    assert!(!app.request_type().is_open());

    // BackTab from the first field returns to the dropdown
    app.handle_event(key(KeyCode::BackTab));
    assert_eq!(app.focus(), Focus::RequestType);
}

#[tokio::test]
async fn test_click_outside_dropdown_closes_it() {
    let mut app = app(Arc::new(RecordingBackend::default()));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    app.handle_event(key(KeyCode::Enter));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(app.request_type().is_open());

    app.handle_event(click(40, 20));
    assert!(!app.request_type().is_open());
    assert_eq!(app.focus(), Focus::Form);
}

#[tokio::test]
async fn test_ctrl_c_quits() {
    let mut app = app(Arc::new(RecordingBackend::default()));
    app.handle_event(ctrl('c'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_click_on_create_request_button_submits() {
    let backend = Arc::new(RecordingBackend::default());
    let mut app = app(backend.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let button = app.form().field_area(FormField::Submit).unwrap();
    app.handle_event(click(button.x + button.width / 2, button.y + 1));
    assert_eq!(app.focus(), Focus::Form);
    assert!(app.has_request_in_flight());

    settle(&mut app).await;
    assert_eq!(backend.calls.lock().unwrap().len(), 1);
    assert_eq!(app.form().state(), FormState::Confirmed("req-7".to_string()));
}

#[tokio::test]
async fn test_click_on_option_over_form_selects_it() {
    let mut app = app(Arc::new(RecordingBackend::default()));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    app.handle_event(key(KeyCode::Enter));
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    // The open list overlays the top of the form; its second row is "Creation"
    app.handle_event(click(10, 5));
    assert_eq!(app.state().request_type, Some(SelectOption::new("Creation", "CREATION")));
    assert_eq!(app.focus(), Focus::RequestType);
    assert!(!app.form().is_loading());
}

#[tokio::test]
async fn test_failure_reported_once() {
    let mut app = app(Arc::new(FailingBackend));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    app.handle_event(key(KeyCode::Tab));
    app.handle_event(ctrl('s'));
    settle(&mut app).await;
    assert!(matches!(app.form().state(), FormState::Failed(_)));
    assert!(!app.has_request_in_flight());

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let screen = screen_text(&terminal);
    assert_eq!(screen.matches("Submission failed").count(), 1);
    assert!(app.state().error_message.is_none());
}
