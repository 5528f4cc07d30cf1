//! Task request form component.
//!
//! Collects a start date, an end date and an optional description, hands the
//! draft to the host for creation, and switches to a confirmation view with a
//! tracking link once the host reports the created request id.

use crate::constants::{
    BUTTON_CREATE_REQUEST, COPIED_LABEL, COPY_LABEL, ERROR_SUBMISSION_FAILED, LABEL_DESCRIPTION, LABEL_END_DATE,
    LABEL_START_DATE, LOADING_TEXT, PLACEHOLDER_DESCRIPTION, SPINNER_FRAMES, SUCCESS_CHECK_MARK, SUCCESS_TITLE,
    TRACK_MESSAGE,
};
use crate::task_request::{self, DraftEdit, TaskRequestDraft};
use crate::ui::components::common::{
    create_button_paragraph, create_input_paragraph, create_panel_block, rect_contains,
};
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Longest text a date input accepts (`YYYY-MM-DD`)
const DATE_INPUT_MAX_LEN: usize = 10;

/// Lines of the confirmation view drawn above the tracking link
const LINK_FIRST_ROW: u16 = 5;

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartDate,
    EndDate,
    Description,
    Submit,
}

impl FormField {
    fn next(self) -> Option<Self> {
        match self {
            FormField::StartDate => Some(FormField::EndDate),
            FormField::EndDate => Some(FormField::Description),
            FormField::Description => Some(FormField::Submit),
            FormField::Submit => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            FormField::StartDate => None,
            FormField::EndDate => Some(FormField::StartDate),
            FormField::Description => Some(FormField::EndDate),
            FormField::Submit => Some(FormField::Description),
        }
    }
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Draft,
    Submitting,
    Failed(String),
    Confirmed(String),
}

pub struct TaskRequestFormComponent {
    draft: TaskRequestDraft,
    start_input: String,
    end_input: String,
    description_input: String,
    focused_field: Option<FormField>,
    loading: bool,
    error: Option<String>,
    request_id: Option<String>,
    task_id: Option<String>,
    tracking_host: String,
    spinner_frame: usize,
    copied: bool,

    // Hit areas recorded at the last render
    field_areas: Vec<(FormField, Rect)>,
    link_area: Option<Rect>,
}

impl TaskRequestFormComponent {
    pub fn new(
        today: NaiveDate,
        default_duration_days: u32,
        request_id: Option<String>,
        task_id: Option<String>,
        tracking_host: impl Into<String>,
    ) -> Self {
        let ends = datetime::date_relative_to(today, i64::from(default_duration_days));
        Self {
            draft: TaskRequestDraft::starting_on(today, default_duration_days),
            start_input: datetime::format_ymd(today),
            end_input: datetime::format_ymd(ends),
            description_input: String::new(),
            focused_field: None,
            loading: false,
            error: None,
            request_id,
            task_id,
            tracking_host: tracking_host.into(),
            spinner_frame: 0,
            copied: false,
            field_areas: Vec::new(),
            link_area: None,
        }
    }

    pub fn draft(&self) -> &TaskRequestDraft {
        &self.draft
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.focused_field
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn state(&self) -> FormState {
        match (&self.request_id, self.loading, &self.error) {
            (Some(id), _, _) => FormState::Confirmed(id.clone()),
            (None, true, _) => FormState::Submitting,
            (None, false, Some(error)) => FormState::Failed(error.clone()),
            (None, false, None) => FormState::Draft,
        }
    }

    /// Submission is blocked while loading and once a request or task id exists
    pub fn can_submit(&self) -> bool {
        !self.loading && self.request_id.is_none() && self.task_id.is_none()
    }

    pub fn tracking_url(&self) -> Option<String> {
        self.request_id
            .as_deref()
            .map(|id| task_request::tracking_url(&self.tracking_host, id))
    }

    /// Area a field was drawn in during the last draft render
    pub fn field_area(&self, field: FormField) -> Option<Rect> {
        self.field_areas
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, area)| *area)
    }

    fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        self.field_areas
            .iter()
            .find(|(_, area)| rect_contains(*area, column, row))
            .map(|(field, _)| *field)
    }

    /// Apply an edit through the reducer
    pub fn dispatch(&mut self, edit: DraftEdit) {
        self.draft = task_request::reduce(self.draft.clone(), edit);
    }

    fn submit(&mut self) -> Action {
        if !self.can_submit() {
            log::debug!("Form: submit ignored (loading={}, task_id={:?})", self.loading, self.task_id);
            return Action::None;
        }

        self.loading = true;
        self.error = None;
        log::info!(
            "Form: submitting task request {} -> {}",
            datetime::format_millis(self.draft.started_on, datetime::INPUT_DATE_FORMAT),
            datetime::format_millis(self.draft.ends_on, datetime::INPUT_DATE_FORMAT)
        );
        Action::SubmitTaskRequest(self.draft.clone())
    }

    fn focus_next(&mut self, field: FormField) -> Action {
        match field.next() {
            Some(next) => {
                self.focused_field = Some(next);
                Action::None
            }
            None => Action::FocusNext,
        }
    }

    fn focus_previous(&mut self, field: FormField) -> Action {
        match field.previous() {
            Some(previous) => {
                self.focused_field = Some(previous);
                Action::None
            }
            None => Action::FocusPrevious,
        }
    }

    fn input_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::StartDate => Some(&mut self.start_input),
            FormField::EndDate => Some(&mut self.end_input),
            FormField::Description => Some(&mut self.description_input),
            FormField::Submit => None,
        }
    }

    /// Dispatch the edit matching the field's current text
    fn dispatch_field(&mut self, field: FormField) {
        let edit = match field {
            FormField::StartDate => DraftEdit::StartedOn(self.start_input.clone()),
            FormField::EndDate => DraftEdit::EndsOn(self.end_input.clone()),
            FormField::Description => DraftEdit::Description(self.description_input.clone()),
            FormField::Submit => return,
        };
        self.dispatch(edit);
    }

    fn insert_char(&mut self, field: FormField, c: char) {
        let is_date = matches!(field, FormField::StartDate | FormField::EndDate);
        if let Some(input) = self.input_mut(field) {
            if is_date && (!(c.is_ascii_digit() || c == '-') || input.len() >= DATE_INPUT_MAX_LEN) {
                return;
            }
            input.push(c);
            self.dispatch_field(field);
        }
    }

    fn delete_char(&mut self, field: FormField) {
        if let Some(input) = self.input_mut(field) {
            if input.pop().is_some() {
                self.dispatch_field(field);
            }
        }
    }

    fn handle_draft_key(&mut self, field: FormField, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(field),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(field),
            KeyCode::Enter => match field {
                FormField::Submit => self.submit(),
                FormField::Description => {
                    self.insert_char(field, '\n');
                    Action::None
                }
                _ => self.focus_next(field),
            },
            KeyCode::Char(c) => {
                self.insert_char(field, c);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char(field);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn copy_link(&mut self) -> Action {
        match self.tracking_url() {
            Some(url) => {
                self.copied = true;
                Action::CopyToClipboard(url)
            }
            None => Action::None,
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') | KeyCode::Enter => self.copy_link(),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => Action::None,
        }
    }

    fn render_draft(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_panel_block(" New Task Request ", Color::White);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [start_area, end_area, description_area, loader_area, button_area, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.field_areas = vec![
            (FormField::StartDate, start_area),
            (FormField::EndDate, end_area),
            (FormField::Description, description_area),
            (FormField::Submit, button_area),
        ];
        self.link_area = None;

        let focused = |field: FormField| self.focused_field == Some(field);

        f.render_widget(
            create_input_paragraph(&self.start_input, LABEL_START_DATE, None, focused(FormField::StartDate)),
            start_area,
        );
        f.render_widget(
            create_input_paragraph(&self.end_input, LABEL_END_DATE, None, focused(FormField::EndDate)),
            end_area,
        );
        f.render_widget(
            create_input_paragraph(
                &self.description_input,
                LABEL_DESCRIPTION,
                Some(PLACEHOLDER_DESCRIPTION),
                focused(FormField::Description),
            ),
            description_area,
        );

        if self.loading {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let loader = Paragraph::new(format!("{} {}", frame, LOADING_TEXT))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(loader, loader_area);
        }

        f.render_widget(
            create_button_paragraph(BUTTON_CREATE_REQUEST, focused(FormField::Submit), self.can_submit()),
            button_area,
        );

        if let Some(error) = &self.error {
            let status = Paragraph::new(format!("{}: {}", ERROR_SUBMISSION_FAILED, error))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(status, error_area);
        }
    }

    fn render_confirmation(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_panel_block(" Task Request ", Color::Green);
        let inner = block.inner(rect);
        let url = self.tracking_url().unwrap_or_default();
        let link = link_lines(&url, usize::from(inner.width));
        let copy_label = if self.copied {
            Span::styled(COPIED_LABEL, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(format!("[c] {}", COPY_LABEL), Style::default().fg(Color::Cyan))
        };

        let link_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                SUCCESS_CHECK_MARK,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                SUCCESS_TITLE,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(TRACK_MESSAGE, Style::default().fg(Color::Gray))),
        ];
        let link_rows = link.len() as u16;
        lines.extend(link.into_iter().map(|part| Line::from(Span::styled(part, link_style))));
        lines.push(Line::from(""));
        lines.push(Line::from(copy_label));

        self.field_areas.clear();
        self.link_area = Some(
            Rect {
                x: inner.x,
                y: inner.y.saturating_add(LINK_FIRST_ROW),
                width: inner.width,
                height: link_rows,
            }
            .intersection(inner),
        );

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
        f.render_widget(paragraph, rect);
    }
}

/// Break a link into lines no wider than `width`, splitting before the query first
fn link_lines(url: &str, width: usize) -> Vec<String> {
    if width == 0 || url.chars().count() <= width {
        return vec![url.to_string()];
    }

    let parts = match url.find('?') {
        Some(query) => vec![&url[..query], &url[query..]],
        None => vec![url],
    };
    parts
        .into_iter()
        .flat_map(|part| {
            let chars: Vec<char> = part.chars().collect();
            chars
                .chunks(width)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
        })
        .collect()
}

impl Component for TaskRequestFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(field) = self.focused_field else {
            return Action::None;
        };

        if self.request_id.is_some() {
            self.handle_confirmation_key(key)
        } else {
            self.handle_draft_key(field, key)
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Action::None;
        };

        if self.request_id.is_some() {
            return match self.link_area {
                Some(area) if rect_contains(area, mouse.column, mouse.row) => self.copy_link(),
                _ => Action::None,
            };
        }

        match self.field_at(mouse.column, mouse.row) {
            Some(field) => {
                self.focused_field = Some(field);
                if field == FormField::Submit {
                    self.submit()
                } else {
                    Action::None
                }
            }
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::TaskRequestCreated { request_id } => {
                self.loading = false;
                self.error = None;
                self.request_id = Some(request_id);
                Action::None
            }
            Action::TaskRequestFailed(error) => {
                self.loading = false;
                self.error = Some(error);
                Action::None
            }
            Action::Tick => {
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.request_id.is_some() {
            self.render_confirmation(f, rect);
        } else {
            self.render_draft(f, rect);
        }
    }

    fn on_focus(&mut self) {
        if self.focused_field.is_none() {
            self.focused_field = Some(FormField::StartDate);
        }
    }

    fn on_blur(&mut self) {
        self.focused_field = None;
    }
}
