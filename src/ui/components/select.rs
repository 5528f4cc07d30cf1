//! Dropdown selector component.
//!
//! A controlled view over a caller-owned selection: the component renders the
//! current value, manages its own open and highlight state, and reports
//! choices as [`Action::SelectionChanged`]. The caller decides whether to feed
//! the choice back through [`SelectComponent::set_value`].

use crate::ui::components::common::rect_contains;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};

/// One selectable choice. `value` identifies the option within its list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Keyboard and mouse accessible dropdown.
///
/// Keys are only handled while the component owns the interaction, which the
/// host grants through [`Component::on_focus`] and revokes through
/// [`Component::on_blur`]. Losing focus always closes the list.
pub struct SelectComponent {
    title: String,
    options: Vec<SelectOption>,
    value: Option<SelectOption>,
    is_open: bool,
    highlighted_index: usize,
    focused: bool,
    area: Rect,
    list_area: Option<Rect>,
    list_state: ListState,
}

impl SelectComponent {
    pub fn new(title: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            title: title.into(),
            options,
            value: None,
            is_open: false,
            highlighted_index: 0,
            focused: false,
            area: Rect::default(),
            list_area: None,
            list_state: ListState::default(),
        }
    }

    /// Replace the option list. The highlight goes back to the first entry.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.highlighted_index = 0;
    }

    pub fn set_value(&mut self, value: Option<SelectOption>) {
        self.value = value;
    }

    pub fn value(&self) -> Option<&SelectOption> {
        self.value.as_ref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether `option` is the current value, compared by key
    pub fn is_option_selected(&self, option: &SelectOption) -> bool {
        self.value.as_ref().is_some_and(|value| value.value == option.value)
    }

    /// Report a choice, unless it is already the current value
    pub fn select_option(&self, option: &SelectOption) -> Action {
        if self.is_option_selected(option) {
            Action::None
        } else {
            log::debug!("Select '{}': chose '{}'", self.title, option.value);
            Action::SelectionChanged(option.clone())
        }
    }

    fn select_highlighted(&self) -> Action {
        match self.options.get(self.highlighted_index) {
            Some(option) => self.select_option(option),
            None => Action::None,
        }
    }

    /// Move the highlight by one step; moves past either end are dropped
    fn move_highlight(&mut self, down: bool) {
        let target = if down {
            self.highlighted_index.checked_add(1)
        } else {
            self.highlighted_index.checked_sub(1)
        };
        if let Some(index) = target.filter(|index| *index < self.options.len()) {
            self.highlighted_index = index;
        }
    }

    /// Whether a terminal cell belongs to the dropdown, including the open list
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row) || self.option_at(column, row).is_some()
    }

    /// Index of the option drawn at a terminal cell, if the list is open
    fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        let list_area = self.list_area?;
        let rows = Rect {
            x: list_area.x + 1,
            y: list_area.y + 1,
            width: list_area.width.saturating_sub(2),
            height: list_area.height.saturating_sub(2),
        };
        if !rect_contains(rows, column, row) {
            return None;
        }
        let index = (row - rows.y) as usize + self.list_state.offset();
        (index < self.options.len()).then_some(index)
    }

    fn display_line(&self, width: u16) -> Line<'static> {
        let caret = if self.is_open { "▴" } else { "▾" };
        let label: String = self
            .value
            .as_ref()
            .map(|option| option.label.as_str())
            .unwrap_or("")
            .chars()
            .take((width as usize).saturating_sub(2))
            .collect();
        let padding = (width as usize).saturating_sub(label.chars().count() + 1);

        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::raw(" ".repeat(padding)),
            Span::styled(caret, Style::default().fg(Color::Gray)),
        ])
    }

    fn render_list(&mut self, f: &mut Frame) {
        let frame = f.area();
        let top = self.area.y.saturating_add(self.area.height);
        let available = frame.y.saturating_add(frame.height).saturating_sub(top);
        let wanted = (self.options.len() as u16).saturating_add(2);
        let height = wanted.min(available);

        // Need at least one row between the borders
        if height < 3 {
            self.list_area = None;
            return;
        }

        let list_area = Rect {
            x: self.area.x,
            y: top,
            width: self.area.width,
            height,
        };

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                let marker = if self.is_option_selected(option) { "✓ " } else { "  " };
                let style = if self.is_option_selected(option) {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(option.label.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        self.list_state.select((!self.options.is_empty()).then_some(self.highlighted_index));
        f.render_widget(Clear, list_area);
        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.list_area = Some(list_area);
    }
}

impl Component for SelectComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let was_open = self.is_open;
                self.toggle();
                if was_open {
                    self.select_highlighted()
                } else {
                    Action::None
                }
            }
            KeyCode::Up | KeyCode::Down => {
                if self.is_open {
                    self.move_highlight(key.code == KeyCode::Down);
                } else {
                    self.is_open = true;
                }
                Action::None
            }
            KeyCode::Esc => {
                self.close();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A click on an option must not also toggle the container
                if let Some(index) = self.option_at(mouse.column, mouse.row) {
                    let action = self.select_option(&self.options[index]);
                    self.close();
                    return action;
                }
                if rect_contains(self.area, mouse.column, mouse.row) {
                    self.toggle();
                }
                Action::None
            }
            MouseEventKind::Moved => {
                if let Some(index) = self.option_at(mouse.column, mouse.row) {
                    self.highlighted_index = index;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(border_color));

        let line = self.display_line(block.inner(rect).width);
        f.render_widget(Paragraph::new(line).block(block), rect);

        if self.is_open {
            self.render_list(f);
        } else {
            self.list_area = None;
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.close();
    }
}
