use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use task_requests::ui::components::{SelectComponent, SelectOption};
use task_requests::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn row_text(buffer: &Buffer, row: u16) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, row)].symbol()).collect()
}

fn ab_select() -> SelectComponent {
    SelectComponent::new(
        "Letter",
        vec![SelectOption::new("A", "1"), SelectOption::new("B", "2")],
    )
}

fn draw(terminal: &mut Terminal<TestBackend>, select: &mut SelectComponent) {
    terminal
        .draw(|f| select.render(f, Rect::new(0, 0, 20, 3)))
        .unwrap();
}

#[test]
fn test_click_scenario_selects_b_and_closes() {
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
    let mut select = ab_select();

    draw(&mut terminal, &mut select);
    let display = row_text(terminal.backend().buffer(), 1);
    assert!(!display.contains('A') && !display.contains('B'));

    // Clicking the container opens the list
    assert_eq!(select.handle_mouse_events(click(5, 1)), Action::None);
    assert!(select.is_open());
    draw(&mut terminal, &mut select);
    assert!(row_text(terminal.backend().buffer(), 4).contains('A'));
    assert!(row_text(terminal.backend().buffer(), 5).contains('B'));

    // Clicking "B" reports it and closes the list
    let action = select.handle_mouse_events(click(5, 5));
    assert_eq!(action, Action::SelectionChanged(SelectOption::new("B", "2")));
    assert!(!select.is_open());
}

#[test]
fn test_hover_highlights_option() {
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
    let mut select = ab_select();
    select.toggle();
    draw(&mut terminal, &mut select);

    select.handle_mouse_events(mouse(MouseEventKind::Moved, 3, 5));
    assert_eq!(select.highlighted_index(), 1);
}

#[test]
fn test_reselecting_current_value_is_silent() {
    let mut select = ab_select();
    select.on_focus();
    select.set_value(Some(SelectOption::new("A", "1")));

    // Open, keep highlight on "A", confirm
    select.handle_key_events(key(KeyCode::Enter));
    assert_eq!(select.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(!select.is_open());

    // Same through the mouse
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
    select.toggle();
    draw(&mut terminal, &mut select);
    assert_eq!(select.handle_mouse_events(click(5, 4)), Action::None);
}

#[test]
fn test_keyboard_selection_of_highlighted_option() {
    let mut select = ab_select();
    select.on_focus();

    select.handle_key_events(key(KeyCode::Down)); // opens
    select.handle_key_events(key(KeyCode::Down)); // highlights B
    let action = select.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(action, Action::SelectionChanged(SelectOption::new("B", "2")));
    assert!(!select.is_open());
}

#[test]
fn test_escape_always_closes() {
    let mut select = ab_select();
    select.on_focus();
    for highlight_moves in 0..3 {
        select.handle_key_events(key(KeyCode::Enter));
        assert!(select.is_open());
        for _ in 0..highlight_moves {
            select.handle_key_events(key(KeyCode::Down));
        }
        select.handle_key_events(key(KeyCode::Esc));
        assert!(!select.is_open());
    }
}

#[test]
fn test_blur_always_closes() {
    let mut select = ab_select();
    select.on_focus();
    select.on_blur();
    assert!(!select.is_open());

    select.on_focus();
    select.toggle();
    assert!(select.is_open());
    select.on_blur();
    assert!(!select.is_open());
    assert!(!select.is_focused());
}

#[test]
fn test_keys_ignored_without_focus() {
    let mut select = ab_select();
    select.handle_key_events(key(KeyCode::Enter));
    select.handle_key_events(key(KeyCode::Down));
    assert!(!select.is_open());
}

#[test]
fn test_even_number_of_toggles_is_identity() {
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
    let mut select = ab_select();
    draw(&mut terminal, &mut select);

    for toggles in [2, 4, 10] {
        let before = select.is_open();
        for _ in 0..toggles {
            select.handle_mouse_events(click(1, 1));
        }
        assert_eq!(select.is_open(), before);
    }
}

#[test]
fn test_open_caret_and_selection_marker() {
    let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
    let mut select = ab_select();
    select.set_value(Some(SelectOption::new("B", "2")));
    draw(&mut terminal, &mut select);
    assert!(row_text(terminal.backend().buffer(), 1).contains('B'));
    assert!(row_text(terminal.backend().buffer(), 1).contains('▾'));

    select.toggle();
    draw(&mut terminal, &mut select);
    assert!(row_text(terminal.backend().buffer(), 1).contains('▴'));
    assert!(row_text(terminal.backend().buffer(), 5).contains('✓'));
}
