use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Creates a styled main panel block
pub fn create_panel_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, with a visual cursor while focused.
///
/// An empty unfocused input shows `placeholder` dimmed instead.
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    placeholder: Option<&'a str>,
    focused: bool,
) -> Paragraph<'a> {
    let cursor_char = "█";
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let paragraph = match placeholder {
        Some(placeholder) if input_buffer.is_empty() && !focused => {
            Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
        }
        _ => {
            let input_display = if focused {
                format!("{}{}", input_buffer, cursor_char)
            } else {
                input_buffer.to_string()
            };
            Paragraph::new(input_display).style(Style::default().fg(Color::White))
        }
    };

    paragraph.block(input_block).wrap(Wrap { trim: false })
}

/// Creates a bordered push button; disabled buttons are dimmed
pub fn create_button_paragraph(label: &str, focused: bool, enabled: bool) -> Paragraph<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    };
    let border_color = if focused && enabled { Color::Cyan } else { Color::Gray };

    Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
}

/// Whether a terminal cell lies inside an area recorded at the last render
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts shown in the status bar
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ENTER_OPEN: InstructionShortcut = ("Enter", Color::Green, " Open/choose");
    pub const CTRL_S_SUBMIT: InstructionShortcut = ("Ctrl+S", Color::Green, " Submit");
    pub const C_COPY: InstructionShortcut = ("c", Color::Green, " Copy link");
    pub const CTRL_C_QUIT: InstructionShortcut = ("Ctrl+C", Color::Red, " Quit");
}
