use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Creates a styled panel block
pub fn create_panel_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor.
///
/// An empty buffer shows `placeholder` dimmed.
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    placeholder: &'a str,
    invalid: bool,
) -> Paragraph<'a> {
    let cursor = Span::styled("█", Style::default().fg(Color::White));
    let content = if input_buffer.is_empty() {
        Line::from(vec![cursor, Span::styled(placeholder, Style::default().fg(Color::DarkGray))])
    } else {
        Line::from(vec![Span::raw(input_buffer), cursor])
    };

    let border_color = if invalid { Color::Red } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(content)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Alert variants, matching the banner colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Danger,
    Success,
}

/// One-line colored alert
pub fn create_alert_paragraph(message: &str, kind: AlertKind) -> Paragraph<'_> {
    let color = match kind {
        AlertKind::Danger => Color::Red,
        AlertKind::Success => Color::Green,
    };

    Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
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

/// Common instruction shortcuts
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", Color::Green, " Select");
    pub const DEL_DELETE: InstructionShortcut = ("Del", Color::Red, " Delete");
    pub const TAB_SCREEN: InstructionShortcut = ("Tab", Color::Cyan, " Next screen");
    pub const F1_HELP: InstructionShortcut = ("F1", Color::Yellow, " Help");
    pub const ESC_QUIT: InstructionShortcut = ("Esc", Color::Red, " Quit");
}
