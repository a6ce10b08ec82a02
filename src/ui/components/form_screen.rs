//! Allow-list validated form.

use crate::ui::components::common::{create_alert_paragraph, create_input_paragraph, AlertKind};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::validation::{AllowList, ValidatedField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct FormScreen {
    field: ValidatedField,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new(AllowList::default())
    }
}

impl FormScreen {
    pub fn new(allow_list: AllowList) -> Self {
        Self {
            field: ValidatedField::new(allow_list),
        }
    }

    pub fn field(&self) -> &ValidatedField {
        &self.field
    }

    fn render_submit_button(&self, f: &mut Frame, area: Rect) {
        let style = if self.field.can_submit() {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(Line::from(Span::styled(" submit ", style))).alignment(Alignment::Center);
        f.render_widget(button, area);
    }

    fn render_image(&self, f: &mut Frame, area: Rect) {
        let Some(alt) = self.field.revealed_image() else {
            return;
        };

        let art = vec![
            Line::from(r"   \:.             .:/"),
            Line::from(r"    \``._________.''/"),
            Line::from(r"     \             /"),
            Line::from(r"      | o       o |"),
            Line::from(r"      |  ( ) ( )  |"),
            Line::from(r"       \   \_/   /"),
            Line::from(r"        `-------'"),
            Line::from(""),
            Line::from(Span::styled(alt.to_string(), Style::default().add_modifier(Modifier::ITALIC))),
        ];

        let image = Paragraph::new(art)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(image, area);
    }
}

impl Component for FormScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.field.push_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.field.pop_char();
                Action::None
            }
            KeyCode::Enter => Action::SubmitForm,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SubmitForm => {
                match self.field.submit() {
                    Ok(value) => log::info!("Form submitted '{}'", value),
                    Err(e) => log::debug!("Form submit refused: {}", e),
                }
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (input_area, message_area, rest) = LayoutManager::form_layout(rect, 3, 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(rest);

        let input = create_input_paragraph(self.field.value(), "Pokemon", "Name", self.field.has_error());
        f.render_widget(input, input_area);

        if let Some(error) = self.field.errors().first() {
            f.render_widget(create_alert_paragraph(error, AlertKind::Danger), message_area);
        } else if let Some(success) = self.field.success_message() {
            f.render_widget(create_alert_paragraph(&success, AlertKind::Success), message_area);
        }

        self.render_submit_button(f, chunks[0]);
        self.render_image(f, chunks[1]);
    }

    fn captures_text(&self) -> bool {
        true
    }
}
