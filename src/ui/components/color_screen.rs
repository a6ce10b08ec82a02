//! Color box driven by a free-text color input

use crate::color::ColorSwatch;
use crate::constants::COLOR_APP_TITLE;
use crate::ui::components::common::create_input_paragraph;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct ColorScreen {
    swatch: ColorSwatch,
}

impl Default for ColorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorScreen {
    pub fn new() -> Self {
        Self {
            swatch: ColorSwatch::new(),
        }
    }

    pub fn swatch(&self) -> &ColorSwatch {
        &self.swatch
    }

    fn render_box(&self, f: &mut Frame, area: Rect) {
        let background = self.swatch.rgb().map(|(r, g, b)| Color::Rgb(r, g, b));
        // Dark text on light backgrounds
        let foreground = match self.swatch.rgb() {
            Some((r, g, b)) if (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000 > 128 => Color::Black,
            _ => Color::White,
        };

        let mut style = Style::default().fg(foreground).add_modifier(Modifier::BOLD);
        if let Some(bg) = background {
            style = style.bg(bg);
        }

        let text = vec![
            Line::from(""),
            Line::from(self.swatch.value().to_string()),
            Line::from(self.swatch.hex().to_string()),
        ];

        let swatch_box = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", COLOR_APP_TITLE)),
            )
            .style(style)
            .alignment(Alignment::Center);

        f.render_widget(swatch_box, area);
    }
}

impl Component for ColorScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.swatch.push_char(c);
            }
            KeyCode::Backspace => self.swatch.pop_char(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(rect);

        self.render_box(f, chunks[0]);
        let input = create_input_paragraph(self.swatch.input(), "Color", "", false);
        f.render_widget(input, chunks[1]);
    }

    fn captures_text(&self) -> bool {
        true
    }
}
