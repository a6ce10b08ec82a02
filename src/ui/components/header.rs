//! Header with the app title and screen tabs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::constants::APP_TITLE;
use crate::ui::core::Screen;

pub struct Header;

impl Header {
    pub fn render(f: &mut Frame, area: Rect, active: Screen) {
        let titles: Vec<Line> = Screen::ALL
            .iter()
            .enumerate()
            .map(|(i, screen)| Line::from(format!("{} {}", i + 1, screen.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", APP_TITLE))
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .select(active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider(" │ ");

        f.render_widget(tabs, area);
    }
}
