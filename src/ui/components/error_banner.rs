//! Banner showing the shared error channel's current message

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::ErrorChannel;

pub struct ErrorBanner;

impl ErrorBanner {
    /// Render the banner; an empty message renders nothing
    pub fn render(f: &mut Frame, area: Rect, errors: &ErrorChannel) {
        let message = errors.get();
        if message.is_empty() || area.height == 0 {
            return;
        }

        let banner = Paragraph::new(message)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Error (x to dismiss) ")
                    .border_style(Style::default().fg(Color::Red)),
            )
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);

        f.render_widget(banner, area);
    }
}
