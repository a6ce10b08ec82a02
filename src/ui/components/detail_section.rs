//! Detail panel for the selected pokemon

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::LOADING_PLACEHOLDER;
use crate::store::PokemonDetailResource;

pub struct DetailSection;

impl DetailSection {
    /// Lines shown for the resource's current state; `None` means render nothing
    pub fn lines(resource: &PokemonDetailResource) -> Option<Vec<Line<'static>>> {
        if resource.is_loading() {
            return Some(vec![Line::from(LOADING_PLACEHOLDER)]);
        }

        let data = resource.data()?;
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let id = resource.selected().map(|id| id.to_string()).unwrap_or_default();
        let sprite = data
            .sprites
            .front_default
            .clone()
            .unwrap_or_else(|| format!("[no sprite for {}]", data.name));

        Some(vec![
            Line::from(vec![Span::styled("Pokemon id: ", label), Span::styled(id, value)]),
            Line::from(vec![
                Span::styled("Pokemon name: ", label),
                Span::styled(data.name.clone(), value),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("[{}] ", data.name), Style::default().fg(Color::Cyan)),
                Span::styled(sprite, Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)),
            ]),
        ])
    }

    pub fn render(f: &mut Frame, area: Rect, resource: &PokemonDetailResource) {
        let Some(lines) = Self::lines(resource) else {
            return;
        };

        let section = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Details "),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(section, area);
    }
}
