//! Selectable pokemon list shown in the lookup screen's aside.

use crate::pokeapi::ListItem as PokemonItem;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Bulleted list of pokemon; Enter selects the highlighted entry by the id in its URL.
pub struct AsideMenu {
    items: Vec<PokemonItem>,
    list_state: ListState,
}

impl Default for AsideMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl AsideMenu {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, items: &[PokemonItem]) {
        self.items = items.to_vec();
        self.update_list_state();
    }

    pub fn items(&self) -> &[PokemonItem] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.list_state.select(None);
            return;
        }

        let index = self
            .list_state
            .selected()
            .unwrap_or(0)
            .min(self.items.len().saturating_sub(1));
        self.list_state.select(Some(index));
    }

    fn move_selection(&mut self, forward: bool) {
        if self.items.is_empty() {
            return;
        }

        let len = self.items.len();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }

    fn select_highlighted(&self) -> Action {
        let Some(item) = self.list_state.selected().and_then(|index| self.items.get(index)) else {
            return Action::None;
        };

        match item.id() {
            Some(id) => Action::SelectPokemon(id),
            None => {
                log::warn!("No identifier in url '{}' for '{}'", item.url, item.name);
                Action::None
            }
        }
    }
}

impl Component for AsideMenu {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Home => {
                if !self.items.is_empty() {
                    self.list_state.select(Some(0));
                }
                Action::None
            }
            KeyCode::End => {
                if !self.items.is_empty() {
                    self.list_state.select(Some(self.items.len() - 1));
                }
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_highlighted(),
            KeyCode::Char('d') | KeyCode::Delete => match self.list_state.selected() {
                Some(index) if index < self.items.len() => Action::RemoveListItem(index),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let max_name_width = rect.width.saturating_sub(6) as usize;
        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        LayoutManager::truncate(&item.name, max_name_width),
                        Style::default().fg(Color::White),
                    ),
                ]))
            })
            .collect();

        let list = List::new(list_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" Pokemon ({}) ", self.items.len())),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("→ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
