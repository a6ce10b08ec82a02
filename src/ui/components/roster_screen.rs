//! Add/delete roster screen with its two variants.

use crate::constants::ROSTER_INPUT_PLACEHOLDER;
use crate::roster::{NameRoster, PokemonRoster};
use crate::ui::components::common::{create_alert_paragraph, create_input_paragraph, AlertKind};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::ui::layout::LayoutManager;

/// Which roster the screen edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterVariant {
    /// Entries keyed by name
    #[default]
    Names,
    /// Entries keyed by generated id
    Records,
}

pub struct RosterScreen {
    variant: RosterVariant,
    names: NameRoster,
    records: PokemonRoster,
    input: String,
    error: Option<String>,
    list_state: ListState,
}

impl Default for RosterScreen {
    fn default() -> Self {
        Self::new(NameRoster::default(), PokemonRoster::default())
    }
}

impl RosterScreen {
    pub fn new(names: NameRoster, records: PokemonRoster) -> Self {
        let mut screen = Self {
            variant: RosterVariant::default(),
            names,
            records,
            input: String::new(),
            error: None,
            list_state: ListState::default(),
        };
        screen.clamp_selection();
        screen
    }

    /// Build both variants from the same starting names
    pub fn from_names(initial: &[String]) -> Self {
        Self::new(
            NameRoster::new(initial.to_vec()),
            PokemonRoster::from_names(initial.iter().cloned()),
        )
    }

    pub fn variant(&self) -> RosterVariant {
        self.variant
    }

    pub fn names(&self) -> &NameRoster {
        &self.names
    }

    pub fn records(&self) -> &PokemonRoster {
        &self.records
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn len(&self) -> usize {
        match self.variant {
            RosterVariant::Names => self.names.len(),
            RosterVariant::Records => self.records.len(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let index = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(index));
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }

    fn delete_highlighted(&self) -> Action {
        let Some(index) = self.list_state.selected() else {
            return Action::None;
        };

        match self.variant {
            RosterVariant::Names => self
                .names
                .names()
                .get(index)
                .map_or(Action::None, |name| Action::DeletePokemonByName(name.clone())),
            RosterVariant::Records => self
                .records
                .entries()
                .get(index)
                .map_or(Action::None, |entry| Action::DeletePokemonById(entry.id)),
        }
    }

    fn add(&mut self, name: String) {
        let result = match self.variant {
            RosterVariant::Names => self.names.add(&name),
            RosterVariant::Records => self.records.add(&name).map(|_| ()),
        };

        match result {
            Ok(()) => {
                log::info!("Roster: added '{}'", name);
                self.error = None;
                self.input.clear();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn list_lines(&self) -> Vec<ListItem<'static>> {
        let name_style = Style::default().fg(Color::White);
        match self.variant {
            RosterVariant::Names => self
                .names
                .names()
                .iter()
                .map(|name| ListItem::new(Line::from(Span::styled(name.clone(), name_style))))
                .collect(),
            RosterVariant::Records => self
                .records
                .entries()
                .iter()
                .map(|entry| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("#{:<3} ", entry.id), Style::default().fg(Color::DarkGray)),
                        Span::styled(entry.name.clone(), name_style),
                    ]))
                })
                .collect(),
        }
    }
}

impl Component for RosterScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleRosterVariant,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Enter => Action::AddPokemon(self.input.clone()),
            KeyCode::Down => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Delete => self.delete_highlighted(),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::AddPokemon(name) => self.add(name),
            Action::DeletePokemonByName(name) => self.names.delete(&name),
            Action::DeletePokemonById(id) => self.records.delete(id),
            Action::ToggleRosterVariant => {
                self.variant = match self.variant {
                    RosterVariant::Names => RosterVariant::Records,
                    RosterVariant::Records => RosterVariant::Names,
                };
                self.error = None;
            }
            other => return other,
        }
        self.clamp_selection();
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (input_area, error_area, list_area) = LayoutManager::form_layout(rect, 3, 1);

        let input = create_input_paragraph(&self.input, "Add", ROSTER_INPUT_PLACEHOLDER, self.error.is_some());
        f.render_widget(input, input_area);

        if let Some(error) = &self.error {
            f.render_widget(create_alert_paragraph(error, AlertKind::Danger), error_area);
        }

        let title = match self.variant {
            RosterVariant::Names => format!(" Pokemon by name ({}) ", self.names.len()),
            RosterVariant::Records => format!(" Pokemon by id ({}) ", self.records.len()),
        };
        let list = List::new(self.list_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("→ ");

        f.render_stateful_widget(list, list_area, &mut self.list_state);
    }

    fn captures_text(&self) -> bool {
        true
    }
}
