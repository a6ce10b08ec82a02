//! Pokemon lookup: fetched list in the aside, selected pokemon in the detail section.

use crate::constants::LOADING_PLACEHOLDER;
use crate::store::{ErrorChannel, PokemonDetailResource, PokemonListResource};
use crate::ui::components::{AsideMenu, DetailSection};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Root of the lookup screen.
///
/// Holds the selected identifier (through the detail resource) and the two
/// fetch-backed resources. Fetches themselves are requested from the parent
/// with [`Action::FetchPokemonList`] and [`Action::FetchPokemon`].
pub struct LookupScreen {
    list: PokemonListResource,
    detail: PokemonDetailResource,
    aside: AsideMenu,
    errors: ErrorChannel,
    aside_width: u16,
}

impl LookupScreen {
    pub fn new(errors: ErrorChannel, aside_width: u16) -> Self {
        Self {
            list: PokemonListResource::new(),
            detail: PokemonDetailResource::new(errors.clone()),
            aside: AsideMenu::new(),
            errors,
            aside_width,
        }
    }

    pub fn list(&self) -> &PokemonListResource {
        &self.list
    }

    pub fn detail(&self) -> &PokemonDetailResource {
        &self.detail
    }

    pub fn aside(&self) -> &AsideMenu {
        &self.aside
    }

    /// The detail section is shown once anything (including id 0) was selected
    pub fn shows_section(&self) -> bool {
        self.detail.selected().is_some()
    }

    fn select(&mut self, pokemon_id: u32) -> Action {
        match self.detail.select(Some(pokemon_id)) {
            Some(request_id) => Action::FetchPokemon { request_id, pokemon_id },
            None => Action::None,
        }
    }
}

impl Component for LookupScreen {
    fn mount(&mut self) -> Action {
        match self.list.begin() {
            Some(request_id) => Action::FetchPokemonList { request_id },
            None => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('x') {
            return Action::DismissError;
        }

        if self.list.is_loading() {
            return Action::None;
        }

        self.aside.handle_key_events(key)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectPokemon(pokemon_id) => self.select(pokemon_id),
            Action::RemoveListItem(index) => {
                if let Some(removed) = self.list.remove_item(index) {
                    log::info!("Removed '{}' from the list", removed.name);
                    self.aside.update_data(self.list.items());
                }
                Action::None
            }
            Action::DismissError => {
                self.errors.set("");
                Action::None
            }
            Action::PokemonListLoaded { request_id, result } => {
                if self.list.resolve(request_id, result) {
                    self.aside.update_data(self.list.items());
                }
                Action::None
            }
            Action::PokemonLoaded { request_id, result } => {
                self.detail.resolve(request_id, result);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (aside_area, section_area) = LayoutManager::aside_layout(rect, self.aside_width);

        if self.list.is_loading() {
            let placeholder = Paragraph::new(LOADING_PLACEHOLDER)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(placeholder, aside_area);
        } else {
            self.aside.render(f, aside_area);
        }

        if self.shows_section() {
            DetailSection::render(f, section_area, &self.detail);
        }
    }
}
