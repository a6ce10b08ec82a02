use crate::pokeapi::{ApiError, ListItem, PokemonDetail};
use crate::store::RequestId;

/// Top-level screens, one per exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    Color,
    Roster,
    Form,
    #[default]
    Lookup,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Color, Screen::Roster, Screen::Form, Screen::Lookup];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Color => "Color",
            Screen::Roster => "Roster",
            Screen::Form => "Form",
            Screen::Lookup => "Lookup",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|screen| screen == self).unwrap_or(0)
    }

    pub fn next(&self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Screen {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a configured screen name
    pub fn from_name(name: &str) -> Option<Screen> {
        match name {
            "color" => Some(Screen::Color),
            "roster" => Some(Screen::Roster),
            "form" => Some(Screen::Form),
            "lookup" => Some(Screen::Lookup),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchScreen(Screen),
    NextScreen,
    PreviousScreen,

    // Lookup screen
    SelectPokemon(u32),
    RemoveListItem(usize),
    DismissError,
    FetchPokemonList {
        request_id: RequestId,
    },
    FetchPokemon {
        request_id: RequestId,
        pokemon_id: u32,
    },
    PokemonListLoaded {
        request_id: RequestId,
        result: Result<Vec<ListItem>, ApiError>,
    },
    PokemonLoaded {
        request_id: RequestId,
        result: Result<PokemonDetail, ApiError>,
    },

    // Roster screen
    AddPokemon(String),
    DeletePokemonByName(String),
    DeletePokemonById(u32),
    ToggleRosterVariant,

    // Form screen
    SubmitForm,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
