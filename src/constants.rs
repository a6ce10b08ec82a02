//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Titles
pub const APP_TITLE: &str = "Pokemon App";
pub const COLOR_APP_TITLE: &str = "Color App";

// Roster defaults
pub const DEFAULT_ROSTER_NAMES: [&str; 3] = ["Pikachu", "Charmander", "Bulbasaur"];

// Validated form defaults
pub const DEFAULT_ALLOW_LIST: [&str; 4] = ["pikachu", "Kevin", "Nico", "Ibrahim"];

// Color swatch defaults
pub const COLOR_DEFAULT_VALUE: &str = "No Value";

// Validation Error Messages
pub const ERROR_BLANK_POKEMON_NAME: &str = "Please add a Pokemon name";
pub const ERROR_POKEMON_NOT_ALLOWED: &str = "Pokemon not found";
pub const ERROR_DUPLICATE_POKEMON_NAME: &str = "This Pokemon is already in the list";

// Shared error channel codes
pub const ERROR_CODE_POKEMON_NOT_FOUND: &str = "POKEMON_NOT_FOUND";

// Success Messages
pub const SUCCESS_CAN_SUBMIT_PREFIX: &str = "You can submit the pokemon: ";

// Placeholders
pub const LOADING_PLACEHOLDER: &str = "loading";
pub const ROSTER_INPUT_PLACEHOLDER: &str = "Enter new Pokémon";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'G' to close";

// API
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Minimum time fetched data stays hidden behind the loading placeholder
pub const DEFAULT_MIN_LATENCY_MS: u64 = 500;
pub const MAX_MIN_LATENCY_MS: u64 = 10_000;
/// Zero disables the request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
pub const MAX_TIMEOUT_SECS: u64 = 120;

// UI Layout Constants
/// Minimum aside width in columns
pub const ASIDE_MIN_WIDTH: u16 = 15;
/// Maximum aside width in columns
pub const ASIDE_MAX_WIDTH: u16 = 50;
/// Default aside width in columns
pub const ASIDE_DEFAULT_WIDTH: u16 = 28;
