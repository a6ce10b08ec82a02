//! Reusable UI components

pub mod common;

// Leaf components
pub mod aside_menu;
pub mod detail_section;
pub mod error_banner;
pub mod header;
pub mod status_bar;

// Screens
pub mod color_screen;
pub mod form_screen;
pub mod lookup_screen;
pub mod roster_screen;

pub mod dialog_component;

// Component exports
pub use aside_menu::AsideMenu;
pub use color_screen::ColorScreen;
pub use detail_section::DetailSection;
pub use dialog_component::DialogComponent;
pub use error_banner::ErrorBanner;
pub use form_screen::FormScreen;
pub use header::Header;
pub use lookup_screen::LookupScreen;
pub use roster_screen::{RosterScreen, RosterVariant};
pub use status_bar::StatusBar;
