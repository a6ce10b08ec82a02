//! pokedeck - a terminal playground of small Pokémon exercises
//!
//! The library hosts four screens in one Ratatui application: a color box
//! driven by free-text input, an add/delete roster, a form validated against
//! an allow-list, and a list/detail lookup backed by the PokeAPI.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`pokeapi`] - PokeAPI data source and payload types
//! * [`store`] - Fetch state machines and the shared error channel
//! * [`roster`] - Add/delete list management
//! * [`validation`] - Allow-list validated form field
//! * [`color`] - Color name resolution
//! * [`ui`] - Terminal user interface components

/// Color name to hex resolution for the color box
pub mod color;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// PokeAPI client and data models
pub mod pokeapi;

/// Add/delete pokemon rosters
pub mod roster;

/// Fetch-backed resources and the shared error channel
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Allow-list validation for the form screen
pub mod validation;
