//! Core UI functionality for pokedeck.
//!
//! This module contains the building blocks every screen relies on: the
//! [`Action`] vocabulary components use to talk to their parents, the
//! [`Component`] trait, terminal event polling, and the [`TaskManager`] that
//! runs fetches in the background.
//!
//! # Architecture
//!
//! 1. **Components** implement [`Component`] and own their local state
//! 2. **Actions** flow upward from key handling and back down through `update`
//! 3. **Events** are polled by the [`EventHandler`]
//! 4. **Fetches** run on tokio via the [`TaskManager`] and return as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Screen};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
