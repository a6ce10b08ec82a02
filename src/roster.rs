//! Add/delete pokemon list management.
//!
//! Two variants share the same rules: additions are validated then
//! prepended, deletions filter the whole collection by key and are a no-op
//! when nothing matches.
//!
//! - [`NameRoster`] keys entries by name
//! - [`PokemonRoster`] keys entries by a generated integer id

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROSTER_NAMES, ERROR_BLANK_POKEMON_NAME, ERROR_DUPLICATE_POKEMON_NAME};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("{}", ERROR_BLANK_POKEMON_NAME)]
    BlankName,
    #[error("{}", ERROR_DUPLICATE_POKEMON_NAME)]
    DuplicateName,
}

fn validate_name(name: &str) -> Result<(), RosterError> {
    if name.trim().is_empty() {
        return Err(RosterError::BlankName);
    }
    Ok(())
}

/// Roster of plain names. Names are the display key, so each appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRoster {
    names: Vec<String>,
}

impl NameRoster {
    /// Build a roster keeping the first occurrence of each name
    pub fn new(names: Vec<String>) -> Self {
        let mut roster = Self { names: Vec::with_capacity(names.len()) };
        for name in names {
            if !roster.contains(&name) {
                roster.names.push(name);
            }
        }
        roster
    }

    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        validate_name(name)?;
        if self.contains(name) {
            return Err(RosterError::DuplicateName);
        }
        self.names.insert(0, name.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Remove the entry equal to `name`
    pub fn delete(&mut self, name: &str) {
        self.names.retain(|existing| existing != name);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NameRoster {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER_NAMES.iter().map(|s| s.to_string()).collect())
    }
}

/// Roster entry with a stable integer identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
}

/// Roster of `{id, name}` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRoster {
    entries: Vec<RosterEntry>,
}

impl PokemonRoster {
    /// Build a roster numbering `names` from 1 in order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .zip(1..)
            .map(|(name, id)| RosterEntry { id, name: name.into() })
            .collect();
        Self { entries }
    }

    pub fn next_id(&self) -> u32 {
        self.entries.iter().map(|entry| entry.id).max().map_or(1, |max| max + 1)
    }

    /// Prepend a new entry and return its id
    pub fn add(&mut self, name: &str) -> Result<u32, RosterError> {
        validate_name(name)?;
        let id = self.next_id();
        self.entries.insert(
            0,
            RosterEntry {
                id,
                name: name.to_string(),
            },
        );
        Ok(id)
    }

    pub fn delete(&mut self, id: u32) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PokemonRoster {
    fn default() -> Self {
        Self::from_names(DEFAULT_ROSTER_NAMES)
    }
}
