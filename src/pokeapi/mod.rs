//! PokeAPI data source abstraction.
//!
//! This module defines the read-only interface the lookup screen fetches
//! from, the payload types it decodes, and the error taxonomy for failed
//! requests. The HTTP implementation lives in [`http`]; tests provide their
//! own [`PokemonSource`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::PokeApiClient;

/// Error types for data source operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Pokemon not found: {0}")]
    NotFound(u32),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Lightweight reference to a detail resource, as returned by the collection endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub url: String,
}

impl ListItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Identifier parsed out of the item URL
    pub fn id(&self) -> Option<u32> {
        id_from_url(&self.url)
    }
}

/// Collection endpoint payload. Pagination fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PokemonPage {
    pub results: Vec<ListItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Detail endpoint payload, reduced to what the detail panel shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
}

/// Extract the numeric identifier from the last non-empty path segment.
///
/// `"https://pokeapi.co/api/v2/pokemon/25/"` yields `Some(25)`.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next().and_then(|segment| segment.parse().ok())
}

/// Read-only source of pokemon data.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch the collection listing.
    async fn fetch_list(&self) -> Result<Vec<ListItem>, ApiError>;

    /// Fetch one pokemon by identifier.
    async fn fetch_pokemon(&self, id: u32) -> Result<PokemonDetail, ApiError>;
}
