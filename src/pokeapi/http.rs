//! HTTP implementation of [`PokemonSource`] backed by `reqwest`.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use super::{ApiError, ListItem, PokemonDetail, PokemonPage, PokemonSource};
use crate::config::ApiConfig;

/// PokeAPI REST client.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Build a client; `timeout` of `None` waits for responses indefinitely
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!("pokedeck/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn list_url(&self) -> String {
        format!("{}/pokemon", self.base_url)
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        log::debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch_list(&self) -> Result<Vec<ListItem>, ApiError> {
        let response = self.get(&self.list_url()).await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let page: PokemonPage = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))?;
        Ok(page.results)
    }

    async fn fetch_pokemon(&self, id: u32) -> Result<PokemonDetail, ApiError> {
        let response = self.get(&self.detail_url(id)).await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound(id)),
            status if !status.is_success() => return Err(ApiError::Status(status.as_u16())),
            _ => {}
        }

        response
            .json::<PokemonDetail>()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))
    }
}
