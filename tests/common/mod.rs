#![allow(dead_code)]

use async_trait::async_trait;
use pokedeck::config::Config;
use pokedeck::pokeapi::{ApiError, ListItem, PokemonDetail, PokemonSource, Sprites};
use pokedeck::ui::AppComponent;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory pokemon source with optional per-id response delays
pub struct FakeSource {
    list: Result<Vec<ListItem>, ApiError>,
    details: HashMap<u32, (Duration, Result<PokemonDetail, ApiError>)>,
    requested: Mutex<Vec<u32>>,
    list_requests: Mutex<usize>,
}

impl FakeSource {
    pub fn new(list: Result<Vec<ListItem>, ApiError>) -> Self {
        Self {
            list,
            details: HashMap::new(),
            requested: Mutex::new(Vec::new()),
            list_requests: Mutex::new(0),
        }
    }

    pub fn with_detail(mut self, id: u32, name: &str) -> Self {
        self.details.insert(id, (Duration::ZERO, Ok(detail(name))));
        self
    }

    pub fn with_slow_detail(mut self, id: u32, name: &str, delay: Duration) -> Self {
        self.details.insert(id, (delay, Ok(detail(name))));
        self
    }

    pub fn with_failure(mut self, id: u32, error: ApiError) -> Self {
        self.details.insert(id, (Duration::ZERO, Err(error)));
        self
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> usize {
        *self.list_requests.lock().unwrap()
    }
}

#[async_trait]
impl PokemonSource for FakeSource {
    async fn fetch_list(&self) -> Result<Vec<ListItem>, ApiError> {
        *self.list_requests.lock().unwrap() += 1;
        self.list.clone()
    }

    async fn fetch_pokemon(&self, id: u32) -> Result<PokemonDetail, ApiError> {
        self.requested.lock().unwrap().push(id);
        match self.details.get(&id) {
            Some((delay, result)) => {
                tokio::time::sleep(*delay).await;
                result.clone()
            }
            None => Err(ApiError::NotFound(id)),
        }
    }
}

pub fn detail(name: &str) -> PokemonDetail {
    PokemonDetail {
        name: name.to_string(),
        sprites: Sprites {
            front_default: Some(format!("https://img.example/{}.png", name)),
        },
    }
}

pub fn item(name: &str, id: u32) -> ListItem {
    ListItem::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
}

/// Defaults with no artificial latency
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api.min_latency_ms = 0;
    config
}

/// Drain background completions until `done` holds or two seconds pass
pub async fn wait_until<F>(app: &mut AppComponent, mut done: F) -> bool
where
    F: FnMut(&AppComponent) -> bool,
{
    for _ in 0..400 {
        app.process_background_actions();
        if done(app) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}
