use super::fetch_state::{FetchState, RequestId, RequestTracker};
use crate::pokeapi::{ApiError, ListItem};

/// Collection listing backed by a single fetch per mount.
///
/// Failures are logged and otherwise dropped: the list stays empty and the
/// shared error channel is left untouched.
#[derive(Debug, Default)]
pub struct PokemonListResource {
    state: FetchState<Vec<ListItem>>,
    tracker: RequestTracker,
}

impl PokemonListResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the one request for this mount. Returns `None` once a request was issued.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.tracker.latest().is_some() {
            log::debug!("Pokemon list already requested, not fetching again");
            return None;
        }

        let request_id = self.tracker.issue();
        self.state = FetchState::Loading { request_id };
        Some(request_id)
    }

    /// Apply a completed fetch. Returns `false` when the completion was not awaited.
    pub fn resolve(&mut self, request_id: RequestId, result: Result<Vec<ListItem>, ApiError>) -> bool {
        if self.state.pending_request() != Some(request_id) {
            log::debug!("Dropping stale pokemon list completion #{}", request_id);
            return false;
        }

        self.state = match result {
            Ok(items) => {
                log::info!("Loaded {} pokemon", items.len());
                FetchState::Loaded(items)
            }
            Err(e) => {
                log::warn!("Failed to load pokemon list: {}", e);
                FetchState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn items(&self) -> &[ListItem] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Not-yet-started counts as loading: the listing is requested on mount.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading() || self.state.is_idle()
    }

    pub fn state(&self) -> &FetchState<Vec<ListItem>> {
        &self.state
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn remove_item(&mut self, index: usize) -> Option<ListItem> {
        match &mut self.state {
            FetchState::Loaded(items) if index < items.len() => Some(items.remove(index)),
            _ => None,
        }
    }
}
