use super::error_channel::ErrorChannel;
use super::fetch_state::{FetchState, RequestId, RequestTracker};
use crate::constants::ERROR_CODE_POKEMON_NOT_FOUND;
use crate::pokeapi::{ApiError, PokemonDetail};

/// Detail record for the currently selected identifier.
///
/// Every change of selection resets the record and issues a new request;
/// only the completion of the latest request is applied. Failures report
/// [`ERROR_CODE_POKEMON_NOT_FOUND`] on the shared [`ErrorChannel`].
#[derive(Debug)]
pub struct PokemonDetailResource {
    selected: Option<u32>,
    state: FetchState<PokemonDetail>,
    tracker: RequestTracker,
    errors: ErrorChannel,
}

impl PokemonDetailResource {
    pub fn new(errors: ErrorChannel) -> Self {
        Self {
            selected: None,
            state: FetchState::Idle,
            tracker: RequestTracker::new(),
            errors,
        }
    }

    /// Change the selected identifier.
    ///
    /// Returns the request to perform, or `None` when the selection did not
    /// change or was cleared.
    pub fn select(&mut self, id: Option<u32>) -> Option<RequestId> {
        if id == self.selected && !self.state.is_idle() {
            return None;
        }

        self.selected = id;
        match id {
            Some(pokemon_id) => {
                let request_id = self.tracker.issue();
                log::debug!("Requesting pokemon {} as #{}", pokemon_id, request_id);
                self.state = FetchState::Loading { request_id };
                Some(request_id)
            }
            None => {
                self.state = FetchState::Idle;
                None
            }
        }
    }

    /// Apply a completed fetch. Returns `false` when it was superseded.
    pub fn resolve(&mut self, request_id: RequestId, result: Result<PokemonDetail, ApiError>) -> bool {
        if self.state.pending_request() != Some(request_id) {
            log::debug!("Dropping stale pokemon detail completion #{}", request_id);
            return false;
        }

        self.state = match result {
            Ok(detail) => FetchState::Loaded(detail),
            Err(e) => {
                log::warn!("Failed to load pokemon {:?}: {}", self.selected, e);
                self.errors.set(ERROR_CODE_POKEMON_NOT_FOUND);
                FetchState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn data(&self) -> Option<&PokemonDetail> {
        self.state.data()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn state(&self) -> &FetchState<PokemonDetail> {
        &self.state
    }
}
