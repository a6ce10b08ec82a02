/// Sequence number identifying one issued request
pub type RequestId = u64;

/// Lifecycle of one fetch-backed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Request currently awaited, if any
    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            FetchState::Loading { request_id } => Some(*request_id),
            _ => None,
        }
    }
}

/// Hands out increasing request ids and remembers the latest one.
///
/// Only a completion carrying the latest id may change state; anything older
/// was superseded by a newer request.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: RequestId,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, request_id: RequestId) -> bool {
        self.latest != 0 && request_id == self.latest
    }

    pub fn latest(&self) -> Option<RequestId> {
        (self.latest != 0).then_some(self.latest)
    }
}
