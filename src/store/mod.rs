//! Fetch-backed state shared by the lookup screen.
//!
//! - [`ErrorChannel`] - single-slot error message store any producer can write
//! - [`FetchState`] / [`RequestTracker`] - per-resource request state machine
//! - [`PokemonListResource`] - collection listing, fetched once per mount
//! - [`PokemonDetailResource`] - detail record keyed by the selected identifier
//!
//! Resources never perform I/O themselves: they issue request ids, the
//! [`TaskManager`](crate::ui::core::TaskManager) runs the fetch, and the
//! completion is fed back through `resolve`.

pub mod detail;
pub mod error_channel;
pub mod fetch_state;
pub mod list;

pub use detail::PokemonDetailResource;
pub use error_channel::ErrorChannel;
pub use fetch_state::{FetchState, RequestId, RequestTracker};
pub use list::PokemonListResource;
