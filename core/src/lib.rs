//! Core of the FaBO client: board model, turn parser, store and views.
//!
//! Nothing in this crate performs I/O. Transports live in `fabo-api`
//! (terminal) and `fabo-client` (browser).

pub mod api;
pub mod config;
pub mod error;
pub mod log;
pub mod parser;
pub mod state;
pub mod store;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use api::{ApiRequest, Credentials, Endpoint, Method};
pub use config::ApiConfig;
pub use error::{GameError, GameResult};
pub use parser::{parse_game_state, return_card};
pub use state::*;
pub use store::{Action, GameStore, ListenerId};
pub use types::*;
pub use view::*;
