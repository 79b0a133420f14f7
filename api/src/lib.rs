//! Terminal-side transport for the FaBO client.
//!
//! Builds on the request descriptors in `fabo-core` and executes them with a
//! blocking ureq agent.

pub mod client;
pub mod error;
pub mod poller;
pub mod settings;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use poller::{PollSummary, Poller};
pub use settings::{load_config, load_config_from};
pub use transport::{Response, Transport, UreqTransport};
