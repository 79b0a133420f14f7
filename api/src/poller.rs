//! Turn polling
//!
//! Fetches the next turn on a fixed interval and feeds the result into a
//! [`GameStore`]. There is no backoff: a failed poll is reported and the
//! next one runs on schedule.

use std::thread;
use std::time::Duration;

use fabo_core::log;
use fabo_core::{Action, GameStore};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Counts from one polling run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub applied: u32,
    pub failed: u32,
}

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    max_polls: Option<u32>,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_polls: None,
        }
    }

    /// Stop after this many polls instead of running forever
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }

    /// Run one poll against the store's current game
    pub fn poll_once<T: Transport>(&self, client: &ApiClient<T>, store: &mut GameStore) -> bool {
        let info = store.game_info().clone();
        match client.next_turn(&info) {
            Ok(turn) => {
                store.dispatch(Action::NextTurnFulfilled(Some(turn)));
                log::result(true, "turn applied");
                true
            }
            Err(err) => {
                log::error(&format!("next turn failed: {}", err));
                if let ApiError::Status(_) = err {
                    store.dispatch(Action::RequestRejected {
                        status: err.status_text(),
                        message: None,
                    });
                }
                store.dispatch(Action::NextTurnFulfilled(None));
                false
            }
        }
    }

    /// Poll until `max_polls` is reached (never, if unset)
    pub fn run<T: Transport>(&self, client: &ApiClient<T>, store: &mut GameStore) -> PollSummary {
        let mut summary = PollSummary::default();
        let mut polls = 0u32;
        while self.max_polls.map_or(true, |max| polls < max) {
            if polls > 0 {
                thread::sleep(self.interval);
            }
            if self.poll_once(client, store) {
                summary.applied += 1;
            } else {
                summary.failed += 1;
            }
            polls += 1;
        }
        summary
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}
