//! Client-side store
//!
//! Holds the last-known [`ClientState`], applies [`Action`]s to it and tells
//! every subscribed view about the new state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::log;
use crate::parser::parse_game_state;
use crate::state::*;
use crate::types::Card;

/// Fallback text when a rejected request carries no message
pub const UNKNOWN_ERROR_MESSAGE: &str = "an error happened";

/// Everything that can change the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    SetGameInfo(GameInfo),
    #[serde(rename_all = "camelCase")]
    SetPopUp {
        card_number: String,
        x_coord: Option<i32>,
        y_coord: Option<i32>,
    },
    ClearPopUp,
    SetPlayCardMessage,
    ClearPlayCardMessage,
    #[serde(rename_all = "camelCase")]
    SetCardListFocus {
        card_list: Option<Vec<Card>>,
        name: Option<String>,
    },
    ClearCardListFocus,
    /// Outcome of a turn poll; `None` when the poll failed
    NextTurnFulfilled(Option<GameState>),
    /// A request came back with an error status
    RequestRejected {
        status: String,
        message: Option<String>,
    },
    DismissToast(u64),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SetGameInfo(_) => "setGameInfo",
            Action::SetPopUp { .. } => "setPopUp",
            Action::ClearPopUp => "clearPopUp",
            Action::SetPlayCardMessage => "setPlayCardMessage",
            Action::ClearPlayCardMessage => "clearPlayCardMessage",
            Action::SetCardListFocus { .. } => "setCardListFocus",
            Action::ClearCardListFocus => "clearCardListFocus",
            Action::NextTurnFulfilled(_) => "nextTurn/fulfilled",
            Action::RequestRejected { .. } => "request/rejected",
            Action::DismissToast(_) => "dismissToast",
        }
    }
}

/// Text shown to the user for a rejected request
pub fn rejection_message(status: &str, message: Option<&str>) -> String {
    format!(
        "Error: {} - {}",
        status,
        message.unwrap_or(UNKNOWN_ERROR_MESSAGE)
    )
}

/// Handle returned by [`GameStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&ClientState)>;

pub struct GameStore {
    state: ClientState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    next_toast_id: u64,
}

impl GameStore {
    pub fn new() -> Self {
        Self::with_state(ClientState::default())
    }

    pub fn with_state(state: ClientState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_listener_id: 1,
            next_toast_id: 1,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn game_info(&self) -> &GameInfo {
        &self.state.game_info
    }

    /// Register a view to be told about every new state
    pub fn subscribe(&mut self, listener: impl Fn(&ClientState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply an action and notify listeners
    pub fn dispatch(&mut self, action: Action) {
        log::action(action.name(), "dispatch");
        self.reduce(action);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// Parse a raw turn response and dispatch it.
    ///
    /// A blob that fails to parse counts as a failed poll: it is logged and
    /// the board is left as it was.
    pub fn apply_turn_text(&mut self, text: &str) -> bool {
        match parse_game_state(text) {
            Ok(turn) => {
                self.dispatch(Action::NextTurnFulfilled(Some(turn)));
                true
            }
            Err(err) => {
                log::error(&format!("could not parse turn: {}", err));
                self.dispatch(Action::NextTurnFulfilled(None));
                false
            }
        }
    }

    fn reduce(&mut self, action: Action) {
        let state = &mut self.state;
        match action {
            Action::SetGameInfo(info) => {
                state.game_info = info;
            }
            Action::SetPopUp {
                card_number,
                x_coord,
                y_coord,
            } => {
                state.popup = Popup {
                    popup_on: true,
                    x_coord,
                    y_coord,
                    popup_card: Some(Card::new(card_number)),
                };
            }
            Action::ClearPopUp => {
                state.popup = Popup::default();
            }
            Action::SetPlayCardMessage => {
                state.play_card_message = PlayCardMessage {
                    popup_on: true,
                    message: Some(PLAY_CARD_MESSAGE.to_string()),
                };
            }
            Action::ClearPlayCardMessage => {
                state.play_card_message = PlayCardMessage::default();
            }
            Action::SetCardListFocus { card_list, name } => {
                state.card_list_focus = Some(CardListFocus {
                    active: true,
                    card_list,
                    name,
                });
            }
            Action::ClearCardListFocus => {
                state.card_list_focus = None;
            }
            Action::NextTurnFulfilled(None) => {}
            Action::NextTurnFulfilled(Some(turn)) => {
                state.apply_turn(turn);
                log::state_summary(
                    state.game_info.game_id,
                    state.game_info.player_id,
                    state.turns_received,
                    state.game.player_one.health.unwrap_or_default(),
                    state.game.player_two.health.unwrap_or_default(),
                );
            }
            Action::RequestRejected { status, message } => {
                let text = rejection_message(&status, message.as_deref());
                log::warn(&format!("rejected request: {}", text));
                let id = self.next_toast_id;
                self.next_toast_id += 1;
                state.toasts.push(Toast { id, message: text });
            }
            Action::DismissToast(id) => {
                state.toasts.retain(|toast| toast.id != id);
            }
        }
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
