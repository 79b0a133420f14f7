//! Game session for browser WASM builds
//!
//! Wraps the client store for the JS frontend. The frontend performs the
//! HTTP calls itself with `fetch`, using the request descriptors built here,
//! and hands the responses back.

use fabo_core::log;
use fabo_core::{Action, ApiConfig, Card, ClientState, Endpoint, GameInfo, GameStore, GameView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(label: &str, value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(val) => val,
        Err(e) => {
            log::error(&format!("{} serialization failed: {:?}", label, e));
            JsValue::NULL
        }
    }
}

/// The client store exposed to WASM
#[wasm_bindgen]
pub struct GameSession {
    store: GameStore,
    config: ApiConfig,
}

#[wasm_bindgen]
impl GameSession {
    #[wasm_bindgen(constructor)]
    pub fn new(game_id: u64, player_id: u32, auth_key: String) -> Self {
        log::info("=== FABO SESSION INITIALIZED ===");
        let mut session = Self {
            store: GameStore::new(),
            config: ApiConfig::default(),
        };
        session.set_game_info(game_id, player_id, auth_key);
        session
    }

    #[wasm_bindgen]
    pub fn set_game_info(&mut self, game_id: u64, player_id: u32, auth_key: String) {
        self.store
            .dispatch(Action::SetGameInfo(GameInfo::new(game_id, player_id, auth_key)));
    }

    /// Development builds route unselected games and the game list to dev
    #[wasm_bindgen]
    pub fn set_dev_mode(&mut self, dev_mode: bool) {
        self.config.dev_mode = dev_mode;
    }

    /// Replace the server configuration (JSON, camelCase fields)
    #[wasm_bindgen]
    pub fn set_config(&mut self, config_js: JsValue) -> Result<(), String> {
        self.config = serde_wasm_bindgen::from_value(config_js)
            .map_err(|e| format!("Failed to parse config: {:?}", e))?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_pop_up(&mut self, card_number: String, x_coord: Option<i32>, y_coord: Option<i32>) {
        self.store.dispatch(Action::SetPopUp {
            card_number,
            x_coord,
            y_coord,
        });
    }

    #[wasm_bindgen]
    pub fn clear_pop_up(&mut self) {
        self.store.dispatch(Action::ClearPopUp);
    }

    #[wasm_bindgen]
    pub fn set_play_card_message(&mut self) {
        self.store.dispatch(Action::SetPlayCardMessage);
    }

    #[wasm_bindgen]
    pub fn clear_play_card_message(&mut self) {
        self.store.dispatch(Action::ClearPlayCardMessage);
    }

    /// Focus a zone's card list (array of cards from JS)
    #[wasm_bindgen]
    pub fn set_card_list_focus(&mut self, cards_js: JsValue, name: Option<String>) -> Result<(), String> {
        let card_list: Option<Vec<Card>> = serde_wasm_bindgen::from_value(cards_js)
            .map_err(|e| format!("Failed to parse card list: {:?}", e))?;
        self.store
            .dispatch(Action::SetCardListFocus { card_list, name });
        Ok(())
    }

    #[wasm_bindgen]
    pub fn clear_card_list_focus(&mut self) {
        self.store.dispatch(Action::ClearCardListFocus);
    }

    /// Dispatch any action in its `{type, payload}` JSON form
    #[wasm_bindgen]
    pub fn dispatch(&mut self, action_js: JsValue) -> Result<(), String> {
        let action: Action = serde_wasm_bindgen::from_value(action_js)
            .map_err(|e| format!("Failed to parse action: {:?}", e))?;
        self.store.dispatch(action);
        Ok(())
    }

    /// Feed the text of a `GetNextTurn3` response. Returns false (and keeps
    /// the old board) if it does not parse.
    #[wasm_bindgen]
    pub fn apply_next_turn(&mut self, text: &str) -> bool {
        self.store.apply_turn_text(text)
    }

    /// Record a failed `fetch`; the board is left as it was
    #[wasm_bindgen]
    pub fn next_turn_failed(&mut self, reason: &str) {
        log::error(&format!("next turn failed: {}", reason));
        self.store.dispatch(Action::NextTurnFulfilled(None));
    }

    #[wasm_bindgen]
    pub fn request_rejected(&mut self, status: String, message: Option<String>) {
        self.store
            .dispatch(Action::RequestRejected { status, message });
    }

    #[wasm_bindgen]
    pub fn dismiss_toast(&mut self, id: u64) {
        self.store.dispatch(Action::DismissToast(id));
    }

    /// Request descriptor for an endpoint given as `{type, ...}` JSON
    #[wasm_bindgen]
    pub fn request(&self, endpoint_js: JsValue) -> Result<JsValue, String> {
        let endpoint: Endpoint = serde_wasm_bindgen::from_value(endpoint_js)
            .map_err(|e| format!("Failed to parse endpoint: {:?}", e))?;
        let request = endpoint
            .to_request(&self.config, self.store.game_info())
            .map_err(|e| e.to_string())?;
        Ok(to_js("request", &request))
    }

    /// URL to `fetch` for the next turn, query string included
    #[wasm_bindgen]
    pub fn next_turn_url(&self) -> Result<String, String> {
        let request = Endpoint::NextTurn
            .to_request(&self.config, self.store.game_info())
            .map_err(|e| e.to_string())?;
        let query: Vec<String> = request
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        Ok(format!("{}?{}", request.url, query.join("&")))
    }

    /// Get the current board view
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        log::debug("get_view", "Serializing client state to view");
        to_js("get_view", &self.view())
    }

    /// Get the raw store contents
    #[wasm_bindgen]
    pub fn get_state(&self) -> JsValue {
        to_js("get_state", self.store.state())
    }

    #[wasm_bindgen]
    pub fn turns_received(&self) -> u64 {
        self.store.state().turns_received
    }
}

// Native-side accessors
impl GameSession {
    pub fn state(&self) -> &ClientState {
        self.store.state()
    }

    pub fn view(&self) -> GameView {
        GameView::from_state(self.store.state())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}
