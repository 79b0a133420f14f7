//! Server endpoints and routing limits
//!
//! Games are spread over three deployments by id. Defaults are compiled
//! in; native builds layer `FABO_*` environment overrides on top
//! (`fabo_api::load_config`).

use serde::{Deserialize, Serialize};

pub const API_URL_DEV: &str = "http://localhost/FaBOnline/";
pub const API_URL_BETA: &str = "https://beta.fleshandbloodonline.com/FaBOnline/";
pub const API_URL_LIVE: &str = "https://www.fleshandbloodonline.com/FaBOnline2/";
/// Game list served by the local dev proxy
pub const GAME_LIST_DEV_URL: &str = "http://127.0.0.1:5173/api/live/APIs/GetGameList.php";
/// Games above this id live on the beta server
pub const GAME_LIMIT_BETA: u64 = 1_000;
/// Games above this id live on the live server
pub const GAME_LIMIT_LIVE: u64 = 100_000;

/// Relative endpoint paths
pub mod endpoint {
    pub const NEXT_TURN: &str = "GetNextTurn3.php";
    pub const GET_POPUP: &str = "GetPopupAPI.php";
    pub const SUBMIT_CHAT: &str = "SubmitChat.php";
    pub const GET_GAME_LIST: &str = "APIs/GetGameList.php";
    pub const GET_FAVORITE_DECKS: &str = "APIs/GetFavoriteDecks.php";
    pub const CREATE_GAME: &str = "APIs/CreateGame.php";
    pub const JOIN_GAME: &str = "APIs/JoinGame.php";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub dev_url: String,
    pub beta_url: String,
    pub live_url: String,
    pub game_list_dev_url: String,
    pub beta_game_limit: u64,
    pub live_game_limit: u64,
    /// Development build: unselected games and the game list go to dev
    pub dev_mode: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            dev_url: API_URL_DEV.to_string(),
            beta_url: API_URL_BETA.to_string(),
            live_url: API_URL_LIVE.to_string(),
            game_list_dev_url: GAME_LIST_DEV_URL.to_string(),
            beta_game_limit: GAME_LIMIT_BETA,
            live_game_limit: GAME_LIMIT_LIVE,
            dev_mode: cfg!(debug_assertions),
        }
    }
}

impl ApiConfig {
    /// Point every deployment at one server (local testing)
    pub fn single_server(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            dev_url: url.clone(),
            beta_url: url.clone(),
            game_list_dev_url: join_url(&url, endpoint::GET_GAME_LIST),
            live_url: url,
            ..Self::default()
        }
    }

    /// Which deployment serves a game
    pub fn base_url(&self, game_id: u64) -> &str {
        if game_id == 0 {
            return if self.dev_mode {
                &self.dev_url
            } else {
                &self.live_url
            };
        }
        if game_id > self.live_game_limit {
            &self.live_url
        } else if game_id > self.beta_game_limit {
            &self.beta_url
        } else {
            &self.dev_url
        }
    }

    pub fn game_list_url(&self) -> String {
        if self.dev_mode {
            self.game_list_dev_url.clone()
        } else {
            join_url(&self.live_url, endpoint::GET_GAME_LIST)
        }
    }
}

/// Join a base URL and a relative path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
