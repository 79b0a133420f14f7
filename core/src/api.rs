//! Request descriptors for the game server
//!
//! Nothing here touches the network. An [`Endpoint`] is turned into an
//! [`ApiRequest`] that a transport (ureq on the terminal, `fetch` in the
//! browser) executes.

use serde::{Deserialize, Serialize};

use crate::config::{endpoint, join_url, ApiConfig};
use crate::error::{GameError, GameResult};
use crate::state::GameInfo;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// Whether cookies travel with the request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Credentials {
    Include,
    Omit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Query parameters, in order
    pub params: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub credentials: Credentials,
}

impl ApiRequest {
    fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            params: Vec::new(),
            body: None,
            credentials: Credentials::Include,
        }
    }

    fn post(url: String, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url,
            params: Vec::new(),
            body: Some(body),
            credentials: Credentials::Include,
        }
    }

    fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Body of a create-game request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Deck link (fabdb, fabrary, ...)
    pub fabdb: String,
    #[serde(default)]
    pub deck: Option<String>,
    pub format: String,
    pub visibility: String,
    #[serde(default)]
    pub deck_test_mode: bool,
    #[serde(default)]
    pub favorite_deck: bool,
    #[serde(default)]
    pub favorite_decks: Option<String>,
    #[serde(default)]
    pub game_description: Option<String>,
}

/// Body of a join-game request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameRequest {
    pub game_name: u64,
    #[serde(rename = "playerID")]
    pub player_id: u32,
    pub fabdb: String,
    #[serde(default)]
    pub deck: Option<String>,
    #[serde(default)]
    pub favorite_deck: bool,
    #[serde(default)]
    pub favorite_decks: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub game_name: Option<u64>,
    #[serde(default, rename = "playerID")]
    pub player_id: Option<u32>,
    #[serde(default)]
    pub auth_key: Option<String>,
}

impl CreateGameResponse {
    /// Identity to store once the game exists
    pub fn game_info(&self) -> Option<GameInfo> {
        Some(GameInfo::new(
            self.game_name?,
            self.player_id?,
            self.auth_key.clone().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub game_name: Option<u64>,
    #[serde(default, rename = "playerID")]
    pub player_id: Option<u32>,
    #[serde(default)]
    pub auth_key: Option<String>,
}

impl JoinGameResponse {
    pub fn game_info(&self) -> Option<GameInfo> {
        Some(GameInfo::new(
            self.game_name?,
            self.player_id?,
            self.auth_key.clone().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameInProgress {
    pub game_name: u64,
    #[serde(default)]
    pub p1_hero: Option<String>,
    #[serde(default)]
    pub p2_hero: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub seconds_since_last_update: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenGame {
    pub game_name: u64,
    #[serde(default)]
    pub p1_hero: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameListResponse {
    #[serde(default)]
    pub games_in_progress: Vec<GameInProgress>,
    #[serde(default)]
    pub open_games: Vec<OpenGame>,
    #[serde(default)]
    pub game_in_progress_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDeck {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub hero: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDecksResponse {
    #[serde(default)]
    pub favorite_decks: Vec<FavoriteDeck>,
    #[serde(default)]
    pub last_used_deck_index: Option<usize>,
}

/// Every call the client makes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Endpoint {
    /// Poll for the next turn (text blob)
    NextTurn,
    #[serde(rename_all = "camelCase")]
    PopupContent { popup_type: String, index: u32 },
    #[serde(rename_all = "camelCase")]
    SubmitChat { chat_text: String },
    GameList,
    FavoriteDecks,
    CreateGame(CreateGameRequest),
    JoinGame(JoinGameRequest),
}

impl Endpoint {
    /// Build the request for the game in `info`, routed by its id
    pub fn to_request(&self, config: &ApiConfig, info: &GameInfo) -> GameResult<ApiRequest> {
        let url = |path: &str| join_url(config.base_url(info.game_id), path);
        let request = match self {
            Endpoint::NextTurn => {
                if info.game_id == 0 {
                    return Err(GameError::NoGameSelected);
                }
                ApiRequest::get(url(endpoint::NEXT_TURN))
                    .param("gameName", info.game_id)
                    .param("playerID", info.player_id)
            }
            Endpoint::PopupContent { popup_type, index } => {
                ApiRequest::get(url(endpoint::GET_POPUP))
                    .param("gameName", info.game_id)
                    .param("playerID", info.player_id)
                    .param("authKey", &info.auth_key)
                    .param("popupType", popup_type)
                    .param("index", index)
            }
            Endpoint::SubmitChat { chat_text } => ApiRequest::get(url(endpoint::SUBMIT_CHAT))
                .param("gameName", info.game_id)
                .param("playerID", info.player_id)
                .param("authKey", &info.auth_key)
                .param("chatText", chat_text),
            Endpoint::GameList => {
                let mut request = ApiRequest::get(config.game_list_url());
                request.credentials = Credentials::Omit;
                request
            }
            Endpoint::FavoriteDecks => ApiRequest::get(url(endpoint::GET_FAVORITE_DECKS)),
            Endpoint::CreateGame(body) => {
                ApiRequest::post(url(endpoint::CREATE_GAME), serde_json::to_value(body)?)
            }
            Endpoint::JoinGame(body) => {
                ApiRequest::post(url(endpoint::JOIN_GAME), serde_json::to_value(body)?)
            }
        };
        Ok(request)
    }
}
