use serde::de::DeserializeOwned;

use fabo_core::api::{
    CreateGameRequest, CreateGameResponse, FavoriteDecksResponse, GameListResponse,
    JoinGameRequest, JoinGameResponse,
};
use fabo_core::log;
use fabo_core::{parse_game_state, ApiConfig, Endpoint, GameInfo, GameState};

use crate::error::{ApiError, ApiResult};
use crate::transport::{Response, Transport, UreqTransport};

/// Executes every server call for one configuration
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = UreqTransport> {
    transport: T,
    config: ApiConfig,
}

impl ApiClient<UreqTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, UreqTransport::default())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Poll the next turn and parse it into a board snapshot
    pub fn next_turn(&self, info: &GameInfo) -> ApiResult<GameState> {
        let text = self.text(&Endpoint::NextTurn, info)?;
        Ok(parse_game_state(&text)?)
    }

    /// Popup body; its shape depends on the popup type
    pub fn popup_content(
        &self,
        info: &GameInfo,
        popup_type: &str,
        index: u32,
    ) -> ApiResult<serde_json::Value> {
        let endpoint = Endpoint::PopupContent {
            popup_type: popup_type.to_string(),
            index,
        };
        self.json(&endpoint, info)
    }

    pub fn submit_chat(&self, info: &GameInfo, chat_text: &str) -> ApiResult<String> {
        let endpoint = Endpoint::SubmitChat {
            chat_text: chat_text.to_string(),
        };
        self.text(&endpoint, info)
    }

    pub fn game_list(&self) -> ApiResult<GameListResponse> {
        self.json(&Endpoint::GameList, &GameInfo::default())
    }

    pub fn favorite_decks(&self, info: &GameInfo) -> ApiResult<FavoriteDecksResponse> {
        self.json(&Endpoint::FavoriteDecks, info)
    }

    pub fn create_game(&self, body: CreateGameRequest) -> ApiResult<CreateGameResponse> {
        self.json(&Endpoint::CreateGame(body), &GameInfo::default())
    }

    /// Routed by the game being joined
    pub fn join_game(&self, body: JoinGameRequest) -> ApiResult<JoinGameResponse> {
        let info = GameInfo::new(body.game_name, body.player_id, "");
        self.json(&Endpoint::JoinGame(body), &info)
    }

    fn send(&self, endpoint: &Endpoint, info: &GameInfo) -> ApiResult<Response> {
        let request = endpoint.to_request(&self.config, info)?;
        let response = self.transport.execute(&request)?;
        if !response.is_success() {
            log::warn(&format!(
                "{} returned status {}",
                request.url, response.status
            ));
            return Err(ApiError::Status(response.status));
        }
        Ok(response)
    }

    fn text(&self, endpoint: &Endpoint, info: &GameInfo) -> ApiResult<String> {
        Ok(self.send(endpoint, info)?.body)
    }

    fn json<R: DeserializeOwned>(&self, endpoint: &Endpoint, info: &GameInfo) -> ApiResult<R> {
        let response = self.send(endpoint, info)?;
        Ok(serde_json::from_str(&response.body)?)
    }
}
