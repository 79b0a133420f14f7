use serde::{Deserialize, Serialize};

use crate::types::*;

/// Text shown while a card is dragged over the play area
pub const PLAY_CARD_MESSAGE: &str = "Release to play this card";

/// Which game and seat this client is talking about
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    /// 0 means no game selected
    #[serde(rename = "gameID")]
    pub game_id: u64,
    #[serde(rename = "playerID")]
    pub player_id: u32,
    pub auth_key: String,
}

impl GameInfo {
    pub fn new(game_id: u64, player_id: u32, auth_key: impl Into<String>) -> Self {
        Self {
            game_id,
            player_id,
            auth_key: auth_key.into(),
        }
    }
}

/// The attack currently being resolved
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CombatChain {
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub attack_target: Option<String>,
    #[serde(default)]
    pub total_attack: Option<i32>,
    #[serde(default)]
    pub total_defence: Option<i32>,
    #[serde(default)]
    pub go_again: Option<bool>,
    #[serde(default)]
    pub dominate: Option<bool>,
    #[serde(default)]
    pub attacking_card: Option<Card>,
    #[serde(default)]
    pub reaction_cards: Vec<Card>,
}

/// Layers waiting to resolve, some of which the player may reorder
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLayers {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub card_list: Vec<Card>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub is_reorderable: bool,
}

/// Board snapshot delivered by one successful poll
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_one: Player,
    pub player_two: Player,
    #[serde(default)]
    pub active_combat_chain: Option<CombatChain>,
    #[serde(default)]
    pub active_layers: Option<ActiveLayers>,
    #[serde(default)]
    pub old_combat_chain: Option<Vec<Card>>,
}

/// Card detail overlay
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub popup_on: bool,
    pub x_coord: Option<i32>,
    pub y_coord: Option<i32>,
    pub popup_card: Option<Card>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayCardMessage {
    #[serde(rename = "popUpOn")]
    pub popup_on: bool,
    pub message: Option<String>,
}

/// A zone's card list pulled up for closer inspection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardListFocus {
    pub active: bool,
    pub card_list: Option<Vec<Card>>,
    pub name: Option<String>,
}

/// Transient error notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Everything the client store holds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    pub game_info: GameInfo,
    pub game: GameState,
    pub popup: Popup,
    pub play_card_message: PlayCardMessage,
    pub card_list_focus: Option<CardListFocus>,
    pub toasts: Vec<Toast>,
    /// Successful polls applied so far
    pub turns_received: u64,
}

impl ClientState {
    pub fn new(game_info: GameInfo) -> Self {
        Self {
            game_info,
            ..Self::default()
        }
    }

    /// Replace the board with a freshly polled snapshot
    pub fn apply_turn(&mut self, turn: GameState) {
        self.game = turn;
        self.turns_received += 1;
    }
}
